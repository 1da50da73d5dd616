// src/app/renderer.rs
//! Canvas 2D への描画。山の置き場所を描いてから、カードを z の小さい順に重ねていくよ🎨

use log::trace;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::components::card::{Card, CardColor, Rank, Suit};
use crate::components::card_layer::CardLayer;
use crate::components::stack::StackType;

use super::interaction::InteractionController;

const TABLE_COLOR: &str = "#0b6623";
const ZONE_COLOR: &str = "rgba(0, 128, 26, 0.3)";
const FACE_COLOR: &str = "#ffffff";
const BACK_COLOR: &str = "#1e3a8a";
const EDGE_COLOR: &str = "#333333";
const RED: &str = "#c8102e";
const BLACK: &str = "#111111";

pub fn render(controller: &InteractionController, context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
    let table = controller.table();
    let bounds = table.bounds();
    let (width, height) = (f64::from(bounds.width), f64::from(bounds.height));

    context.clear_rect(0.0, 0.0, width, height);
    context.set_fill_style_str(TABLE_COLOR);
    context.fill_rect(0.0, 0.0, width, height);

    context.set_fill_style_str(ZONE_COLOR);
    for stack in StackType::traversal_order() {
        let zone = table.anchor(stack);
        context.fill_rect(
            f64::from(zone.x),
            f64::from(zone.y),
            f64::from(zone.width),
            f64::from(zone.height),
        );
    }

    let (card_width, _) = table.card_size();
    let font_size = (card_width * 0.3).max(8.0);
    context.set_font(&format!("{}px sans-serif", font_size.round()));

    let layers = controller.layers().by_z();
    for layer in layers.iter().filter(|layer| layer.visible) {
        draw_card(context, layer)?;
    }
    trace!("Rendered {} layers", layers.len());
    Ok(())
}

fn draw_card(context: &CanvasRenderingContext2d, layer: &CardLayer) -> Result<(), JsValue> {
    let (w, h) = (f64::from(layer.width), f64::from(layer.height));

    context.save();
    context.translate(f64::from(layer.position.x), f64::from(layer.position.y))?;
    context.rotate(f64::from(layer.rotation))?;

    context.set_fill_style_str(if layer.face_up { FACE_COLOR } else { BACK_COLOR });
    context.fill_rect(-w / 2.0, -h / 2.0, w, h);
    context.set_stroke_style_str(EDGE_COLOR);
    context.stroke_rect(-w / 2.0, -h / 2.0, w, h);

    if layer.face_up {
        let color = match layer.card.color() {
            CardColor::Red => RED,
            CardColor::Black => BLACK,
        };
        context.set_fill_style_str(color);
        context.fill_text(&label(layer.card), -w / 2.0 + 3.0, -h / 2.0 + w * 0.3 + 2.0)?;
    }

    context.restore();
    Ok(())
}

/// "10♥" みたいな表示用の文字列
pub fn label(card: Card) -> String {
    let rank = match card.rank {
        Rank::Ace => "A".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        other => (other as u8).to_string(),
    };
    let suit = match card.suit {
        Suit::Heart => '♥',
        Suit::Diamond => '♦',
        Suit::Club => '♣',
        Suit::Spade => '♠',
    };
    format!("{}{}", rank, suit)
}
