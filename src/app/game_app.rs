// src/app/game_app.rs
//! JavaScript から使う入り口 `SolitaireApp` だよ！
//! ブラウザのタッチイベントをそのまま流してもらって、描画も Canvas に直接やる。

use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::components::position::Position;
use crate::config::view_config::ViewConfig;
use crate::error::SolitaireError;
use crate::logic::rules::{Klondike, RulesEngine};

use super::hit_resolver::ViewTransform;
use super::interaction::{Gesture, InteractionController, TouchEvent};
use super::renderer;
use super::state_getter;
use super::tap_counter::TapCounter;

const WIN_MESSAGE: &str = "YOU WON! Congrats!\nPlay again?";

#[wasm_bindgen]
pub struct SolitaireApp {
    controller: InteractionController,
    taps: TapCounter,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

#[wasm_bindgen]
impl SolitaireApp {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<SolitaireApp, JsValue> {
        Ok(Self::build(canvas_id, ViewConfig::default())?)
    }

    /// JSON の設定付きで作る (書いてない項目はデフォルト値)。
    pub fn with_config(canvas_id: &str, config_json: &str) -> Result<SolitaireApp, JsValue> {
        let config = ViewConfig::from_json(config_json)?;
        Ok(Self::build(canvas_id, config)?)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.canvas.set_width(width.max(1.0) as u32);
        self.canvas.set_height(height.max(1.0) as u32);
        self.controller.resize(width, height);
        self.sync_view_transform();
    }

    pub fn touch_start(&mut self, id: i32, x: f32, y: f32, time_ms: f64) {
        self.sync_view_transform();
        let tap_count = self.taps.register(time_ms, Position::new(x, y));
        let gesture = self.controller.touch_began(TouchEvent::new(id, x, y, tap_count));
        self.after_gesture(gesture);
    }

    pub fn touch_move(&mut self, id: i32, x: f32, y: f32) {
        self.controller.touch_moved(TouchEvent::new(id, x, y, 1));
    }

    pub fn touch_end(&mut self, id: i32, x: f32, y: f32) {
        let gesture = self.controller.touch_ended(TouchEvent::new(id, x, y, 1));
        self.after_gesture(gesture);
    }

    pub fn touch_cancel(&mut self, id: i32) {
        self.controller.touch_cancelled(id);
    }

    pub fn render(&self) -> Result<(), JsValue> {
        renderer::render(&self.controller, &self.context)
    }

    pub fn layers_json(&self) -> Result<String, JsValue> {
        Ok(state_getter::layers_json(&self.controller)?)
    }

    pub fn new_game(&mut self) {
        self.taps.reset();
        self.controller.new_game();
    }

    pub fn is_won(&self) -> bool {
        self.controller.is_won()
    }
}

impl SolitaireApp {
    fn build(canvas_id: &str, config: ViewConfig) -> Result<Self, SolitaireError> {
        let (canvas, context) = init_canvas(canvas_id)?;
        let rules: Box<dyn RulesEngine> = match config.seed {
            Some(seed) => Box::new(Klondike::with_seed(seed)),
            None => Box::new(Klondike::new()),
        };
        let (width, height) = (canvas.width() as f32, canvas.height() as f32);
        let taps = TapCounter::new(&config);
        let controller = InteractionController::new(rules, config, width, height);
        info!("SolitaireApp ready on #{} ({}x{})", canvas_id, width, height);

        let mut app = Self { controller, taps, canvas, context };
        app.sync_view_transform();
        Ok(app)
    }

    /// ページ上の canvas の位置と CSS 拡大率を、クライアント座標の変換に反映する。
    fn sync_view_transform(&mut self) {
        let rect = self.canvas.get_bounding_client_rect();
        let scale = if self.canvas.width() > 0 {
            rect.width() as f32 / self.canvas.width() as f32
        } else {
            1.0
        };
        self.controller.set_view_transform(ViewTransform {
            offset_x: rect.x() as f32,
            offset_y: rect.y() as f32,
            scale,
        });
    }

    fn after_gesture(&mut self, gesture: Gesture) {
        if gesture != Gesture::Ignored {
            debug!("Gesture: {:?}", gesture);
        }
        if self.controller.take_win_prompt() && confirm_play_again() {
            self.new_game();
        }
    }
}

fn init_canvas(canvas_id: &str) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), SolitaireError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SolitaireError::Canvas("no document".to_string()))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| SolitaireError::Canvas(format!("#{} not found", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SolitaireError::Canvas(format!("#{} is not a canvas", canvas_id)))?;
    let context = canvas
        .get_context("2d")
        .map_err(|_| SolitaireError::Canvas("get_context failed".to_string()))?
        .ok_or_else(|| SolitaireError::Canvas("missing 2d context".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SolitaireError::Canvas("not a 2d context".to_string()))?;
    Ok((canvas, context))
}

/// 勝った時の「もう一回？」確認。1 勝につき 1 回しか呼ばれない。
fn confirm_play_again() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match window.confirm_with_message(WIN_MESSAGE) {
        Ok(answer) => answer,
        Err(e) => {
            error!("confirm() failed: {:?}", e);
            false
        }
    }
}
