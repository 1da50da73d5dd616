// src/app/state_getter.rs
//! 描画プロキシ 52 枚ぶんを JSON にする。自前で描画したいホスト向けだよ。

use log::{debug, error};
use serde::Serialize;

use crate::components::card_layer::CardLayer;
use crate::error::SolitaireError;

use super::interaction::InteractionController;

#[derive(Debug, Serialize)]
struct LayerSnapshot<'a> {
    won: bool,
    dragging: bool,
    top_z: u64,
    /// `CardId` の順
    layers: &'a [CardLayer],
}

pub fn layers_json(controller: &InteractionController) -> Result<String, SolitaireError> {
    let snapshot = LayerSnapshot {
        won: controller.is_won(),
        dragging: controller.state().is_dragging(),
        top_z: controller.layers().top_z(),
        layers: controller.layers().layers(),
    };
    match serde_json::to_string(&snapshot) {
        Ok(json) => {
            debug!("Serialized {} layers", snapshot.layers.len());
            Ok(json)
        }
        Err(e) => {
            error!("Failed to serialize layers: {}", e);
            Err(SolitaireError::Snapshot(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::view_config::ViewConfig;
    use crate::logic::rules::Klondike;

    #[test]
    fn snapshot_lists_every_layer() {
        let controller =
            InteractionController::new(Box::new(Klondike::with_seed(1)), ViewConfig::default(), 375.0, 667.0);
        let json = layers_json(&controller).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["layers"].as_array().map(Vec::len), Some(52));
        assert_eq!(value["won"], serde_json::Value::Bool(false));
        assert_eq!(value["top_z"].as_u64(), Some(controller.layers().top_z()));
    }
}
