// src/config/view_config.rs
//! ホスト (JS) から渡される設定だよ。全部の項目にデフォルトがあるので、
//! `{}` だけ渡しても動く！⚙️

use serde::{Deserialize, Serialize};

use crate::error::SolitaireError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// 縦画面での場札の重なり幅 (カードの高さに対する割合)
    pub fan_offset_portrait: f32,
    /// 横画面での重なり幅
    pub fan_offset_landscape: f32,
    /// この時間 (ms) 以内の 2 回目のタッチはダブルタップ扱い
    pub double_tap_ms: f64,
    /// ダブルタップとみなす 2 点間の最大距離 (px)
    pub double_tap_slop: f32,
    /// 配りを再現したい時のシード。`None` ならランダム🎲
    pub seed: Option<u64>,
    /// レイアウトパスでアニメーションのヒントを付けるか
    pub animate_layout: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            fan_offset_portrait: 0.2,
            fan_offset_landscape: 0.15,
            double_tap_ms: 300.0,
            double_tap_slop: 24.0,
            seed: None,
            animate_layout: true,
        }
    }
}

impl ViewConfig {
    pub fn from_json(json: &str) -> Result<Self, SolitaireError> {
        let config: ViewConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), SolitaireError> {
        for (name, value) in [
            ("fan_offset_portrait", self.fan_offset_portrait),
            ("fan_offset_landscape", self.fan_offset_landscape),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SolitaireError::Config(format!("{} must be within 0..=1, got {}", name, value)));
            }
        }
        if self.double_tap_ms < 0.0 {
            return Err(SolitaireError::Config("double_tap_ms must not be negative".to_string()));
        }
        Ok(())
    }
}
