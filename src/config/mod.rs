// src/config/mod.rs
//! レイアウト定数と、ホストから渡される設定。

pub mod layout;
pub mod view_config;

pub use layout::TableLayout;
pub use view_config::ViewConfig;
