// src/components/position.rs

use serde::{Serialize, Deserialize};

/// 2D空間での位置 (x, y) だよ！📍 レイヤーの中心点やタッチ座標に使う。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// `self - other` の差分。ドラッグ量の計算に使うよ。
    pub fn delta_from(self, other: Position) -> (f32, f32) {
        (self.x - other.x, self.y - other.y)
    }

    pub fn offset(self, dx: f32, dy: f32) -> Position {
        Position { x: self.x + dx, y: self.y + dy }
    }
}

/// 左上 (x, y) と幅・高さで表す矩形。カードの frame や山のエリアに使う。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// 中心点とサイズから矩形を作る。
    pub fn from_center(center: Position, width: f32, height: f32) -> Self {
        Self {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// 点が矩形の中にあるか。右端と下端は含まないよ。
    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    /// 2つの矩形が重なってるか。辺が接してるだけなら重なってない扱い！
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}
