// src/app/tap_counter.rs
//! ブラウザのタッチイベントには「何回目のタップか」が無いので、自分で数える。

use crate::components::position::Position;
use crate::config::view_config::ViewConfig;

#[derive(Debug, Clone)]
pub struct TapCounter {
    window_ms: f64,
    slop: f32,
    last: Option<(f64, Position)>,
    count: u32,
}

impl TapCounter {
    pub fn new(config: &ViewConfig) -> Self {
        Self { window_ms: config.double_tap_ms, slop: config.double_tap_slop, last: None, count: 0 }
    }

    /// タッチ開始を 1 回記録して、連続タップの回数 (1 始まり) を返す。
    pub fn register(&mut self, time_ms: f64, point: Position) -> u32 {
        let continues = self.last.is_some_and(|(t, p)| {
            let (dx, dy) = point.delta_from(p);
            let elapsed = time_ms - t;
            (0.0..=self.window_ms).contains(&elapsed) && dx.hypot(dy) <= self.slop
        });
        self.count = if continues { self.count + 1 } else { 1 };
        self.last = Some((time_ms, point));
        self.count
    }

    pub fn reset(&mut self) {
        self.last = None;
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_taps_in_place_count_up() {
        let mut taps = TapCounter::new(&ViewConfig::default());
        let p = Position::new(100.0, 100.0);
        assert_eq!(taps.register(1000.0, p), 1);
        assert_eq!(taps.register(1200.0, p.offset(5.0, 5.0)), 2);
        assert_eq!(taps.register(1400.0, p), 3);
    }

    #[test]
    fn slow_or_distant_taps_start_over() {
        let mut taps = TapCounter::new(&ViewConfig::default());
        let p = Position::new(100.0, 100.0);
        assert_eq!(taps.register(0.0, p), 1);
        assert_eq!(taps.register(301.0, p), 1, "遅すぎ");
        assert_eq!(taps.register(350.0, p.offset(40.0, 0.0)), 1, "離れすぎ");
        taps.reset();
        assert_eq!(taps.register(360.0, p.offset(40.0, 0.0)), 1);
    }
}
