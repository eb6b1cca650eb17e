use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Squared distance, saturating at `i64::MAX` for spans beyond any map.
    pub fn distance_sq(self, other: Point) -> i64 {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.distance_sq(other) as f64).sqrt()
    }
}
