use crate::config::DEFAULT_POINTER_THRESHOLD;
use crate::model::Point;

// Last significant pointer sample
#[derive(Debug, Clone)]
pub struct PointerTracker {
    last: Point,
    threshold: f64,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(DEFAULT_POINTER_THRESHOLD)
    }
}

impl PointerTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            last: Point::ZERO,
            threshold,
        }
    }

    pub fn last(&self) -> Point {
        self.last
    }

    /// Records `p` unless it moved less than the threshold (Manhattan distance) since
    /// the last accepted sample.
    pub fn accept(&mut self, p: Point) -> bool {
        if p.manhattan_distance(&self.last) < self.threshold {
            return false;
        }
        self.last = p;
        true
    }

    pub fn reset_to(&mut self, p: Point) {
        self.last = p;
    }
}
