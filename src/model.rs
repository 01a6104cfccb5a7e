use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Sum of the absolute per-axis differences.
    pub fn manhattan_distance(&self, other: &Point) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Width/height pair as reported by a measured element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Viewport and content dimensions used for mapping pointer to offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Rendered content width plus `margin_x`.
    pub content_width: f64,
    /// Rendered content height plus `margin_y`.
    pub content_height: f64,
    pub margin_x: f64,
    pub margin_y: f64,
}

impl Geometry {
    /// Builds geometry from raw measurements; the margins are added to the content size.
    pub fn measured(viewport: Size, content: Size, margin_x: f64, margin_y: f64) -> Self {
        Self {
            viewport_width: viewport.width,
            viewport_height: viewport.height,
            content_width: content.width + margin_x,
            content_height: content.height + margin_y,
            margin_x,
            margin_y,
        }
    }

    pub fn ratio_x(&self) -> f64 {
        overhang_ratio(self.content_width, self.viewport_width)
    }

    pub fn ratio_y(&self) -> f64 {
        overhang_ratio(self.content_height, self.viewport_height)
    }
}

// Never negative; a collapsed viewport counts as "fits".
fn overhang_ratio(content: f64, viewport: f64) -> f64 {
    if viewport <= 0.0 {
        return 0.0;
    }
    let ratio = (content - viewport) / viewport;
    if ratio.is_finite() { ratio.max(0.0) } else { 0.0 }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    pub position: Point,
    pub target: Point,
    pub running: bool,
}
