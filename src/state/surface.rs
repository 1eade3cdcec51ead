// Drawing surface geometry: bounding box offset and grid layout.
use crate::model::Point;

/// Original grid spacing in surface pixels.
pub const DEFAULT_GRID_SPACING: f64 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn from_dom_rect(rect: &web_sys::DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    /// Converts viewport (client) coordinates into surface coordinates.
    pub fn to_surface(&self, client_x: f64, client_y: f64) -> Point {
        Point::new(client_x - self.left, client_y - self.top)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.width && p.y <= self.height
    }
}

/// Offsets of grid lines along one axis: `0, spacing, 2*spacing, ...` strictly below `extent`.
pub fn grid_lines(extent: f64, spacing: f64) -> Vec<f64> {
    if !(spacing > 0.0) || !(extent > 0.0) {
        return Vec::new();
    }
    let count = (extent / spacing).ceil() as usize;
    (0..count)
        .map(|i| i as f64 * spacing)
        .filter(|v| *v < extent)
        .collect()
}

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;
