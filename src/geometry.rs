//! Circumscribed circle of three points.
//!
//! The solver intersects the perpendicular bisectors of `p1–p2` and `p2–p3`.
//! Vertical bisectors are handled on their own branch so the general
//! slope-intercept path never divides by a near-zero slope difference.

use crate::model::{Circle, Point};

/// Below this absolute determinant the three points count as collinear.
pub const COLLINEAR_TOLERANCE: f64 = 1e-10;

/// Slope of a line in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Slope {
    Finite(f64),
    Vertical,
}

impl Slope {
    fn of_segment(a: Point, b: Point) -> Self {
        let dx = b.x - a.x;
        if dx == 0.0 {
            Slope::Vertical
        } else {
            Slope::Finite((b.y - a.y) / dx)
        }
    }

    fn perpendicular(self) -> Self {
        match self {
            Slope::Vertical => Slope::Finite(0.0),
            Slope::Finite(m) if m == 0.0 => Slope::Vertical,
            Slope::Finite(m) => Slope::Finite(-1.0 / m),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Bisector {
    mid: Point,
    slope: Slope,
}

impl Bisector {
    fn of_segment(a: Point, b: Point) -> Self {
        Self {
            mid: a.midpoint(b),
            slope: Slope::of_segment(a, b).perpendicular(),
        }
    }

    /// `y` on a non-vertical bisector at the given `x`.
    fn y_at(&self, m: f64, x: f64) -> f64 {
        m * (x - self.mid.x) + self.mid.y
    }
}

/// Twice the signed area of the triangle `p1 p2 p3`.
pub fn signed_area_determinant(p1: Point, p2: Point, p3: Point) -> f64 {
    p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y)
}

pub fn is_collinear(p1: Point, p2: Point, p3: Point) -> bool {
    signed_area_determinant(p1, p2, p3).abs() < COLLINEAR_TOLERANCE
}

/// Circle through `p1`, `p2` and `p3`, or `None` when the points are collinear.
pub fn circle_from_three_points(p1: Point, p2: Point, p3: Point) -> Option<Circle> {
    if is_collinear(p1, p2, p3) {
        return None;
    }

    let ab = Bisector::of_segment(p1, p2);
    let bc = Bisector::of_segment(p2, p3);

    let center = match (ab.slope, bc.slope) {
        (Slope::Vertical, Slope::Finite(m)) => {
            let x = ab.mid.x;
            Point::new(x, bc.y_at(m, x))
        }
        (Slope::Finite(m), Slope::Vertical) => {
            let x = bc.mid.x;
            Point::new(x, ab.y_at(m, x))
        }
        (Slope::Finite(a1), Slope::Finite(a2)) => {
            let b1 = ab.mid.y - a1 * ab.mid.x;
            let b2 = bc.mid.y - a2 * bc.mid.x;
            let x = (b2 - b1) / (a1 - a2);
            Point::new(x, a1 * x + b1)
        }
        // Two vertical bisectors mean p1, p2, p3 share a y; the determinant already caught it.
        (Slope::Vertical, Slope::Vertical) => return None,
    };

    Some(Circle {
        center,
        radius: center.distance(p1),
    })
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;
