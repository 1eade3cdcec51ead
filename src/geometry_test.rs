#![allow(clippy::float_cmp)]

use super::*;

const EPS: f64 = 1e-6;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn assert_passes_through(c: Circle, pts: [Point; 3]) {
    for q in pts {
        let d = c.center.distance(q);
        assert!(
            (d - c.radius).abs() < EPS,
            "distance {d} to ({}, {}) differs from radius {}",
            q.x,
            q.y,
            c.radius
        );
    }
}

fn assert_center(c: Circle, x: f64, y: f64) {
    assert!((c.center.x - x).abs() < EPS, "center.x = {}", c.center.x);
    assert!((c.center.y - y).abs() < EPS, "center.y = {}", c.center.y);
}

// =============================================================
// General position
// =============================================================

#[test]
fn right_triangle_has_center_on_hypotenuse() {
    let pts = [p(0.0, 0.0), p(6.0, 0.0), p(0.0, 8.0)];
    let c = circle_from_three_points(pts[0], pts[1], pts[2]).unwrap();
    assert_center(c, 3.0, 4.0);
    assert!((c.radius - 5.0).abs() < EPS);
    assert_passes_through(c, pts);
}

#[test]
fn scattered_triangles_are_equidistant() {
    let cases = [
        [p(1.0, 2.0), p(7.5, -3.0), p(4.0, 11.0)],
        [p(120.0, 45.0), p(310.0, 200.0), p(80.0, 390.0)],
        [p(-5.0, -5.0), p(3.3, 0.7), p(0.1, 9.9)],
        [p(0.0, 0.0), p(1000.0, 1.0), p(500.0, 700.0)],
    ];
    for pts in cases {
        let c = circle_from_three_points(pts[0], pts[1], pts[2]).unwrap();
        assert!(c.radius >= 0.0);
        assert_passes_through(c, pts);
    }
}

#[test]
fn click_order_does_not_change_the_circle() {
    let (a, b, c) = (p(2.0, 1.0), p(9.0, 4.0), p(3.0, 12.0));
    let first = circle_from_three_points(a, b, c).unwrap();
    let second = circle_from_three_points(c, a, b).unwrap();
    assert_center(second, first.center.x, first.center.y);
    assert!((second.radius - first.radius).abs() < EPS);
}

// =============================================================
// Collinear inputs
// =============================================================

#[test]
fn diagonal_collinear_points_have_no_circle() {
    assert_eq!(circle_from_three_points(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)), None);
}

#[test]
fn horizontal_and_vertical_lines_have_no_circle() {
    assert_eq!(circle_from_three_points(p(0.0, 4.0), p(3.0, 4.0), p(9.0, 4.0)), None);
    assert_eq!(circle_from_three_points(p(2.0, 0.0), p(2.0, 5.0), p(2.0, -7.0)), None);
}

#[test]
fn determinant_below_tolerance_counts_as_collinear() {
    let a = p(0.0, 0.0);
    let b = p(1.0, 0.0);
    let c = p(2.0, 1e-11);
    assert!(signed_area_determinant(a, b, c).abs() < COLLINEAR_TOLERANCE);
    assert!(is_collinear(a, b, c));
    assert_eq!(circle_from_three_points(a, b, c), None);
}

#[test]
fn determinant_sign_follows_orientation() {
    let (a, b, c) = (p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
    assert_eq!(signed_area_determinant(a, b, c), 1.0);
    assert_eq!(signed_area_determinant(a, c, b), -1.0);
}

// =============================================================
// Axis-aligned segments
// =============================================================

#[test]
fn vertical_first_segment() {
    let pts = [p(5.0, 0.0), p(5.0, 10.0), p(0.0, 5.0)];
    let c = circle_from_three_points(pts[0], pts[1], pts[2]).unwrap();
    assert_center(c, 5.0, 5.0);
    assert!((c.radius - 5.0).abs() < EPS);
    assert_passes_through(c, pts);
}

#[test]
fn vertical_second_segment() {
    let pts = [p(0.0, 5.0), p(5.0, 0.0), p(5.0, 10.0)];
    let c = circle_from_three_points(pts[0], pts[1], pts[2]).unwrap();
    assert_center(c, 5.0, 5.0);
    assert_passes_through(c, pts);
}

#[test]
fn horizontal_first_segment_uses_vertical_bisector() {
    let pts = [p(0.0, 0.0), p(2.0, 0.0), p(1.0, 2.0)];
    let c = circle_from_three_points(pts[0], pts[1], pts[2]).unwrap();
    assert_center(c, 1.0, 0.75);
    assert!((c.radius - 1.25).abs() < EPS);
    assert_passes_through(c, pts);
}

#[test]
fn horizontal_second_segment_uses_vertical_bisector() {
    let pts = [p(1.0, 2.0), p(0.0, 0.0), p(2.0, 0.0)];
    let c = circle_from_three_points(pts[0], pts[1], pts[2]).unwrap();
    assert_center(c, 1.0, 0.75);
    assert_passes_through(c, pts);
}

#[test]
fn vertical_and_horizontal_segments_together() {
    let pts = [p(0.0, 0.0), p(0.0, 4.0), p(6.0, 4.0)];
    let c = circle_from_three_points(pts[0], pts[1], pts[2]).unwrap();
    assert_center(c, 3.0, 2.0);
    assert_passes_through(c, pts);
}

// =============================================================
// Purity
// =============================================================

#[test]
fn repeated_calls_are_identical() {
    let (a, b, c) = (p(13.0, 7.0), p(42.0, 19.0), p(25.0, 60.0));
    assert_eq!(circle_from_three_points(a, b, c), circle_from_three_points(a, b, c));
    let (d, e, f) = (p(1.0, 1.0), p(2.0, 2.0), p(3.0, 3.0));
    assert_eq!(circle_from_three_points(d, e, f), circle_from_three_points(d, e, f));
}
