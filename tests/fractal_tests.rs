//! Tests for the recursive tree fractal and the Fibonacci golden spiral layout.

use approx::assert_relative_eq;

use recursion_explorer::fractal::{BRANCH_SCALE, TREE_ANGLE, TREE_ORIGIN};
use recursion_explorer::{
    Bounds, Point, draw_tree, fibonacci_spiral, generate_golden_spiral, layout_spiral, tree_frame
};

// ============================================================================
// Tree fractal
// ============================================================================

#[test]
fn test_tree_segment_count() {
    assert!(draw_tree(TREE_ORIGIN, TREE_ANGLE, 0).is_empty());
    for depth in 1..=10u32 {
        let segments = draw_tree(TREE_ORIGIN, TREE_ANGLE, depth);
        assert_eq!(segments.len(), (1usize << depth) - 1, "depth = {}", depth);
    }
}

#[test]
fn test_tree_trunk_geometry() {
    let segments = draw_tree(TREE_ORIGIN, TREE_ANGLE, 5);
    let trunk = segments[0];

    assert_eq!(trunk.start, TREE_ORIGIN);
    assert_relative_eq!(trunk.end.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(trunk.end.y, 35.0, epsilon = 1e-9);
    assert_relative_eq!(trunk.thickness, 2.5);
    assert_eq!(trunk.depth, 5);
}

#[test]
fn test_tree_children_branch_twenty_degrees() {
    let segments = draw_tree(Point::new(0.0, 0.0), 90.0, 2);
    let (left, right) = (segments[1], segments[2]);

    assert_eq!(left.start, segments[0].end);
    assert_eq!(right.start, segments[0].end);
    assert_relative_eq!(left.length(), BRANCH_SCALE, epsilon = 1e-9);

    // pre-order: angle - 20 first, then angle + 20
    let left_angle = (left.end.y - left.start.y).atan2(left.end.x - left.start.x).to_degrees();
    let right_angle = (right.end.y - right.start.y).atan2(right.end.x - right.start.x).to_degrees();
    assert_relative_eq!(left_angle, 70.0, epsilon = 1e-9);
    assert_relative_eq!(right_angle, 110.0, epsilon = 1e-9);
}

#[test]
fn test_tree_lengths_and_thickness_shrink_with_depth() {
    for seg in draw_tree(TREE_ORIGIN, TREE_ANGLE, 6) {
        assert_relative_eq!(seg.length(), seg.depth as f64 * BRANCH_SCALE, epsilon = 1e-9);
        assert_relative_eq!(seg.thickness, seg.depth as f64 / 2.0);
    }
}

#[test]
fn test_shallow_tree_fits_default_frame() {
    let frame = tree_frame();
    for seg in draw_tree(TREE_ORIGIN, TREE_ANGLE, 5) {
        assert!(frame.contains(seg.end), "{:?} outside frame", seg.end);
    }
}

// ============================================================================
// Golden spiral
// ============================================================================

#[test]
fn test_spiral_terms() {
    assert_eq!(fibonacci_spiral(5).unwrap(), vec![1, 1, 2, 3, 5]);
    assert_eq!(generate_golden_spiral(7).unwrap().terms, vec![1, 1, 2, 3, 5, 8, 13]);
}

#[test]
fn test_spiral_layout_walks_direction_cycle() {
    let spiral = layout_spiral(&[1, 1, 2, 3, 5]);
    assert_eq!(spiral.squares.len(), 5);
    assert_eq!(spiral.arcs.len(), 5);

    let corners: Vec<Point> = spiral.squares.iter().map(|s| s.corner).collect();
    assert_eq!(corners, vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(-1.0, 1.0),
        Point::new(-1.0, -2.0),
    ]);

    for (i, arc) in spiral.arcs.iter().enumerate() {
        assert_eq!(arc.center, corners[i]);
        assert_relative_eq!(arc.start_deg, i as f64 * 90.0);
        assert_relative_eq!(arc.end_deg, (i + 1) as f64 * 90.0);
        assert_relative_eq!(arc.radius, spiral.terms[i] as f64);
    }
}

#[test]
fn test_spiral_bounds_with_margin() {
    let spiral = layout_spiral(&[1, 1, 2, 3, 5]);
    assert_eq!(spiral.bounds, Bounds::new(-4.0, 10.0, -6.0, 4.0));
}

#[test]
fn test_spiral_bounds_contain_squares_and_arcs() {
    let spiral = generate_golden_spiral(12).unwrap();
    for square in &spiral.squares {
        for corner in square.corners() {
            assert!(spiral.bounds.contains(corner));
        }
        assert_relative_eq!(square.width.abs(), square.term as f64);
        assert_relative_eq!(square.height.abs(), square.term as f64);
    }
    for arc in &spiral.arcs {
        for p in arc.points(100) {
            assert!(spiral.bounds.contains(p), "{:?} outside {:?}", p, spiral.bounds);
        }
    }
}

#[test]
fn test_arc_sampling_endpoints() {
    let spiral = layout_spiral(&[2]);
    let points = spiral.arcs[0].points(100);
    assert_eq!(points.len(), 100);
    assert_relative_eq!(points[0].x, 2.0, epsilon = 1e-9);
    assert_relative_eq!(points[0].y, 0.0, epsilon = 1e-9);
    assert_relative_eq!(points[99].x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(points[99].y, 2.0, epsilon = 1e-9);
}

#[test]
fn test_empty_spiral_has_frame_around_origin() {
    let spiral = layout_spiral(&[]);
    assert!(spiral.squares.is_empty());
    assert_eq!(spiral.bounds, Bounds::new(-1.0, 1.0, -1.0, 1.0));
}
