use serde::Serialize;

/// Length of a branch per remaining level of depth.
pub const BRANCH_SCALE: f64 = 5.0;
/// Angle between a branch and each of its children, in degrees.
pub const BRANCH_SPREAD: f64 = 20.0;

pub const TREE_ORIGIN: Point = Point { x: 0.0, y: 10.0 };
pub const TREE_ANGLE: f64 = 90.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// The point `distance` away along `angle_deg` (0 = +x, counter-clockwise).
    pub fn towards(&self, angle_deg: f64, distance: f64) -> Point {
        let (s, c) = angle_deg.to_radians().sin_cos();
        Point::new(self.x + c * distance, self.y + s * distance)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub thickness: f64,
    /// Remaining depth when the segment was emitted; the trunk has the largest.
    pub depth: u32,
}

impl Segment {
    pub fn length(&self) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned plot frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Bounds { min_x, max_x, min_y, max_y }
    }

    /// Smallest frame holding every point, grown by `margin` on each side.
    /// `None` when there are no points.
    pub fn enclosing<I: IntoIterator<Item = Point>>(points: I, margin: f64) -> Option<Bounds> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut b = Bounds::new(first.x, first.x, first.y, first.y);
        for p in iter {
            b.min_x = b.min_x.min(p.x);
            b.max_x = b.max_x.max(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_y = b.max_y.max(p.y);
        }
        Some(Bounds::new(b.min_x - margin, b.max_x + margin, b.min_y - margin, b.max_y + margin))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

/// The fixed frame a tree grown from `TREE_ORIGIN` is shown in.
pub fn tree_frame() -> Bounds {
    Bounds::new(-50.0, 50.0, 0.0, 100.0)
}

/// Recursive binary tree: each branch splits into two shorter branches 20 degrees either side.
///
/// Produces 2^depth - 1 segments in pre-order (trunk, left subtree, right subtree).
pub fn draw_tree(origin: Point, angle_deg: f64, depth: u32) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(segment_count(depth));
    grow_branch(&mut segments, origin, angle_deg, depth);
    segments
}

fn grow_branch(out: &mut Vec<Segment>, from: Point, angle_deg: f64, depth: u32) {
    if depth == 0 {
        return;
    }
    let to = from.towards(angle_deg, depth as f64 * BRANCH_SCALE);
    out.push(Segment {
        start: from,
        end: to,
        thickness: depth as f64 / 2.0,
        depth,
    });
    grow_branch(out, to, angle_deg - BRANCH_SPREAD, depth - 1);
    grow_branch(out, to, angle_deg + BRANCH_SPREAD, depth - 1);
}

fn segment_count(depth: u32) -> usize {
    1usize.checked_shl(depth).map_or(0, |n| n - 1)
}
