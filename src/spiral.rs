use serde::Serialize;

use crate::error::Result;
use crate::fractal::{Bounds, Point};
use crate::math::fibonacci_sequence;

/// Right, up, left, down.
const DIRECTIONS: [(f64, f64); 4] = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];

const FRAME_MARGIN: f64 = 1.0;

/// One square of the tiling. `width`/`height` are signed: the square spans
/// from `corner` to `corner + (width, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SpiralSquare {
    pub corner: Point,
    pub width: f64,
    pub height: f64,
    pub term: u64,
}

impl SpiralSquare {
    pub fn far_corner(&self) -> Point {
        Point::new(self.corner.x + self.width, self.corner.y + self.height)
    }

    /// The four corners in drawing order.
    pub fn corners(&self) -> [Point; 4] {
        let c = self.corner;
        [
            c,
            Point::new(c.x + self.width, c.y),
            self.far_corner(),
            Point::new(c.x, c.y + self.height),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct QuarterArc {
    pub center: Point,
    pub radius: f64,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl QuarterArc {
    /// `samples` evenly spaced points from `start_deg` to `end_deg` inclusive.
    pub fn points(&self, samples: usize) -> Vec<Point> {
        match samples {
            0 => Vec::new(),
            1 => vec![self.center.towards(self.start_deg, self.radius)],
            _ => {
                let step = (self.end_deg - self.start_deg) / (samples - 1) as f64;
                (0..samples)
                    .map(|i| self.center.towards(self.start_deg + step * i as f64, self.radius))
                    .collect()
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GoldenSpiral {
    pub terms: Vec<u64>,
    pub squares: Vec<SpiralSquare>,
    pub arcs: Vec<QuarterArc>,
    pub bounds: Bounds,
}

/// The first `n` Fibonacci terms, starting at term 1, used as square sides.
pub fn fibonacci_spiral(n: u32) -> Result<Vec<u64>> {
    fibonacci_sequence(n)
}

pub fn generate_golden_spiral(n_terms: u32) -> Result<GoldenSpiral> {
    let terms = fibonacci_spiral(n_terms)?;
    Ok(layout_spiral(&terms))
}

/// Walks the direction cycle placing one square and quarter arc per term.
///
/// Each square has a corner at the cursor and spans the current direction and the
/// next one counter-clockwise, which is exactly the quadrant the arc sweeps.
pub fn layout_spiral(terms: &[u64]) -> GoldenSpiral {
    let mut cursor = Point::new(0.0, 0.0);
    let mut visited = vec![cursor];
    let mut squares = Vec::with_capacity(terms.len());
    let mut arcs = Vec::with_capacity(terms.len());

    for (direction, &term) in terms.iter().enumerate() {
        let (dx, dy) = DIRECTIONS[direction % 4];
        let (nx, ny) = DIRECTIONS[(direction + 1) % 4];
        let side = term as f64;

        let square = SpiralSquare {
            corner: cursor,
            width: (dx + nx) * side,
            height: (dy + ny) * side,
            term,
        };
        arcs.push(QuarterArc {
            center: cursor,
            radius: side,
            start_deg: direction as f64 * 90.0,
            end_deg: (direction + 1) as f64 * 90.0,
        });
        visited.push(square.far_corner());
        squares.push(square);

        cursor = Point::new(cursor.x + dx * side, cursor.y + dy * side);
        visited.push(cursor);
        visited.push(Point::new(cursor.x + dx * side, cursor.y + dy * side));
    }

    // visited always holds the origin, so there is a frame even for zero terms
    let bounds = Bounds::enclosing(visited, FRAME_MARGIN)
        .unwrap_or(Bounds::new(-FRAME_MARGIN, FRAME_MARGIN, -FRAME_MARGIN, FRAME_MARGIN));

    GoldenSpiral {
        terms: terms.to_vec(),
        squares,
        arcs,
        bounds,
    }
}
