pub mod error;
pub mod config;
pub mod math;
pub mod ordering;
pub mod fractal;
pub mod spiral;
pub mod games;
pub mod input;
pub mod explain;
pub mod command;
pub mod canvas;
pub mod session;
pub mod visualizer;

pub use error::{ExplorerError, Result};
pub use config::ExplorerConfig;
pub use math::{
    factorial, power, is_prime, is_prime_from, fibonacci, fibonacci_tree,
    fibonacci_sequence, factorial_growth
};
pub use ordering::{merge_sort, merge_sorted, permutations};
pub use fractal::{Point, Segment, Bounds, draw_tree, tree_frame};
pub use spiral::{
    GoldenSpiral, SpiralSquare, QuarterArc,
    fibonacci_spiral, generate_golden_spiral, layout_spiral
};
pub use games::{
    GuessOutcome, Proximity, SecretNumber, PuzzleStep,
    guessing_game, recursive_puzzle
};
pub use input::{parse_integers, parse_elements};
pub use explain::{Mode, explanation_page};
pub use command::{Command, Explorer, Plot, Reply};
pub use canvas::Canvas;
pub use session::Session;
pub use visualizer::{Frame, SharedFrame, shared_frame, spawn_viewer, publish};
