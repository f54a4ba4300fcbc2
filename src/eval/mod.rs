//! Evaluation module for Gobang positions
//!
//! Pattern recognition and scoring for board positions: runs of stones
//! are classified by length and open ends, then summed per side.

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::PatternScore;
