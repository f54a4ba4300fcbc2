//! Search module for the Gobang engine
//!
//! Contains:
//! - Candidate-move generation with neighborhood pruning
//! - Fixed-depth negamax search with alpha-beta pruning

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{SearchResult, Searcher};
pub use movegen::generate_moves;
