//! Evaluation module for Cragspider positions
//!
//! Board-state heuristics that agents build on. Evaluation is separate from
//! move search: a scorer only looks at what is on the board.

pub mod scorer;

pub use scorer::BoardScorer;
