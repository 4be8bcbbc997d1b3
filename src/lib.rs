// Iterative-deepening alpha-beta agent with a tapered hand-crafted evaluation.
pub mod board;
pub mod clock;
pub mod eval;
pub mod search;
pub mod uci;
