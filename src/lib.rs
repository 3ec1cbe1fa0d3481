// UCT tree search over a packed piece-square evaluator
pub mod board;
pub mod clock;
pub mod config;
pub mod error;
pub mod eval;
pub mod mcts;
pub mod perft;
pub mod selfplay;
pub mod uci;

pub use config::{EvalParams, SearchParams};
pub use error::EngineError;
