//! poker-hand-eval: best five-card poker hand from a pool of card tokens
//!
//! Goals:
//! - Deterministic evaluation of 5 to N card pools (N defaults to 7)
//! - Typed, inspectable failures for every kind of bad input
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start
//! ```
//! use poker_hand_eval::engine::evaluate;
//! use poker_hand_eval::evaluator::HandCategory;
//! use poker_hand_eval::pool::EvalError;
//!
//! let best = evaluate(&["QS", "QH", "QD", "QC", "2H"]).unwrap();
//! assert_eq!(best.category(), HandCategory::FourOfAKind);
//! assert_eq!(best.signature().strengths(), vec![12, 2]);
//!
//! let err = evaluate(&["AH", "AH", "2C", "3C", "4C"]).unwrap_err();
//! assert!(matches!(err, EvalError::DuplicateCard(_)));
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run -- 10H JH QH KH AH
//! cargo run -- --deal 7 --seed 42 --json
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod pool;

pub use engine::{evaluate, BestHand, Evaluator};
pub use pool::{CardPool, EvalError, PoolConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
