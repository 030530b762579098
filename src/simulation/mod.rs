pub mod config;
pub mod engine;
pub mod stats;

pub use config::{ConfigError, MatchConfig};
pub use engine::{record_game, run_game, GameResult, Match, MatchRecord};
pub use stats::{simulate_batch, BatchReport, BatchStats};
