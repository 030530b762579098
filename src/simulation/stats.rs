use crate::game::events::{NoopObserver, Outcome};
use crate::rng::GameRng;
use crate::simulation::config::{ConfigError, MatchConfig};
use crate::simulation::engine::{run_game, GameResult};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate results over many matches
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchStats {
    pub games: usize,
    pub player_names: [String; 2],
    pub wins: [usize; 2],
    pub draws: usize,
    pub average_turns: f64,
    /// Turn count -> number of matches that ended on it
    pub turn_distribution: BTreeMap<u32, usize>,
    /// Mean tiles left in the runner-up's hand over decided matches
    pub average_runner_up_tiles: f64,
}

impl BatchStats {
    pub fn from_results(results: &[GameResult], player_names: [String; 2]) -> Self {
        let mut wins = [0usize; 2];
        let mut draws = 0;
        let mut turn_distribution = BTreeMap::new();
        let mut runner_up_tiles = 0usize;

        for result in results {
            match result.outcome {
                Outcome::Win { winner } => {
                    wins[winner] += 1;
                    runner_up_tiles += result.runner_up_tiles.len();
                }
                Outcome::Draw => draws += 1,
            }
            *turn_distribution.entry(result.turns).or_insert(0) += 1;
        }

        let games = results.len();
        let decided = wins[0] + wins[1];
        let average_turns = if games > 0 {
            results.iter().map(|r| r.turns as f64).sum::<f64>() / games as f64
        } else {
            0.0
        };
        let average_runner_up_tiles = if decided > 0 {
            runner_up_tiles as f64 / decided as f64
        } else {
            0.0
        };

        BatchStats {
            games,
            player_names,
            wins,
            draws,
            average_turns,
            turn_distribution,
            average_runner_up_tiles,
        }
    }

    pub fn win_rate(&self, seat: usize) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins[seat] as f64 / self.games as f64
        }
    }
}

/// Batch statistics stamped for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub generated_at: String,
    pub base_seed: u64,
    pub stats: BatchStats,
}

impl BatchReport {
    pub fn new(stats: BatchStats, base_seed: u64) -> Self {
        BatchReport {
            generated_at: chrono::Utc::now().to_rfc3339(),
            base_seed,
            stats,
        }
    }
}

/// Play `num_games` independent matches in parallel. Match `i` uses seed
/// `base_seed + i`, so a batch is reproducible from its base seed.
pub fn simulate_batch(
    config: &MatchConfig,
    num_games: usize,
    base_seed: Option<u64>,
    show_progress: bool,
) -> Result<(u64, Vec<GameResult>), ConfigError> {
    config.validate()?;
    let base_seed = GameRng::new(base_seed).seed();

    let progress = if show_progress {
        let bar = ProgressBar::new(num_games as u64);
        if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} games ({eta})") {
            bar.set_style(style);
        }
        bar
    } else {
        ProgressBar::hidden()
    };

    let results = (0..num_games)
        .into_par_iter()
        .map(|i| {
            let result = run_game(config, base_seed.wrapping_add(i as u64), &mut NoopObserver);
            progress.inc(1);
            result
        })
        .collect::<Result<Vec<GameResult>, ConfigError>>();

    progress.finish_and_clear();
    Ok((base_seed, results?))
}
