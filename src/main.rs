use clap::{Parser, Subcommand};
use dominoes_sim::game::NoopObserver;
use dominoes_sim::render::{
    completion_line, outcome_line, print_batch_stats, print_result, ConsoleRenderer,
};
use dominoes_sim::rng::GameRng;
use dominoes_sim::simulation::{
    record_game, run_game, simulate_batch, BatchReport, BatchStats, ConfigError, MatchConfig,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "dominoes-sim")]
#[command(about = "Two-player dominoes match simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for random number generator (for reproducibility)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON match config (player names, hand size)
    #[arg(short, long)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single match turn by turn (default)
    Run {
        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON match config
        #[arg(short, long)]
        config: Option<String>,

        /// Print every event and the result as JSON
        #[arg(long, conflicts_with = "quiet")]
        json: bool,

        /// Skip the play-by-play and print only the final result
        #[arg(short, long)]
        quiet: bool,
    },

    /// Simulate many matches and report statistics
    Batch {
        /// Number of matches to simulate
        #[arg(short, long, default_value = "1000")]
        num_games: usize,

        /// Base seed; match i uses base + i
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON match config
        #[arg(short, long)]
        config: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// How a single match is shown
#[derive(Clone, Copy)]
enum Output {
    PlayByPlay,
    Quiet,
    Json,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            seed,
            config,
            json,
            quiet,
        }) => {
            let config = load_config(config.as_deref());
            let output = if json {
                Output::Json
            } else if quiet {
                Output::Quiet
            } else {
                Output::PlayByPlay
            };
            run_single(&config, seed, output);
        }
        Some(Commands::Batch {
            num_games,
            seed,
            config,
            json,
        }) => {
            let config = load_config(config.as_deref());
            run_batch(&config, num_games, seed, json);
        }
        None => {
            let config = load_config(cli.config.as_deref());
            run_single(&config, cli.seed, Output::PlayByPlay);
        }
    }
}

fn load_config(path: Option<&str>) -> MatchConfig {
    let Some(path) = path else {
        return MatchConfig::default();
    };
    match MatchConfig::from_file(path) {
        Ok(config) => {
            eprintln!("✓ Loaded match config from {}", path);
            config
        }
        Err(e) => {
            eprintln!("✗ Failed to load config '{}': {}", path, e);
            std::process::exit(1);
        }
    }
}

fn or_exit<T>(result: Result<T, ConfigError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("✗ Invalid match config: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("✗ Failed to serialize output: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_single(config: &MatchConfig, seed: Option<u64>, output: Output) {
    let seed = GameRng::new(seed).seed();

    match output {
        Output::Json => {
            let record = or_exit(record_game(config, seed));
            print_json(&record);
        }
        Output::Quiet => {
            let result = or_exit(run_game(config, seed, &mut NoopObserver));
            println!("Seed: {}", seed);
            println!("{}", outcome_line(&result));
            print_result(&result);
        }
        Output::PlayByPlay => {
            println!("=== Dominoes (seed: {}) ===\n", seed);
            let mut renderer = ConsoleRenderer::new(config.player_names.clone());
            let result = or_exit(run_game(config, seed, &mut renderer));
            print_result(&result);
        }
    }
}

fn run_batch(config: &MatchConfig, num_games: usize, seed: Option<u64>, json: bool) {
    if !json {
        println!("\n=== Dominoes Batch Simulation ===\n");
        println!("Games: {}", num_games);
        println!("Hand size: {}", config.hand_size);
    }

    let start = std::time::Instant::now();
    let (base_seed, results) = or_exit(simulate_batch(config, num_games, seed, !json));
    let elapsed = start.elapsed();

    let stats = BatchStats::from_results(&results, config.player_names.clone());

    if json {
        print_json(&BatchReport::new(stats, base_seed));
        return;
    }

    println!("Base seed: {}\n", base_seed);
    print_batch_stats(&stats);
    println!();
    println!("{}", completion_line(num_games, elapsed));
}
