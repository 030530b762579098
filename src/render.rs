//! Console presentation of matches and batch results

use crate::game::events::{GameEvent, GameObserver, Outcome, TurnSummary};
use crate::game::tile::Tile;
use crate::simulation::engine::GameResult;
use crate::simulation::stats::BatchStats;
use std::time::Duration;

/// ASCII art for a single tile
pub fn tile_lines(tile: &Tile) -> [String; 4] {
    [
        "+-------+".to_string(),
        format!("| {}   {} |", tile.low(), tile.high()),
        "|       |".to_string(),
        "+-------+".to_string(),
    ]
}

/// The board as printed at the start of each turn
pub fn board_lines(board: &[Tile]) -> Vec<String> {
    if board.is_empty() {
        return vec!["Dominoes on the table: None".to_string()];
    }
    let mut lines = vec!["Dominoes on the table:".to_string()];
    for tile in board {
        lines.extend(tile_lines(tile));
    }
    lines
}

fn print_lines(lines: impl IntoIterator<Item = String>) {
    for line in lines {
        println!("{}", line);
    }
}

/// Prints every event to stdout in a play-by-play format
pub struct ConsoleRenderer {
    names: [String; 2],
}

impl ConsoleRenderer {
    pub fn new(names: [String; 2]) -> Self {
        ConsoleRenderer { names }
    }

    fn print_summary(&self, summary: &TurnSummary) {
        println!("Total pieces on board: {}", summary.board);
        for (name, count) in self.names.iter().zip(summary.hands) {
            println!("Pieces remaining for {}: {}", name, count);
        }
        println!("Pieces remaining in the pile: {}", summary.pile);
    }
}

impl GameObserver for ConsoleRenderer {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Dealt { players, hands, pile } => {
                self.names = players.clone();
                for (name, hand) in players.iter().zip(hands) {
                    println!("{} gets these dominoes:", name);
                    for tile in hand {
                        println!("{}", tile);
                    }
                }
                println!("\nRemaining dominoes for both players to choose from:");
                for tile in pile {
                    println!("{}", tile);
                }
            }
            GameEvent::TurnStarted { player, board, .. } => {
                println!("\n{}'s turn:", self.names[*player]);
                print_lines(board_lines(board));
            }
            GameEvent::Placed { player, tile, .. } => {
                println!("{} places this domino on the table:", self.names[*player]);
                print_lines(tile_lines(tile));
            }
            GameEvent::Drew { player, tile } => {
                println!("{} draws this domino from the pile:", self.names[*player]);
                print_lines(tile_lines(tile));
            }
            GameEvent::Passed { player, .. } => {
                println!("No available pieces left for {}.", self.names[*player]);
            }
            GameEvent::TurnEnded(summary) => self.print_summary(summary),
            GameEvent::GameOver { outcome } => match outcome {
                Outcome::Win { winner } => println!("{} wins!", self.names[*winner]),
                Outcome::Draw => println!("\nThe game ended in a draw."),
            },
        }
    }
}

/// One-line outcome used when the play-by-play is suppressed
pub fn outcome_line(result: &GameResult) -> String {
    match &result.winner {
        Some(winner) => format!("{} wins after {} turns.", winner, result.turns),
        None => format!("The game ended in a draw after {} turns.", result.turns),
    }
}

/// Final standings after a decided match
pub fn print_result(result: &GameResult) {
    let (Some(winner), Some(runner_up)) = (&result.winner, &result.runner_up) else {
        return;
    };
    println!("\nFinal Result:");
    println!("Winner: {}", winner);
    println!("Second Placed: {}", runner_up);
    println!("Remaining Pieces for {}:", runner_up);
    for tile in &result.runner_up_tiles {
        println!("{}", tile);
    }
    println!();
    print_lines(board_lines(&result.board));
}

/// Timing footer for a batch; the rate is left out when it is meaningless
pub fn completion_line(games: usize, elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if games == 0 || secs <= 0.0 {
        return format!("Simulation completed in {:.2?}", elapsed);
    }
    format!(
        "Simulation completed in {:.2?} ({:.0} games/sec)",
        elapsed,
        games as f64 / secs
    )
}

pub fn print_batch_stats(stats: &BatchStats) {
    println!("=== Results ===\n");
    for (seat, name) in stats.player_names.iter().enumerate() {
        println!(
            "{} win rate: {:.1}% ({}/{})",
            name,
            stats.win_rate(seat) * 100.0,
            stats.wins[seat],
            stats.games
        );
    }
    let draw_pct = if stats.games > 0 {
        stats.draws as f64 / stats.games as f64 * 100.0
    } else {
        0.0
    };
    println!("Draws: {:.1}% ({})", draw_pct, stats.draws);
    println!("Average turns: {:.2}", stats.average_turns);
    println!("Average tiles left with runner-up: {:.2}", stats.average_runner_up_tiles);
    println!();

    if stats.games == 0 {
        return;
    }
    println!("Turn distribution:");
    for (turns, count) in &stats.turn_distribution {
        let pct = *count as f64 / stats.games as f64 * 100.0;
        let bar = "█".repeat((pct / 2.0) as usize);
        println!("  {:3} turns: {:5.1}% {} ({})", turns, pct, bar, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(winner: Option<&str>, turns: u32) -> GameResult {
        GameResult {
            seed: 0,
            outcome: match winner {
                Some(_) => Outcome::Win { winner: 0 },
                None => Outcome::Draw,
            },
            turns,
            winner: winner.map(str::to_string),
            runner_up: winner.map(|_| "Player 2".to_string()),
            runner_up_tiles: vec![],
            board: vec![],
            pile_remaining: 0,
        }
    }

    #[test]
    fn test_outcome_line() {
        assert_eq!(outcome_line(&result(Some("Player 1"), 23)), "Player 1 wins after 23 turns.");
        assert_eq!(
            outcome_line(&result(None, 40)),
            "The game ended in a draw after 40 turns."
        );
    }

    #[test]
    fn test_completion_line_without_games_has_no_rate() {
        let line = completion_line(0, Duration::from_nanos(1));
        assert!(!line.contains("NaN"));
        assert!(!line.contains("games/sec"));

        let line = completion_line(10, Duration::ZERO);
        assert!(!line.contains("inf"));
        assert!(!line.contains("games/sec"));
    }

    #[test]
    fn test_completion_line_rate() {
        let line = completion_line(100, Duration::from_secs(2));
        assert!(line.ends_with("(50 games/sec)"), "{}", line);
    }

    #[test]
    fn test_tile_lines() {
        let lines = tile_lines(&Tile::new(3, 5));
        assert_eq!(lines[0], "+-------+");
        assert_eq!(lines[1], "| 3   5 |");
        assert_eq!(lines[2], "|       |");
        assert_eq!(lines[3], "+-------+");
    }

    #[test]
    fn test_board_lines() {
        assert_eq!(board_lines(&[]), vec!["Dominoes on the table: None".to_string()]);

        let lines = board_lines(&[Tile::new(1, 2), Tile::new(2, 6)]);
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "Dominoes on the table:");
        assert_eq!(lines[6], "| 2   6 |");
    }
}
