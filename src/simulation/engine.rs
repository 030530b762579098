use crate::game::events::{GameEvent, GameObserver, Outcome};
use crate::game::state::GameState;
use crate::game::tile::Tile;
use crate::game::tile_set::TileSet;
use crate::game::turns::take_turn;
use crate::rng::GameRng;
use crate::simulation::config::{ConfigError, MatchConfig};
use serde::Serialize;

/// Result of a single match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub seed: u64,
    pub outcome: Outcome,
    /// Turns taken, including the final one
    pub turns: u32,
    pub winner: Option<String>,
    pub runner_up: Option<String>,
    /// Tiles the second-placed player was left holding
    pub runner_up_tiles: Vec<Tile>,
    pub board: Vec<Tile>,
    pub pile_remaining: usize,
}

/// Every event of a match alongside its result, for JSON dumps
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub events: Vec<GameEvent>,
    pub result: GameResult,
}

/// A match in progress
pub struct Match {
    state: GameState,
    seed: u64,
}

impl Match {
    /// Shuffle a fresh set, deal both hands and announce the deal
    pub fn new(
        config: &MatchConfig,
        seed: Option<u64>,
        observer: &mut dyn GameObserver,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = GameRng::new(seed);
        let mut pile = TileSet::generate();
        pile.shuffle(&mut rng);

        let mut state = GameState::new(pile, config.player_names.clone());
        state.deal(config.hand_size);

        observer.on_event(&GameEvent::Dealt {
            players: config.player_names.clone(),
            hands: [
                state.players[0].hand.tiles().to_vec(),
                state.players[1].hand.tiles().to_vec(),
            ],
            pile: state.pile.tiles().to_vec(),
        });

        Ok(Match {
            state,
            seed: rng.seed(),
        })
    }

    /// Resume from an arbitrary state
    pub fn from_state(state: GameState, seed: u64) -> Self {
        Match { state, seed }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Nothing left to do: a result was reached or no tiles remain to act on
    pub fn is_finished(&self) -> bool {
        self.state.is_over() || self.state.tiles_exhausted()
    }

    /// Play a single turn
    pub fn advance(&mut self, observer: &mut dyn GameObserver) -> Option<Outcome> {
        if self.is_finished() {
            return self.state.outcome;
        }
        take_turn(&mut self.state, observer)
    }

    pub fn run_to_completion(mut self, observer: &mut dyn GameObserver) -> GameResult {
        while !self.is_finished() {
            self.advance(observer);
        }

        // Running out of tiles without a winner is scored as a draw
        let outcome = match self.state.outcome {
            Some(outcome) => outcome,
            None => {
                self.state.outcome = Some(Outcome::Draw);
                observer.on_event(&GameEvent::GameOver { outcome: Outcome::Draw });
                Outcome::Draw
            }
        };
        self.into_result(outcome)
    }

    fn into_result(self, outcome: Outcome) -> GameResult {
        let (winner, runner_up, runner_up_tiles) = match outcome {
            Outcome::Win { winner } => {
                let loser = &self.state.players[GameState::other_seat(winner)];
                (
                    Some(self.state.players[winner].name.clone()),
                    Some(loser.name.clone()),
                    loser.hand.tiles().to_vec(),
                )
            }
            Outcome::Draw => (None, None, Vec::new()),
        };

        GameResult {
            seed: self.seed,
            outcome,
            turns: self.state.turn,
            winner,
            runner_up,
            runner_up_tiles,
            board: self.state.board.tiles().to_vec(),
            pile_remaining: self.state.pile.len(),
        }
    }
}

/// Run a complete match
pub fn run_game(
    config: &MatchConfig,
    seed: u64,
    observer: &mut dyn GameObserver,
) -> Result<GameResult, ConfigError> {
    Ok(Match::new(config, Some(seed), observer)?.run_to_completion(observer))
}

/// Run a complete match, keeping every event it emitted
pub fn record_game(config: &MatchConfig, seed: u64) -> Result<MatchRecord, ConfigError> {
    let mut events = Vec::new();
    let result = run_game(config, seed, &mut events)?;
    Ok(MatchRecord { events, result })
}
