use crate::game::board::Board;
use crate::game::events::{Outcome, Seat, TurnSummary};
use crate::game::player::Player;
use crate::game::tile::Tile;
use crate::game::tile_set::TileSet;

/// Complete match state
#[derive(Debug, Clone)]
pub struct GameState {
    pub pile: TileSet,
    pub players: [Player; 2],
    pub board: Board,

    /// Seat whose turn it is
    pub current: Seat,
    pub turn: u32,
    pub consecutive_passes: u32,
    pub outcome: Option<Outcome>,
}

impl GameState {
    pub fn new(pile: TileSet, names: [String; 2]) -> Self {
        let [first, second] = names;
        GameState {
            pile,
            players: [Player::new(first), Player::new(second)],
            board: Board::new(),
            current: 0,
            turn: 0,
            consecutive_passes: 0,
            outcome: None,
        }
    }

    /// Deal `hand_size` tiles to each player, alternating seats
    pub fn deal(&mut self, hand_size: usize) {
        for _ in 0..hand_size {
            for player in self.players.iter_mut() {
                if let Some(tile) = self.pile.draw() {
                    player.hand.add(tile);
                }
            }
        }
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn other_seat(seat: Seat) -> Seat {
        1 - seat
    }

    pub fn switch_player(&mut self) {
        self.current = Self::other_seat(self.current);
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// No tile left anywhere a player could act on
    pub fn tiles_exhausted(&self) -> bool {
        self.pile.is_empty() && self.players.iter().all(|p| p.hand.is_empty())
    }

    pub fn summary(&self) -> TurnSummary {
        TurnSummary {
            board: self.board.len(),
            hands: [self.players[0].hand.len(), self.players[1].hand.len()],
            pile: self.pile.len(),
        }
    }

    /// Every tile in the match, sorted, regardless of where it sits
    pub fn census(&self) -> Vec<Tile> {
        let mut all: Vec<Tile> = self
            .pile
            .tiles()
            .iter()
            .chain(self.players[0].hand.tiles())
            .chain(self.players[1].hand.tiles())
            .chain(self.board.tiles())
            .copied()
            .collect();
        all.sort();
        all
    }
}
