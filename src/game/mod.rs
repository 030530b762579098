pub mod board;
pub mod events;
pub mod hand;
pub mod player;
pub mod state;
pub mod tile;
pub mod tile_set;
pub mod turns;

pub use board::{Board, End};
pub use events::{GameEvent, GameObserver, NoopObserver, Outcome, Seat, TurnSummary};
pub use hand::{Hand, HandError};
pub use player::Player;
pub use state::GameState;
pub use tile::Tile;
pub use tile_set::TileSet;
