use crate::game::tile::Tile;
use serde::Serialize;

/// Which open end of the line a tile is placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum End {
    Head,
    Tail,
}

/// The line of play
///
/// Head and tail values are read positionally: the head is the `low` side of
/// the first tile and the tail is the `high` side of the last tile, whatever
/// side actually faces outward after placement.
#[derive(Debug, Clone, Default)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    pub fn new() -> Self {
        Board { tiles: Vec::new() }
    }

    pub fn head_value(&self) -> Option<u8> {
        self.tiles.first().map(|t| t.low())
    }

    pub fn tail_value(&self) -> Option<u8> {
        self.tiles.last().map(|t| t.high())
    }

    /// Anything is playable on an empty board
    pub fn is_playable(&self, tile: &Tile) -> bool {
        match (self.head_value(), self.tail_value()) {
            (Some(head), Some(tail)) => tile.matches(head) || tile.matches(tail),
            _ => true,
        }
    }

    /// Head wins when the tile matches both ends
    pub fn choose_end(&self, tile: &Tile) -> End {
        match self.head_value() {
            Some(head) if tile.matches(head) => End::Head,
            _ => End::Tail,
        }
    }

    /// Place a tile; `end` is ignored while the board is empty
    pub fn place(&mut self, tile: Tile, end: End) {
        if self.tiles.is_empty() {
            self.tiles.push(tile);
            return;
        }
        match end {
            End::Head => self.tiles.insert(0, tile),
            End::Tail => self.tiles.push(tile),
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
