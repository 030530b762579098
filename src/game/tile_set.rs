use crate::game::tile::{Tile, MAX_PIP};
use crate::rng::GameRng;

/// Number of tiles in a double-six set
pub const SET_SIZE: usize = 28;

/// The draw pile. Tiles are drawn from the end.
#[derive(Debug, Clone, Default)]
pub struct TileSet {
    tiles: Vec<Tile>,
}

impl TileSet {
    /// An empty pile
    pub fn new() -> Self {
        TileSet { tiles: Vec::new() }
    }

    /// The full double-six set in canonical order: (0,0), (0,1), ..., (6,6)
    pub fn generate() -> Self {
        let mut tiles = Vec::with_capacity(SET_SIZE);
        for i in 0..=MAX_PIP {
            for j in i..=MAX_PIP {
                tiles.push(Tile::new(i, j));
            }
        }
        TileSet { tiles }
    }

    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        TileSet { tiles }
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.tiles);
    }

    /// Take the last tile, or None once the pile is exhausted
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
