use crate::game::board::Board;
use crate::game::tile::Tile;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HandError {
    #[error("Tile {0} is not in hand")]
    TileNotInHand(Tile),
}

/// Tiles held by one player, in the order they were received
#[derive(Debug, Clone, Default)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    pub fn new() -> Self {
        Hand { tiles: Vec::new() }
    }

    pub fn add(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Index of the leftmost tile the board accepts
    pub fn find_playable(&self, board: &Board) -> Option<usize> {
        self.tiles.iter().position(|t| board.is_playable(t))
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Tile> {
        if index < self.tiles.len() {
            Some(self.tiles.remove(index))
        } else {
            None
        }
    }

    pub fn remove(&mut self, tile: &Tile) -> Result<Tile, HandError> {
        let index = self
            .tiles
            .iter()
            .position(|t| t == tile)
            .ok_or(HandError::TileNotInHand(*tile))?;
        Ok(self.tiles.remove(index))
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

impl FromIterator<Tile> for Hand {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Hand {
            tiles: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::End;

    fn board_with(tile: Tile) -> Board {
        let mut board = Board::new();
        board.place(tile, End::Tail);
        board
    }

    #[test]
    fn test_find_playable_returns_leftmost() {
        let hand: Hand = [Tile::new(1, 2), Tile::new(2, 3)].into_iter().collect();
        let board = board_with(Tile::new(2, 2));

        assert_eq!(board.head_value(), Some(2));
        assert_eq!(board.tail_value(), Some(2));
        assert_eq!(hand.find_playable(&board), Some(0));
    }

    #[test]
    fn test_find_playable_skips_unplayable() {
        let hand: Hand = [Tile::new(0, 1), Tile::new(4, 6), Tile::new(3, 6)].into_iter().collect();
        let board = board_with(Tile::new(5, 6));
        assert_eq!(hand.find_playable(&board), Some(1));
    }

    #[test]
    fn test_find_playable_none() {
        let hand: Hand = [Tile::new(0, 1), Tile::new(1, 1)].into_iter().collect();
        let board = board_with(Tile::new(5, 6));
        assert_eq!(hand.find_playable(&board), None);
        assert_eq!(Hand::new().find_playable(&Board::new()), None);
    }

    #[test]
    fn test_find_playable_on_empty_board() {
        let hand: Hand = [Tile::new(4, 5), Tile::new(0, 0)].into_iter().collect();
        assert_eq!(hand.find_playable(&Board::new()), Some(0));
    }

    #[test]
    fn test_remove_then_not_found() {
        let mut hand: Hand = [Tile::new(1, 2), Tile::new(2, 3)].into_iter().collect();
        let board = board_with(Tile::new(2, 2));

        assert_eq!(hand.remove(&Tile::new(1, 2)), Ok(Tile::new(1, 2)));
        assert_eq!(hand.tiles(), &[Tile::new(2, 3)]);
        // The next match is the remaining tile, never the removed one
        assert_eq!(hand.find_playable(&board), Some(0));
        assert_eq!(hand.tiles()[0], Tile::new(2, 3));
    }

    #[test]
    fn test_remove_missing_tile() {
        let mut hand: Hand = [Tile::new(1, 2)].into_iter().collect();
        assert_eq!(
            hand.remove(&Tile::new(5, 5)),
            Err(HandError::TileNotInHand(Tile::new(5, 5)))
        );
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut hand = Hand::new();
        hand.add(Tile::new(0, 3));
        assert_eq!(hand.remove_at(5), None);
        assert_eq!(hand.remove_at(0), Some(Tile::new(0, 3)));
        assert!(hand.is_empty());
    }
}
