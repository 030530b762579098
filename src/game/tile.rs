use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest pip value in the double-six set
pub const MAX_PIP: u8 = 6;

/// A single domino. `low` and `high` name the two sides in the order the
/// tile was created; generated tiles always have `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tile {
    low: u8,
    high: u8,
}

impl Tile {
    pub const fn new(low: u8, high: u8) -> Self {
        Tile { low, high }
    }

    pub fn low(&self) -> u8 {
        self.low
    }

    pub fn high(&self) -> u8 {
        self.high
    }

    /// True if either side shows `value`
    pub fn matches(&self, value: u8) -> bool {
        self.low == value || self.high == value
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_either_side() {
        let tile = Tile::new(2, 5);
        assert!(tile.matches(2));
        assert!(tile.matches(5));
        assert!(!tile.matches(3));
    }

    #[test]
    fn test_double_matches_its_value() {
        assert!(Tile::new(4, 4).matches(4));
        assert!(!Tile::new(4, 4).matches(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Tile::new(0, 6).to_string(), "(0, 6)");
    }

    #[test]
    fn test_equality_is_by_value() {
        assert_eq!(Tile::new(1, 3), Tile::new(1, 3));
        assert_ne!(Tile::new(1, 3), Tile::new(3, 1));
    }
}
