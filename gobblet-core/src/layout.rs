//! Starting reserve layouts.
//!
//! A layout lists, for each player, the sizes in each of the three reserve
//! stacks from bottom to top:
//!
//! ```json
//! {
//!   "player_one": [[0, 1, 2, 3], [0, 1, 2, 3], [0, 1, 2, 3]],
//!   "player_two": [[0, 1, 2, 3], [0, 1, 2, 3], [0, 1, 2, 3]]
//! }
//! ```
//!
//! Sizes are kept as raw numbers here so that a bad value is reported as an
//! invalid piece rather than as a JSON error.

use serde::{Deserialize, Serialize};

use crate::{GameError, Inventory, Piece, Player};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingLayout {
    pub player_one: [Vec<u8>; 3],
    pub player_two: [Vec<u8>; 3],
}

impl StartingLayout {
    /// Official setup: three stacks of sizes 0-3 per player, largest on top.
    pub fn standard() -> StartingLayout {
        let nested = || vec![0, 1, 2, 3];
        StartingLayout {
            player_one: [nested(), nested(), nested()],
            player_two: [nested(), nested(), nested()],
        }
    }

    pub fn from_json(json: &str) -> Result<StartingLayout, GameError> {
        serde_json::from_str(json).map_err(|e| GameError::InvalidLayout(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        serde_json::to_string_pretty(self).map_err(|e| GameError::InvalidLayout(e.to_string()))
    }

    /// Validate the layout and build both players' reserves.
    pub fn to_inventories(&self) -> Result<[Inventory; 2], GameError> {
        Ok([
            Self::inventory(Player::One, &self.player_one)?,
            Self::inventory(Player::Two, &self.player_two)?,
        ])
    }

    fn inventory(owner: Player, stacks: &[Vec<u8>; 3]) -> Result<Inventory, GameError> {
        let mut pieces: [Vec<Piece>; 3] = Default::default();
        for (stack, sizes) in pieces.iter_mut().zip(stacks) {
            for &size in sizes {
                stack.push(Piece::new(size, owner.number())?);
            }
        }
        Inventory::new(owner, pieces)
    }
}

impl Default for StartingLayout {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ReserveIndex, Size};

    #[test]
    fn test_standard_layout_matches_standard_inventory() {
        let [one, two] = StartingLayout::standard().to_inventories().unwrap();
        assert_eq!(one, Inventory::standard(Player::One));
        assert_eq!(two, Inventory::standard(Player::Two));
    }

    #[test]
    fn test_from_json() {
        let layout = StartingLayout::from_json(
            r#"{ "player_one": [[3], [], [1, 2]], "player_two": [[0, 3], [2], []] }"#,
        )
        .unwrap();
        let [one, two] = layout.to_inventories().unwrap();

        let idx = |i| ReserveIndex::new(i).unwrap();
        assert_eq!(one.top(idx(0)), Some(Piece::of(Size::Large, Player::One)));
        assert_eq!(one.top(idx(1)), None);
        assert_eq!(one.top(idx(2)), Some(Piece::of(Size::Medium, Player::One)));
        assert_eq!(two.remaining(), 3);
    }

    #[test]
    fn test_json_roundtrip() {
        let layout = StartingLayout::standard();
        assert_eq!(StartingLayout::from_json(&layout.to_json().unwrap()), Ok(layout));
    }

    #[test]
    fn test_malformed_json() {
        let err = StartingLayout::from_json(r#"{ "player_one": [[0]] }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidLayout(_)));
    }

    #[test]
    fn test_size_out_of_range() {
        let layout = StartingLayout::from_json(
            r#"{ "player_one": [[4], [], []], "player_two": [[0], [], []] }"#,
        )
        .unwrap();
        assert_eq!(layout.to_inventories(), Err(GameError::InvalidPiece { size: 4, owner: 1 }));
    }

    #[test]
    fn test_unordered_stack() {
        let layout = StartingLayout::from_json(
            r#"{ "player_one": [[3, 0], [], []], "player_two": [[0], [], []] }"#,
        )
        .unwrap();
        assert!(matches!(layout.to_inventories(), Err(GameError::InvalidLayout(_))));
    }
}
