//! A player's off-board reserve stacks.

use serde::{Deserialize, Serialize};

use crate::{GameError, Piece, Player, ReserveIndex, Size};

/// Three LIFO stacks of one player's pieces, bottom first.
///
/// Only the top of each stack is playable. Stacks are nested, so sizes
/// strictly increase from bottom to top. Pieces leave the reserve for the
/// board and never come back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InventoryRecord")]
pub struct Inventory {
    owner: Player,
    stacks: [Vec<Piece>; 3],
}

/// Unchecked shape used when deserializing an [`Inventory`].
#[derive(Deserialize)]
struct InventoryRecord {
    owner: Player,
    stacks: [Vec<Piece>; 3],
}

impl TryFrom<InventoryRecord> for Inventory {
    type Error = GameError;

    fn try_from(record: InventoryRecord) -> Result<Self, Self::Error> {
        // A restored reserve may have been played out completely.
        Inventory::checked(record.owner, record.stacks)
    }
}

impl Inventory {
    /// Build an inventory from explicit stacks.
    ///
    /// Fails with `NotOwner` if a piece belongs to the other player, and with
    /// `InvalidLayout` if a stack is not strictly increasing or every stack
    /// is empty.
    pub fn new(owner: Player, stacks: [Vec<Piece>; 3]) -> Result<Inventory, GameError> {
        let inventory = Inventory::checked(owner, stacks)?;
        if inventory.is_exhausted() {
            return Err(GameError::InvalidLayout(format!("player {owner} has no reserve pieces")));
        }
        Ok(inventory)
    }

    /// Ownership and stack order only.
    fn checked(owner: Player, stacks: [Vec<Piece>; 3]) -> Result<Inventory, GameError> {
        for (idx, stack) in stacks.iter().enumerate() {
            if let Some(stray) = stack.iter().find(|p| p.owner() != owner) {
                return Err(GameError::NotOwner { player: owner, owner: stray.owner() });
            }
            if stack.windows(2).any(|pair| !pair[1].larger_than(pair[0])) {
                return Err(GameError::InvalidLayout(format!(
                    "reserve stack {idx} of player {owner} must grow strictly from bottom to top"
                )));
            }
        }
        Ok(Inventory { owner, stacks })
    }

    /// Build an inventory from bottom-to-top sizes per stack.
    pub fn from_sizes(owner: Player, sizes: [&[Size]; 3]) -> Result<Inventory, GameError> {
        let stacks = sizes.map(|stack| stack.iter().map(|&s| Piece::of(s, owner)).collect());
        Inventory::new(owner, stacks)
    }

    /// Standard setup: three nested stacks of all four sizes, largest on top.
    pub fn standard(owner: Player) -> Inventory {
        let nested = || Size::all().map(|s| Piece::of(s, owner)).collect::<Vec<_>>();
        Inventory { owner, stacks: [nested(), nested(), nested()] }
    }

    #[inline]
    pub fn owner(&self) -> Player {
        self.owner
    }

    /// The playable piece of a stack, if any.
    #[inline]
    pub fn top(&self, idx: ReserveIndex) -> Option<Piece> {
        self.stacks[idx.get() as usize].last().copied()
    }

    /// Remove and return the playable piece of a stack.
    pub fn take(&mut self, idx: ReserveIndex) -> Result<Piece, GameError> {
        self.stacks[idx.get() as usize].pop().ok_or(GameError::EmptyStack(idx))
    }

    /// The whole stack, bottom first.
    pub fn stack(&self, idx: ReserveIndex) -> &[Piece] {
        &self.stacks[idx.get() as usize]
    }

    /// The playable piece of every stack.
    pub fn tops(&self) -> [Option<Piece>; 3] {
        [0, 1, 2].map(|i| self.stacks[i].last().copied())
    }

    /// Pieces still off the board.
    pub fn remaining(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum()
    }

    pub fn is_exhausted(&self) -> bool {
        self.stacks.iter().all(Vec::is_empty)
    }

    /// Pieces still off the board, by size: `[tiny, small, medium, large]`.
    pub fn size_counts(&self) -> [u8; 4] {
        let mut counts = [0u8; 4];
        for piece in self.stacks.iter().flatten() {
            counts[piece.size().index() as usize] += 1;
        }
        counts
    }
}
