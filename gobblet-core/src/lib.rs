//! Gobblet rules engine.
//!
//! Two players each own twelve pieces in four sizes, kept off the board in
//! three nested reserve stacks. On their turn a player either enters the top
//! piece of one of their reserve stacks onto the 4x4 board, or lifts one of
//! their exposed pieces and moves it to another cell. A piece may cover any
//! strictly smaller piece, whoever owns it; covered pieces stay in the cell
//! and reappear when the piece above them leaves. Four visible pieces of one
//! player in a row, column or diagonal win.
//!
//! # Board
//!
//! ```text
//!   y
//!   3 | 12 13 14 15
//!   2 |  8  9 10 11
//!   1 |  4  5  6  7
//!   0 |  0  1  2  3
//!     +-------------
//!        0  1  2  3  x
//! ```
//!
//! Cells are addressed by [`Coord`] (column `x`, row `y`). The numbers above
//! are the bit indices used by [`Board::visibility_masks`] for win detection.
//!
//! # Moves
//!
//! A [`Move`] is an [`Origin`] (a reserve stack or a board cell) plus a
//! destination cell. [`GameState::apply_move`] validates the whole move first
//! and only then changes the state, so a rejected move leaves the game exactly
//! as it was.
//!
//! ```
//! use gobblet_core::{Coord, GameState, Origin, Player, Status};
//!
//! let mut game = GameState::standard();
//! let snapshot = game.apply_move(Origin::reserve(0)?, Coord::new(1, 2)?)?;
//! assert_eq!(snapshot.current_player, Player::Two);
//! assert_eq!(snapshot.status, Status::InProgress);
//! # Ok::<(), gobblet_core::GameError>(())
//! ```

mod board;
mod error;
mod game;
mod inventory;
pub mod layout;
mod moves;
mod piece;
mod position;
mod render;
mod rules;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use board::Board;
pub use error::GameError;
pub use game::{GameState, Snapshot, Status};
pub use inventory::Inventory;
pub use layout::StartingLayout;
pub use moves::{Move, Origin};
pub use piece::{Piece, Player, Size};
pub use position::{Coord, ReserveIndex, BOARD_SIZE, RESERVE_STACKS};
