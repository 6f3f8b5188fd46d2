//! Game state: board, both reserves, turn and outcome.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::layout::StartingLayout;
use crate::{
    rules, Board, Coord, GameError, Inventory, Move, Origin, Piece, Player, ReserveIndex, Size, BOARD_SIZE,
    RESERVE_STACKS,
};

const N: usize = BOARD_SIZE as usize;

/// Whether the game is still being played.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Won(Player),
}

/// Everything needed to continue a game.
///
/// Only changed through [`GameState::apply_move`]. Serializes in full,
/// covered pieces included, and deserializing re-checks every invariant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) inventories: [Inventory; 2],
    pub(crate) current_player: Player,
    pub(crate) status: Status,
    pub(crate) moves_played: u32,
}

#[derive(Deserialize)]
struct GameRecord {
    board: Board,
    inventories: [Inventory; 2],
    current_player: Player,
    status: Status,
    #[serde(default)]
    moves_played: u32,
}

impl TryFrom<GameRecord> for GameState {
    type Error = GameError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        check_owners(&record.inventories)?;
        let expected = match record.board.check_winner()? {
            Some(winner) => Status::Won(winner),
            None => Status::InProgress,
        };
        if record.status != expected {
            return Err(GameError::InvalidLayout(format!(
                "status {:?} does not match the board ({expected:?})",
                record.status
            )));
        }
        if let Status::Won(winner) = record.status {
            if record.current_player != winner {
                return Err(GameError::InvalidLayout(format!(
                    "player {winner} has won but player {} is to move",
                    record.current_player
                )));
            }
        }
        for (player, inventory) in Player::all().zip(&record.inventories) {
            let on_board = record.board.pieces_on_board(player);
            let in_reserve = inventory.size_counts();
            for size in Size::all() {
                let i = size.index() as usize;
                if on_board[i] + in_reserve[i] > RESERVE_STACKS {
                    return Err(GameError::InvalidLayout(format!(
                        "player {player} has more than {RESERVE_STACKS} pieces of size {size}"
                    )));
                }
            }
        }
        Ok(GameState {
            board: record.board,
            inventories: record.inventories,
            current_player: record.current_player,
            status: record.status,
            moves_played: record.moves_played,
        })
    }
}

/// Player one's inventory first, then player two's.
fn check_owners(inventories: &[Inventory; 2]) -> Result<(), GameError> {
    for (player, inventory) in Player::all().zip(inventories) {
        if inventory.owner() != player {
            return Err(GameError::NotOwner { player, owner: inventory.owner() });
        }
    }
    Ok(())
}

/// What a player can see: the top piece of every cell and reserve stack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Top piece per cell, indexed `[y][x]`.
    pub board: [[Option<Piece>; N]; N],
    /// Top piece per reserve stack, player one first.
    pub reserves: [[Option<Piece>; 3]; 2],
    pub current_player: Player,
    pub status: Status,
}

impl Snapshot {
    pub fn at(&self, at: Coord) -> Option<Piece> {
        self.board[at.y() as usize][at.x() as usize]
    }

    pub fn reserve(&self, player: Player, idx: ReserveIndex) -> Option<Piece> {
        self.reserves[player.index()][idx.get() as usize]
    }
}

impl GameState {
    /// Start a game on an empty board. Player one moves first.
    ///
    /// `inventories` are player one's then player two's; fails with
    /// `NotOwner` if they are the wrong way round and with `InvalidLayout`
    /// if a player starts without pieces.
    pub fn new(inventories: [Inventory; 2]) -> Result<GameState, GameError> {
        check_owners(&inventories)?;
        if let Some(empty) = inventories.iter().find(|inv| inv.is_exhausted()) {
            return Err(GameError::InvalidLayout(format!(
                "player {} has no reserve pieces",
                empty.owner()
            )));
        }
        Ok(GameState {
            board: Board::new(),
            inventories,
            current_player: Player::One,
            status: Status::InProgress,
            moves_played: 0,
        })
    }

    /// Start a game with the standard reserves (three nested stacks each).
    pub fn standard() -> GameState {
        GameState {
            board: Board::new(),
            inventories: [Inventory::standard(Player::One), Inventory::standard(Player::Two)],
            current_player: Player::One,
            status: Status::InProgress,
            moves_played: 0,
        }
    }

    pub fn from_layout(layout: &StartingLayout) -> Result<GameState, GameError> {
        GameState::new(layout.to_inventories()?)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn inventory(&self, player: Player) -> &Inventory {
        &self.inventories[player.index()]
    }

    /// The player to move, or the winner once the game is over.
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.status, Status::Won(_))
    }

    /// Moves applied since the start of the game.
    #[inline]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// The winner's line, once the game is won.
    pub fn winning_line(&self) -> Option<[Coord; 4]> {
        match self.status {
            Status::Won(winner) => self.board.winning_line(winner),
            Status::InProgress => None,
        }
    }

    /// Validate and play a move for the current player.
    ///
    /// On error the state is unchanged.
    #[instrument(skip(self), fields(player = %self.current_player, turn = self.moves_played))]
    pub fn apply_move(&mut self, origin: Origin, destination: Coord) -> Result<Snapshot, GameError> {
        let mv = Move { origin, destination };
        match rules::apply(self, mv) {
            Ok(status) => {
                debug!(%mv, ?status, "move applied");
                Ok(self.snapshot())
            }
            Err(err) => {
                debug!(%mv, %err, "move rejected");
                Err(err)
            }
        }
    }

    /// [`Self::apply_move`] for a [`Move`] value.
    pub fn play(&mut self, mv: Move) -> Result<Snapshot, GameError> {
        self.apply_move(mv.origin, mv.destination)
    }

    /// All moves the current player may make. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        rules::legal_moves(self)
    }

    pub fn is_legal(&self, mv: &Move) -> bool {
        rules::resolve(self, *mv).is_ok()
    }

    /// The visible state: top pieces only.
    pub fn snapshot(&self) -> Snapshot {
        let mut board = [[None; N]; N];
        for at in Coord::all() {
            board[at.y() as usize][at.x() as usize] = self.board.top_at(at);
        }
        Snapshot {
            board,
            reserves: [
                self.inventories[0].tops(),
                self.inventories[1].tops(),
            ],
            current_player: self.current_player,
            status: self.status,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::standard()
    }
}
