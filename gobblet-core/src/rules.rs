//! The rules engine: move validation, application and win evaluation.
//!
//! A move is first resolved against the current state. Resolution checks the
//! origin and destination, then plays the move out on a copy of the board and
//! evaluates both players' lines there. Only a fully resolved move is
//! committed, so a rejected move never leaves a partial edit behind.

use tracing::info;

use crate::{Board, Coord, GameError, GameState, Move, Origin, Player, ReserveIndex, Status};

/// A move that passed every check, played out on a board copy.
pub(crate) struct Resolution {
    board: Board,
    winner: Option<Player>,
}

/// Check `mv` for the current player without touching `state`.
pub(crate) fn resolve(state: &GameState, mv: Move) -> Result<Resolution, GameError> {
    if let Status::Won(winner) = state.status {
        return Err(GameError::GameOver(winner));
    }
    let player = state.current_player;

    let piece = match mv.origin {
        Origin::Reserve(idx) => state.inventory(player).top(idx).ok_or(GameError::EmptyStack(idx))?,
        Origin::BoardCell(from) => state.board.top_at(from).ok_or(GameError::EmptyCell(from))?,
    };
    if piece.owner() != player {
        return Err(GameError::NotOwner { player, owner: piece.owner() });
    }

    // Checked before lifting: a piece can never land back on its own cell.
    state.board.check_placement(mv.destination, piece)?;

    let mut board = state.board.clone();
    if let Origin::BoardCell(from) = mv.origin {
        board.remove_top(from)?;
    }
    board.place(mv.destination, piece)?;

    // Lifting a piece can uncover an opponent line, so both players are checked.
    let winner = board.check_winner()?;
    Ok(Resolution { board, winner })
}

/// Resolve and commit `mv`, returning the new status.
pub(crate) fn apply(state: &mut GameState, mv: Move) -> Result<Status, GameError> {
    let Resolution { board, winner } = resolve(state, mv)?;
    let player = state.current_player;

    if let Origin::Reserve(idx) = mv.origin {
        state.inventories[player.index()].take(idx)?;
    }
    state.board = board;
    state.moves_played += 1;

    match winner {
        Some(winner) => {
            info!(%winner, moves = state.moves_played, "game won");
            state.status = Status::Won(winner);
            state.current_player = winner;
        }
        None => state.current_player = player.opponent(),
    }
    Ok(state.status)
}

/// Every move [`apply`] would accept: reserve stacks first, then board cells,
/// destinations row by row.
pub(crate) fn legal_moves(state: &GameState) -> Vec<Move> {
    if state.is_over() {
        return Vec::new();
    }
    let origins = ReserveIndex::all()
        .map(Origin::Reserve)
        .chain(Coord::all().map(Origin::BoardCell));

    origins
        .flat_map(|origin| Coord::all().map(move |destination| Move { origin, destination }))
        .filter(|&mv| resolve(state, mv).is_ok())
        .collect()
}
