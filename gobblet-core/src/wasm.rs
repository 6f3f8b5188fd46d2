//! WASM bindings for gobblet-core
//!
//! Provides a JavaScript-friendly API for the game logic.

use wasm_bindgen::prelude::*;
use crate::{Coord, GameState, Move, Origin, Player, ReserveIndex, StartingLayout, Status};

/// WASM-friendly wrapper around GameState
#[wasm_bindgen]
pub struct WasmGame {
    inner: GameState,
}

#[wasm_bindgen]
impl WasmGame {
    /// Start a game with the standard reserves
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame { inner: GameState::standard() }
    }

    /// Start a game from a JSON starting layout
    #[wasm_bindgen(js_name = fromLayoutJson)]
    pub fn from_layout_json(json: &str) -> Result<WasmGame, String> {
        let layout = StartingLayout::from_json(json).map_err(|e| e.to_string())?;
        let inner = GameState::from_layout(&layout).map_err(|e| e.to_string())?;
        Ok(WasmGame { inner })
    }

    /// Restore a game saved with `stateJson`
    #[wasm_bindgen(js_name = fromStateJson)]
    pub fn from_state_json(json: &str) -> Result<WasmGame, String> {
        let inner = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Ok(WasmGame { inner })
    }

    /// Full game state as JSON, covered pieces included
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, String> {
        serde_json::to_string(&self.inner).map_err(|e| e.to_string())
    }

    /// Visible state as JSON: top pieces, reserve tops, player and status
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, String> {
        serde_json::to_string(&self.inner.snapshot()).map_err(|e| e.to_string())
    }

    /// Current player (1 or 2); the winner once the game is over
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> u8 {
        self.inner.current_player().number()
    }

    /// Winner: 0 (none), 1 (P1), or 2 (P2)
    pub fn winner(&self) -> u8 {
        match self.inner.status() {
            Status::InProgress => 0,
            Status::Won(player) => player.number(),
        }
    }

    /// Winning line as [x, y, x, y, ...], empty while the game is on
    #[wasm_bindgen(js_name = winningLine)]
    pub fn winning_line(&self) -> Vec<u8> {
        self.inner
            .winning_line()
            .map(|line| line.iter().flat_map(|c| [c.x(), c.y()]).collect())
            .unwrap_or_default()
    }

    /// Apply a move.
    /// From a reserve: applyMove(stack, null, null, toX, toY)
    /// From the board: applyMove(null, fromX, fromY, toX, toY)
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(
        &mut self,
        from_stack: Option<u8>,
        from_x: Option<u8>,
        from_y: Option<u8>,
        to_x: u8,
        to_y: u8,
    ) -> Result<(), String> {
        let origin = match (from_stack, from_x, from_y) {
            (Some(stack), None, None) => Origin::reserve(stack),
            (None, Some(x), Some(y)) => Origin::cell(x, y),
            _ => return Err("give either a reserve stack or a board cell as origin".to_string()),
        }
        .map_err(|e| e.to_string())?;
        let to = Coord::new(to_x, to_y).map_err(|e| e.to_string())?;

        self.inner.apply_move(origin, to).map(|_| ()).map_err(|e| e.to_string())
    }

    /// Top piece of a cell as [owner, size], empty if the cell is empty
    #[wasm_bindgen(js_name = cellTop)]
    pub fn cell_top(&self, x: u8, y: u8) -> Vec<u8> {
        Coord::new(x, y)
            .ok()
            .and_then(|c| self.inner.board().top_at(c))
            .map(|p| vec![p.owner().number(), p.size().index()])
            .unwrap_or_default()
    }

    /// Whole stack of a cell as [owner, size, owner, size, ...], bottom to top
    #[wasm_bindgen(js_name = cellStack)]
    pub fn cell_stack(&self, x: u8, y: u8) -> Vec<u8> {
        let Ok(c) = Coord::new(x, y) else {
            return vec![];
        };
        self.inner
            .board()
            .stack_at(c)
            .iter()
            .flat_map(|p| [p.owner().number(), p.size().index()])
            .collect()
    }

    /// Top piece of a player's reserve stack as [owner, size], or empty
    #[wasm_bindgen(js_name = reserveTop)]
    pub fn reserve_top(&self, player: u8, stack: u8) -> Vec<u8> {
        let (Some(player), Ok(idx)) = (Player::from_number(player), ReserveIndex::new(stack)) else {
            return vec![];
        };
        self.inner
            .inventory(player)
            .top(idx)
            .map(|p| vec![p.owner().number(), p.size().index()])
            .unwrap_or_default()
    }

    /// Get legal moves as JSON array
    /// Each move is { origin: { Reserve: 0 } | { BoardCell: [x, y] }, destination: [x, y] }
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, String> {
        let moves: Vec<Move> = self.inner.legal_moves();
        serde_wasm_bindgen::to_value(&moves).map_err(|e| e.to_string())
    }

    /// Check if game is over
    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_over()
    }

    /// Board as text, row 3 first
    pub fn render(&self) -> String {
        self.inner.board().to_string()
    }

    /// Clone the game
    #[wasm_bindgen(js_name = clone)]
    pub fn clone_game(&self) -> WasmGame {
        WasmGame { inner: self.inner.clone() }
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}
