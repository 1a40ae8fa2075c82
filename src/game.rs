//! Turn controller: alternating play, win/draw detection, undo/redo
//!
//! [`Game`] is the sole owner of the [`Board`]; strategies only borrow it
//! for the duration of one [`Strategy::get_move`] call. All game-over and
//! history bookkeeping lives here, keeping the engine core stateless
//! between turns.

use log::info;

use crate::board::{Board, Cell, Pos};
use crate::error::GameError;
use crate::strategy::Strategy;

/// One committed move, kept for undo/redo
#[derive(Debug, Clone, Copy)]
struct MoveRecord {
    pos: Pos,
    symbol: Cell,
}

/// A running game: board, turn order, result, and move history
pub struct Game {
    board: Board,
    current: Cell,
    over: bool,
    winner: Option<Cell>,
    win_cells: Option<Vec<Pos>>,
    last_move: Option<Pos>,
    history: Vec<MoveRecord>,
    redo_stack: Vec<MoveRecord>,
}

impl Game {
    /// New game on the default 15x15 board; X moves first
    pub fn new() -> Self {
        Self::with_board(Board::default())
    }

    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            current: Cell::X,
            over: false,
            winner: None,
            win_cells: None,
            last_move: None,
            history: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Cell {
        self.current
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// The winner, if any. `None` while running or after a draw.
    #[inline]
    pub fn winner(&self) -> Option<Cell> {
        self.winner
    }

    /// The five winning cells once the game is won
    pub fn win_cells(&self) -> Option<&[Pos]> {
        self.win_cells.as_deref()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Start over: clears the board, history, and result; X to move
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = Cell::X;
        self.over = false;
        self.winner = None;
        self.win_cells = None;
        self.last_move = None;
        self.history.clear();
        self.redo_stack.clear();
    }

    /// Commit a move for the player on turn
    pub fn make_move(&mut self, row: i32, col: i32) -> Result<(), GameError> {
        if self.over {
            return Err(GameError::GameOver);
        }
        if !self.board.is_inside(row, col) {
            return Err(GameError::OutOfBounds { row, col });
        }
        let symbol = self.current;
        if !self.board.place(row, col, symbol) {
            return Err(GameError::Occupied { row, col });
        }

        self.history.push(MoveRecord {
            pos: Pos::new(row, col),
            symbol,
        });
        self.redo_stack.clear();
        self.last_move = Some(Pos::new(row, col));

        if let Some(cells) = self.board.check_win(row, col, symbol) {
            info!("game over: {symbol:?} wins through ({row}, {col})");
            self.over = true;
            self.winner = Some(symbol);
            self.win_cells = Some(cells);
            return Ok(());
        }

        if self.board.is_full() {
            info!("game over: draw");
            self.over = true;
            return Ok(());
        }

        self.current = symbol.opponent();
        Ok(())
    }

    /// Let a strategy pick and commit a move for the player on turn
    pub fn ai_move(&mut self, strategy: &mut dyn Strategy) -> Result<Pos, GameError> {
        if self.over {
            return Err(GameError::GameOver);
        }
        if strategy.symbol() != self.current {
            return Err(GameError::OutOfTurn);
        }
        let mv = strategy
            .get_move(&mut self.board)
            .ok_or(GameError::BoardFull)?;
        self.make_move(mv.row, mv.col)?;
        Ok(mv)
    }

    /// Take back the most recent move. Clears any game-over state and
    /// gives the turn back to the mover. Returns `false` with no history.
    pub fn undo(&mut self) -> bool {
        let record = match self.history.pop() {
            Some(r) => r,
            None => return false,
        };
        self.redo_stack.push(record);
        self.board.remove(record.pos.row, record.pos.col);
        self.current = record.symbol;
        self.last_move = None;
        self.over = false;
        self.winner = None;
        self.win_cells = None;
        true
    }

    /// Replay the most recently undone move. Returns `false` with nothing
    /// to redo.
    pub fn redo(&mut self) -> bool {
        let record = match self.redo_stack.pop() {
            Some(r) => r,
            None => return false,
        };
        self.board.place(record.pos.row, record.pos.col, record.symbol);
        self.history.push(record);
        self.current = record.symbol.opponent();
        self.last_move = Some(record.pos);

        // Redoing the final move restores the result as well
        if let Some(cells) = self
            .board
            .check_win(record.pos.row, record.pos.col, record.symbol)
        {
            self.over = true;
            self.winner = Some(record.symbol);
            self.win_cells = Some(cells);
        } else if self.board.is_full() {
            self.over = true;
        }
        true
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
