use crate::board::Board;
use crate::bot_controller::select_move;
use crate::error::{ConfigError, MoveError};
use crate::log;
use crate::session_rng::SessionRng;
use crate::settings::GameSettings;
use crate::types::{Difficulty, GameOutcome, Mark, Position};
use crate::win_detector::{classify, is_legal_move};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    AwaitingMove(Mark),
    Finished(GameOutcome),
}

/// Owns one game: the board, whose turn it is, and the computer opponent if
/// one is seated. All mutation goes through the guarded `place` path; the
/// move selector only ever borrows the board read-only.
pub struct GameSession {
    board: Board,
    difficulty: Difficulty,
    computer_mark: Option<Mark>,
    state: SessionState,
    last_move: Option<Position>,
    rng: SessionRng,
}

impl GameSession {
    /// X always moves first. `computer_mark: None` seats two humans.
    pub fn new(
        settings: &GameSettings,
        difficulty: Difficulty,
        computer_mark: Option<Mark>,
        rng: SessionRng,
    ) -> Result<Self, ConfigError> {
        let board = Board::new(settings.board_size, settings.win_length)?;
        Ok(Self {
            board,
            difficulty,
            computer_mark,
            state: SessionState::AwaitingMove(Mark::X),
            last_move: None,
            rng,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn current_mover(&self) -> Option<Mark> {
        match self.state {
            SessionState::AwaitingMove(mark) => Some(mark),
            SessionState::Finished(_) => None,
        }
    }

    pub fn is_computer_turn(&self) -> bool {
        self.computer_mark.is_some() && self.current_mover() == self.computer_mark
    }

    /// Applies the current mover's mark at (row, col). Illegal input leaves
    /// the session untouched.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameOutcome, MoveError> {
        let mover = match &self.state {
            SessionState::Finished(_) => return Err(MoveError::GameOver),
            SessionState::AwaitingMove(mark) => *mark,
        };
        self.place(mover, row, col)
    }

    /// Asks the move selector for a cell and applies it through the same
    /// guarded path as a human move; the selector's output is re-validated
    /// like any other input. Blocking; any thinking-delay presented to the
    /// player is the caller's concern.
    pub fn play_computer_turn(&mut self) -> Result<GameOutcome, MoveError> {
        let mover = match &self.state {
            SessionState::Finished(_) => return Err(MoveError::GameOver),
            SessionState::AwaitingMove(mark) => *mark,
        };
        if self.computer_mark != Some(mover) {
            return Err(MoveError::NotComputerTurn);
        }

        let Some(human_mark) = mover.opponent() else {
            unreachable!("a seated player mark always has an opponent");
        };
        let Some(pos) = select_move(&self.board, self.difficulty, mover, human_mark, &mut self.rng)
        else {
            unreachable!("move selector called with no available moves");
        };

        let result = self.place(mover, pos.row, pos.col);
        if let Err(e) = &result {
            log!(
                "computer move at ({}, {}) rejected: {}",
                pos.row,
                pos.col,
                e
            );
        }
        result
    }

    fn place(&mut self, mover: Mark, row: usize, col: usize) -> Result<GameOutcome, MoveError> {
        if !self.board.in_bounds(row, col) {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if !is_legal_move(&self.board, row, col) {
            return Err(MoveError::Occupied { row, col });
        }

        self.board.set(row, col, mover);
        self.last_move = Some(Position::new(row, col));

        let outcome = classify(&self.board, Position::new(row, col));
        self.state = match &outcome {
            GameOutcome::InProgress { next_to_move } => SessionState::AwaitingMove(*next_to_move),
            terminal => SessionState::Finished(terminal.clone()),
        };
        Ok(outcome)
    }

    /// Discards the current game and starts over. X moves first again.
    pub fn reset(&mut self, settings: &GameSettings) -> Result<(), ConfigError> {
        self.board = Board::new(settings.board_size, settings.win_length)?;
        self.state = SessionState::AwaitingMove(Mark::X);
        self.last_move = None;
        Ok(())
    }
}
