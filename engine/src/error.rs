use thiserror::Error;

/// Rejected board configurations. Construction either succeeds completely or
/// leaves nothing behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be at least 3, got {0}")]
    BoardTooSmall(usize),

    #[error("win length must be at least 3, got {0}")]
    WinLengthTooShort(usize),

    #[error("win length ({win_length}) cannot exceed board size ({size})")]
    WinLengthExceedsBoard { win_length: usize, size: usize },
}

/// Rejected moves. All variants are recoverable and leave the session state
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("position ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already marked")]
    Occupied { row: usize, col: usize },

    #[error("the game is already over")]
    GameOver,

    #[error("it is not the computer's turn")]
    NotComputerTurn,
}
