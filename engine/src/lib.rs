pub mod logger;

mod board;
mod bot_controller;
mod error;
mod game_session;
mod session_rng;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::select_move;
pub use error::{ConfigError, MoveError};
pub use game_session::{GameSession, SessionState};
pub use session_rng::SessionRng;
pub use settings::{GameSettings, PRESETS};
pub use types::{Difficulty, GameOutcome, Mark, Position, WinningLine};
pub use win_detector::{
    check_win_through, check_winner_full, classify, is_draw, is_legal_move, winning_line_through,
};
