use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Board shapes offered by the UI layer. The engine itself accepts any
/// square size from 3 up with 3 <= win_length <= size.
pub const PRESETS: [GameSettings; 4] = [
    GameSettings {
        board_size: 3,
        win_length: 3,
    },
    GameSettings {
        board_size: 4,
        win_length: 4,
    },
    GameSettings {
        board_size: 5,
        win_length: 4,
    },
    GameSettings {
        board_size: 6,
        win_length: 5,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub board_size: usize,
    pub win_length: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_size: 3,
            win_length: 3,
        }
    }
}

impl GameSettings {
    pub fn new(board_size: usize, win_length: usize) -> Self {
        Self {
            board_size,
            win_length,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < 3 {
            return Err(ConfigError::BoardTooSmall(self.board_size));
        }
        if self.win_length < 3 {
            return Err(ConfigError::WinLengthTooShort(self.win_length));
        }
        if self.win_length > self.board_size {
            return Err(ConfigError::WinLengthExceedsBoard {
                win_length: self.win_length,
                size: self.board_size,
            });
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml_ng::to_string(self).map_err(|e| format!("Failed to serialize settings: {}", e))
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let settings: Self = serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to deserialize settings: {}", e))?;
        settings
            .validate()
            .map_err(|e| format!("Settings validation error: {}", e))?;
        Ok(settings)
    }
}
