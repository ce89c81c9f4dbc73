use std::path::PathBuf;

/// Errors raised when a game session is set up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("at least 2 players are required (got {count})")]
    InvalidPlayerCount { count: usize },

    #[error("invalid player: {0}")]
    InvalidPlayer(String),

    #[error("a {height}x{width} board cannot hold a line of four")]
    InvalidDimensions { height: usize, width: usize },
}

/// Contract violations when writing a piece directly onto the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        let err = GameError::InvalidPlayerCount { count: 1 };
        assert_eq!(err.to_string(), "at least 2 players are required (got 1)");

        let err = GameError::InvalidDimensions {
            height: 3,
            width: 3,
        };
        assert_eq!(err.to_string(), "a 3x3 board cannot hold a line of four");
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::CellOccupied { row: 5, col: 2 };
        assert_eq!(err.to_string(), "cell (5, 2) is already occupied");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.height must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.height must be > 0"
        );
    }
}
