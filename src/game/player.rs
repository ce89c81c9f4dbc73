use std::fmt;

use crate::error::GameError;

/// Color given to the extra player in three-player games.
pub const THIRD_PLAYER_COLOR: &str = "black";

/// Index of a player in its [`Roster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub usize);

impl PlayerId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A participant, identified by its display color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    color: String,
}

impl Player {
    pub fn new(color: impl Into<String>) -> Self {
        Player {
            color: color.into().trim().to_string(),
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.color)
    }
}

/// Ordered list of at least two players with distinct colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Result<Self, GameError> {
        if players.len() < 2 {
            return Err(GameError::InvalidPlayerCount {
                count: players.len(),
            });
        }

        for (i, player) in players.iter().enumerate() {
            if player.color().is_empty() {
                return Err(GameError::InvalidPlayer(format!(
                    "player {} has no color",
                    i + 1
                )));
            }
            let duplicate = players[..i]
                .iter()
                .any(|other| other.color().eq_ignore_ascii_case(player.color()));
            if duplicate {
                return Err(GameError::InvalidPlayer(format!(
                    "color '{}' is used by more than one player",
                    player.color()
                )));
            }
        }

        Ok(Roster { players })
    }

    /// Build a roster straight from a list of color names.
    pub fn from_colors<S: AsRef<str>>(colors: &[S]) -> Result<Self, GameError> {
        Self::new(colors.iter().map(|c| Player::new(c.as_ref())).collect())
    }

    pub fn two_player(first: &str, second: &str) -> Result<Self, GameError> {
        Self::from_colors(&[first, second])
    }

    /// Two chosen colors plus a fixed third player.
    pub fn three_player(first: &str, second: &str) -> Result<Self, GameError> {
        Self::from_colors(&[first, second, THIRD_PLAYER_COLOR])
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, player)| (PlayerId(i), player))
    }
}

/// Circular index selecting whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnCursor {
    current: usize,
    len: usize,
}

impl TurnCursor {
    /// Cursor at the first player of a roster of `len` players.
    pub fn new(len: usize) -> Self {
        TurnCursor { current: 0, len }
    }

    pub fn current(&self) -> PlayerId {
        PlayerId(self.current)
    }

    /// Move to the next player, wrapping back to the first.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}
