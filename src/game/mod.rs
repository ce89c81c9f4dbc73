//! Core Connect Four logic: board and win detection, players and turn order,
//! and the game session that ties them together.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Direction, Line, DEFAULT_COLS, DEFAULT_ROWS, LINE_LEN};
pub use player::{Player, PlayerId, Roster, TurnCursor, THIRD_PLAYER_COLOR};
pub use state::{DropResult, DropStatus, GameHandle, GameStatus, Rejection};
