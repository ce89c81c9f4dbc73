//! Terminal UI: draws the board, maps key presses to columns and reports
//! the end of the game.

mod app;
mod game_view;

pub use app::App;
pub use game_view::player_color;
