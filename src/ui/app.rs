use crate::config::UiConfig;
use crate::game::{DropStatus, GameHandle, Rejection};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    game: GameHandle,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    tick_rate: Duration,
    show_help: bool,
}

impl App {
    pub fn new(game: GameHandle, ui: &UiConfig) -> Self {
        let selected_column = game.board().cols() / 2; // Start in middle
        App {
            game,
            selected_column,
            should_quit: false,
            message: None,
            tick_rate: Duration::from_millis(ui.tick_rate_ms),
            show_help: ui.show_help,
        }
    }

    pub fn game(&self) -> &GameHandle {
        &self.game
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        let cols = self.game.board().cols();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < cols {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < cols {
                    self.selected_column = col;
                    self.drop_piece();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game.restart();
                self.selected_column = cols / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        let result = self.game.drop_piece(self.selected_column);
        self.message = match result.status {
            DropStatus::Continues => None,
            DropStatus::Won(id) => Some(format!("Player {} won!", self.game.player(id))),
            DropStatus::Tied => Some("Tie!".to_string()),
            DropStatus::Rejected(Rejection::ColumnFull) => Some("Column is full!".to_string()),
            DropStatus::Rejected(Rejection::InvalidColumn) => Some("Invalid column!".to_string()),
            DropStatus::Rejected(Rejection::GameOver) => {
                Some("Game is over! Press 'r' to restart.".to_string())
            }
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game,
            self.selected_column,
            &self.message,
            self.show_help,
        );
    }
}
