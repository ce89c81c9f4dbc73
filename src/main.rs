use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::game::{GameHandle, THIRD_PLAYER_COLOR};
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Connect Four for two or more players")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Player colors in turn order, comma separated (e.g. red,yellow)
    #[arg(long, value_delimiter = ',')]
    players: Option<Vec<String>>,

    /// Add a third player with the color black
    #[arg(long)]
    three_player: bool,

    /// Override board height (rows)
    #[arg(long)]
    height: Option<usize>,

    /// Override board width (columns)
    #[arg(long)]
    width: Option<usize>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    // Silent unless RUST_LOG is set; stderr shares the screen with the UI.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(players) = cli.players {
        app_config.game.players = players;
    }
    if cli.three_player {
        app_config.game.players.push(THIRD_PLAYER_COLOR.to_string());
    }
    if let Some(height) = cli.height {
        app_config.game.height = height;
    }
    if let Some(width) = cli.width {
        app_config.game.width = width;
    }
    app_config.validate().context("invalid settings")?;

    let game = GameHandle::from_config(&app_config.game).context("creating game")?;
    let mut app = App::new(game, &app_config.ui);

    run(&mut app).context("terminal UI failed")
}

fn run(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
