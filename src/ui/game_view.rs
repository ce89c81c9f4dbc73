use crate::game::{Board, GameHandle, GameStatus, Line, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game: &GameHandle,
    selected_column: usize,
    message: &Option<String>,
    show_help: bool,
) {
    let board_height = game.board().rows() as u16 + 4;
    let controls_height = if show_help { 4 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Min(board_height),       // Board
            Constraint::Length(3),               // Message
            Constraint::Length(controls_height), // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(
        frame,
        game.board(),
        game.roster().iter().map(|(_, p)| p).collect(),
        game.winning_line(),
        selected_column,
        chunks[1],
    );
    render_message(frame, message, chunks[2]);
    if show_help {
        render_controls(frame, game, chunks[3]);
    }
}

/// Terminal color for a player's display color. Unknown names fall back to white.
pub fn player_color(player: &Player) -> Color {
    match player.color().parse::<Color>() {
        // Black pieces vanish on a dark terminal.
        Ok(Color::Black) => Color::Gray,
        Ok(color) => color,
        Err(_) => Color::White,
    }
}

fn render_header(frame: &mut Frame, game: &GameHandle, area: Rect) {
    let (status, color) = match game.status() {
        GameStatus::Running => {
            let player = game.current_player_info();
            (format!("Current Player: {player}"), player_color(player))
        }
        GameStatus::Won(id) => {
            let player = game.player(id);
            (format!("Game Over  |  {player} won"), player_color(player))
        }
        GameStatus::Tied => ("Game Over  |  Tie".to_string(), Color::White),
    };

    let header = Paragraph::new(format!("{status}  |  Move {}", game.move_count()))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    players: Vec<&Player>,
    winning_line: Option<&Line>,
    selected_column: usize,
    area: Rect,
) {
    let cols = board.cols();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..cols {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(TextLine::from(col_line));

    let rule = "═".repeat(cols * 3 + 1);
    lines.push(TextLine::from(format!("  ╔{rule}╗")));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..cols {
            let span = match board.get(row, col) {
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Some(id) => {
                    let color = players
                        .get(id.index())
                        .map_or(Color::White, |p| player_color(p));
                    let mut style = Style::default().fg(color);
                    if winning_line.is_some_and(|line| line.contains(row, col)) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(TextLine::from(row_spans));
    }

    lines.push(TextLine::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(TextLine::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, game: &GameHandle, area: Rect) {
    let line1 = TextLine::from("←/→: Move  |  1-9/Enter: Drop  |  R: New game  |  Q: Quit");

    let mut legend = Vec::new();
    for (i, (_, player)) in game.roster().iter().enumerate() {
        if i > 0 {
            legend.push(Span::raw("   "));
        }
        legend.push(Span::styled(
            format!("● {player}"),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ));
    }

    let controls = Paragraph::new(vec![line1, TextLine::from(legend)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
