use crate::game::{Board, Player, Slot, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything one frame of the in-game screen needs.
pub struct GameView<'a> {
    pub board: &'a Board,
    /// Column the human selector is hovering, if a human is choosing.
    pub cursor: Option<usize>,
    pub header: String,
    pub header_color: Color,
    pub message: Option<String>,
    pub mode: &'static str,
}

pub fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

pub fn render(frame: &mut Frame, view: &GameView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Message
            Constraint::Length(3),  // Controls
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    render_board(frame, view.board, view.cursor, chunks[1]);
    render_message(frame, view.message.as_deref(), chunks[2]);
    render_controls(frame, chunks[3]);
}

/// The mode selection menu.
pub fn render_menu(frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8)])
        .split(frame.area());

    let title = Paragraph::new("Welcome to Connect Four!")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));
    frame.render_widget(title, chunks[0]);

    let lines = vec![
        Line::from(""),
        Line::from("Select game mode:"),
        Line::from(""),
        Line::from("  1. Two-Player Mode"),
        Line::from("  2. One-Player Mode (vs. Computer)"),
        Line::from("  3. Exit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press 1, 2, or 3",
            Style::default().fg(Color::Cyan),
        )),
    ];
    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(menu, chunks[1]);
}

fn render_header(frame: &mut Frame, view: &GameView, area: ratatui::layout::Rect) {
    let text = format!("{}  |  {}", view.header, view.mode);
    let header = Paragraph::new(text)
        .style(
            Style::default()
                .fg(view.header_color)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    cursor: Option<usize>,
    area: ratatui::layout::Rect,
) {
    let mut lines = Vec::new();

    // Column numbers, highlighting the hovered one
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if cursor == Some(col) {
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
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..COLS {
            let (symbol, color) = match board.slot(row, col) {
                Slot::Empty => (" . ", Color::DarkGray),
                Slot::Red => (" ● ", Color::Red),
                Slot::Yellow => (" ● ", Color::Yellow),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    // Drop indicator under the hovered column
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if cursor == Some(col) {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: ratatui::layout::Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls =
        Paragraph::new("←/→: Move  |  1-7: Jump  |  Enter: Drop  |  Q: Quit to menu")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
