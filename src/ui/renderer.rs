use std::time::Duration;

use ratatui::style::Color;

use crate::agents::AgentKind;
use crate::error::SessionError;
use crate::game::{Board, GameStatus, Renderer, SessionEvent};

use super::game_view::{self, GameView};
use super::SharedTui;

/// Draws the board after every successful move and at session end. After a
/// computer move it pauses briefly so the placement registers before the
/// next prompt redraws.
pub struct TerminalRenderer {
    terminal: SharedTui,
    mode: &'static str,
    computer_delay: Duration,
}

impl TerminalRenderer {
    pub fn new(terminal: SharedTui, mode: &'static str, computer_delay: Duration) -> Self {
        TerminalRenderer {
            terminal,
            mode,
            computer_delay,
        }
    }
}

impl Renderer for TerminalRenderer {
    fn show(&mut self, board: &Board, event: &SessionEvent) -> Result<(), SessionError> {
        let (header, header_color, message) = match event {
            SessionEvent::Moved(record) => {
                let who = match record.kind {
                    AgentKind::Human => record.player.name().to_string(),
                    AgentKind::Computer => format!("Computer ({})", record.player.name()),
                };
                (
                    format!("{} played column {}", who, record.column + 1),
                    game_view::player_color(record.player),
                    None,
                )
            }
            SessionEvent::Finished(GameStatus::Won(player)) => (
                "Game Over".to_string(),
                game_view::player_color(*player),
                Some(format!("{} wins!", player.name())),
            ),
            SessionEvent::Finished(GameStatus::Tied) => (
                "Game Over".to_string(),
                Color::Cyan,
                Some("The board is full — it's a tie!".to_string()),
            ),
            SessionEvent::Finished(GameStatus::InProgress) => {
                ("In progress".to_string(), Color::White, None)
            }
        };

        let view = GameView {
            board,
            cursor: None,
            header,
            header_color,
            message,
            mode: self.mode,
        };
        self.terminal
            .borrow_mut()
            .draw(|frame| game_view::render(frame, &view))?;

        if let SessionEvent::Moved(record) = event {
            if record.kind == AgentKind::Computer && !self.computer_delay.is_zero() {
                std::thread::sleep(self.computer_delay);
            }
        }

        Ok(())
    }
}
