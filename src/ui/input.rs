use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::agents::{ColumnSource, PromptContext};
use crate::error::SessionError;
use crate::game::COLS;

use super::game_view::{self, GameView};
use super::SharedTui;

/// The blocking input provider behind every human player in the TUI: draws
/// the board with a hovering cursor and waits for a key.
///
/// Range and fullness are pre-checked here so the player gets an immediate
/// "column is full" message, but the orchestrator re-validates every column
/// it receives regardless.
pub struct SelectorInput {
    terminal: SharedTui,
    mode: &'static str,
    selected: usize,
    warning: Option<String>,
}

impl SelectorInput {
    pub fn new(terminal: SharedTui, mode: &'static str) -> Self {
        SelectorInput {
            terminal,
            mode,
            selected: 3, // Start in the middle
            warning: None,
        }
    }

    fn draw(&self, ctx: &PromptContext<'_>) -> Result<(), SessionError> {
        let view = GameView {
            board: ctx.board,
            cursor: Some(self.selected),
            header: format!("{}'s turn — pick a column", ctx.player.name()),
            header_color: game_view::player_color(ctx.player),
            message: self.warning.clone(),
            mode: self.mode,
        };
        self.terminal
            .borrow_mut()
            .draw(|frame| game_view::render(frame, &view))?;
        Ok(())
    }
}

impl ColumnSource for SelectorInput {
    fn request_column(&mut self, ctx: PromptContext<'_>) -> Result<usize, SessionError> {
        loop {
            self.draw(&ctx)?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Left => {
                    self.warning = None;
                    if self.selected > 0 {
                        self.selected -= 1;
                    }
                }
                KeyCode::Right => {
                    self.warning = None;
                    if self.selected < COLS - 1 {
                        self.selected += 1;
                    }
                }
                KeyCode::Char(c @ '1'..='7') => {
                    self.warning = None;
                    self.selected = c as usize - '1' as usize;
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if ctx.board.is_column_full(self.selected) {
                        self.warning =
                            Some(format!("Column {} is full — pick another", self.selected + 1));
                    } else {
                        self.warning = None;
                        return Ok(self.selected);
                    }
                }
                KeyCode::Char('q') | KeyCode::Esc => return Err(SessionError::Aborted),
                _ => {}
            }
        }
    }
}
