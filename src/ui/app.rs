use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::style::Color;

use crate::agents::AgentKind;
use crate::config::AppConfig;
use crate::error::SessionError;
use crate::game::{GameMode, GameSession, GameStatus};

use super::game_view::{self, GameView};
use super::input::SelectorInput;
use super::renderer::TerminalRenderer;
use super::SharedTui;

/// The application shell: mode menu, one session per play-through, and the
/// play-again prompt. Everything inside a session goes through the core
/// orchestrator; the shell only wires up sources, renderer, and seeds.
pub struct App {
    terminal: SharedTui,
    config: AppConfig,
    /// Drives only the one-player first-mover coin flip; the heuristic's
    /// fallback draws come from its own independently seeded RNG.
    pairing_rng: StdRng,
}

impl App {
    pub fn new(terminal: SharedTui, config: AppConfig) -> Self {
        let pairing_rng = match config.rng.pairing_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        App {
            terminal,
            config,
            pairing_rng,
        }
    }

    /// Main application loop: menu, game, repeat until the user exits.
    pub fn run(&mut self) -> Result<(), SessionError> {
        while let Some(mode) = self.menu()? {
            if !self.play(mode)? {
                break;
            }
        }
        Ok(())
    }

    /// Blocking mode selection. `None` means exit.
    fn menu(&mut self) -> Result<Option<GameMode>, SessionError> {
        loop {
            self.terminal
                .borrow_mut()
                .draw(game_view::render_menu)?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('1') => return Ok(Some(GameMode::TwoPlayer)),
                KeyCode::Char('2') => return Ok(Some(GameMode::OnePlayer)),
                KeyCode::Char('3') | KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                _ => {}
            }
        }
    }

    /// One full play-through. Returns whether the app should keep running.
    fn play(&mut self, mode: GameMode) -> Result<bool, SessionError> {
        let mut session = match mode {
            GameMode::TwoPlayer => GameSession::two_player(
                Box::new(SelectorInput::new(self.terminal.clone(), mode.label())),
                Box::new(SelectorInput::new(self.terminal.clone(), mode.label())),
            ),
            GameMode::OnePlayer => GameSession::one_player(
                Box::new(SelectorInput::new(self.terminal.clone(), mode.label())),
                self.config.rng.heuristic_seed,
                &mut self.pairing_rng,
            ),
        };

        if mode == GameMode::OnePlayer {
            self.announce_first_mover(&session)?;
        }

        let mut renderer = TerminalRenderer::new(
            self.terminal.clone(),
            mode.label(),
            Duration::from_millis(self.config.game.computer_delay_ms),
        );

        let status = match session.run(&mut renderer) {
            Ok(status) => status,
            // Quitting mid-game goes back to the menu
            Err(SessionError::Aborted) => return Ok(true),
            Err(err) => return Err(err),
        };

        self.ask_replay(&session, status)
    }

    fn announce_first_mover(&mut self, session: &GameSession) -> Result<(), SessionError> {
        let first = session.current_player();
        let message = match session.agent_kind(first) {
            AgentKind::Human => format!("You ({}) go first!", first.name()),
            AgentKind::Computer => format!("Computer ({}) goes first!", first.name()),
        };

        let view = GameView {
            board: session.board(),
            cursor: None,
            header: "New game".to_string(),
            header_color: game_view::player_color(first),
            message: Some(message),
            mode: GameMode::OnePlayer.label(),
        };
        self.terminal
            .borrow_mut()
            .draw(|frame| game_view::render(frame, &view))?;
        std::thread::sleep(Duration::from_millis(900));
        Ok(())
    }

    /// Game-over screen with a play-again prompt. Returns whether the app
    /// should keep running.
    fn ask_replay(&mut self, session: &GameSession, status: GameStatus) -> Result<bool, SessionError> {
        let (result_text, color) = match status {
            GameStatus::Won(player) => (
                format!("{} wins!", player.name()),
                game_view::player_color(player),
            ),
            GameStatus::Tied => ("It's a tie!".to_string(), Color::Cyan),
            GameStatus::InProgress => ("Game interrupted".to_string(), Color::White),
        };

        loop {
            let view = GameView {
                board: session.board(),
                cursor: None,
                header: "Game Over".to_string(),
                header_color: color,
                message: Some(format!("{result_text}  Play again? (y/n)")),
                mode: "Game Over",
            };
            self.terminal
                .borrow_mut()
                .draw(|frame| game_view::render(frame, &view))?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => return Ok(true),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('q') | KeyCode::Esc => {
                    return Ok(false)
                }
                _ => {}
            }
        }
    }
}
