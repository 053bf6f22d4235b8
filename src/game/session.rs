use rand::Rng;

use crate::agents::{Agent, AgentKind, ColumnSource, HeuristicAgent, HumanAgent};
use crate::error::SessionError;

use super::{Board, Player};

/// How a session is populated: two humans, or one human against the
/// heuristic opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    TwoPlayer,
    OnePlayer,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::TwoPlayer => "Two Player",
            GameMode::OnePlayer => "vs Computer",
        }
    }
}

/// Where a session stands. The two non-`InProgress` states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

/// One successful placement, as reported to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnRecord {
    pub player: Player,
    pub kind: AgentKind,
    pub column: usize,
    pub row: usize,
}

/// What the renderer is shown: a completed move, or the final outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Moved(TurnRecord),
    Finished(GameStatus),
}

/// Read-only observer the orchestrator calls after every successful move and
/// once at session end. Purely presentational; nothing it does can influence
/// a decision path.
pub trait Renderer {
    fn show(&mut self, board: &Board, event: &SessionEvent) -> Result<(), SessionError>;
}

/// The turn orchestrator: owns the board, alternates two agents, applies
/// their moves, and detects the end of the game.
///
/// An illegal column choice (out of range or full) leaves the board
/// untouched and the same player on turn; the agent is simply asked again.
/// The retry loop is unbounded; any bound on re-asking belongs to the input
/// provider.
pub struct GameSession {
    board: Board,
    players: [Box<dyn Agent>; 2],
    current: usize,
    status: GameStatus,
}

impl GameSession {
    /// Session over an empty board. `first` indexes the starting player.
    pub fn new(players: [Box<dyn Agent>; 2], first: usize) -> Self {
        Self::from_position(Board::new(), players, first)
    }

    /// Session starting from a given (non-terminal) position.
    pub fn from_position(board: Board, players: [Box<dyn Agent>; 2], first: usize) -> Self {
        assert!(first < 2, "first player index must be 0 or 1");
        GameSession {
            board,
            players,
            current: first,
            status: GameStatus::InProgress,
        }
    }

    /// Two humans on one keyboard. Red always starts.
    pub fn two_player(red: Box<dyn ColumnSource>, yellow: Box<dyn ColumnSource>) -> Self {
        Self::new(
            [
                Box::new(HumanAgent::new(Player::Red, red)),
                Box::new(HumanAgent::new(Player::Yellow, yellow)),
            ],
            0,
        )
    }

    /// One human against the heuristic. A coin flip on `rng` decides which
    /// symbol the human holds; Red still moves first, so the flip decides
    /// who opens. The flip's randomness is independent of the heuristic's
    /// fallback RNG (`heuristic_seed` pins only the latter).
    pub fn one_player<R: Rng>(
        source: Box<dyn ColumnSource>,
        heuristic_seed: Option<u64>,
        rng: &mut R,
    ) -> Self {
        let computer = |player| match heuristic_seed {
            Some(seed) => HeuristicAgent::seeded(player, seed),
            None => HeuristicAgent::new(player),
        };

        let players: [Box<dyn Agent>; 2] = if rng.random_range(0..2) == 0 {
            [
                Box::new(HumanAgent::new(Player::Red, source)),
                Box::new(computer(Player::Yellow)),
            ]
        } else {
            [
                Box::new(computer(Player::Red)),
                Box::new(HumanAgent::new(Player::Yellow, source)),
            ]
        };

        Self::new(players, 0)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.players[self.current].player()
    }

    /// Whether the given symbol is held by a human or the computer.
    pub fn agent_kind(&self, player: Player) -> AgentKind {
        if self.players[0].player() == player {
            self.players[0].kind()
        } else {
            self.players[1].kind()
        }
    }

    /// Play one successful move: ask the current agent for a column until a
    /// legal one arrives, apply it, and evaluate the end condition. On a win
    /// or a full board the session becomes terminal; otherwise the turn
    /// passes to the other player.
    ///
    /// Must not be called once the session is over.
    pub fn play_turn(&mut self) -> Result<TurnRecord, SessionError> {
        assert!(
            self.status == GameStatus::InProgress,
            "play_turn called on a finished session"
        );

        loop {
            let column = self.players[self.current].choose_column(&self.board)?;
            let player = self.players[self.current].player();
            let kind = self.players[self.current].kind();

            let row = match self.board.drop_piece(column, player.slot()) {
                Ok(row) => row,
                // Same player retains the turn
                Err(_) => continue,
            };

            if self.board.has_four_in_a_row(player.slot()) {
                self.status = GameStatus::Won(player);
            } else if self.board.is_full() {
                self.status = GameStatus::Tied;
            } else {
                self.current = (self.current + 1) % 2;
            }

            return Ok(TurnRecord {
                player,
                kind,
                column,
                row,
            });
        }
    }

    /// Drive the session to completion, showing the renderer every
    /// successful move and the final outcome.
    pub fn run(&mut self, renderer: &mut dyn Renderer) -> Result<GameStatus, SessionError> {
        while self.status == GameStatus::InProgress {
            let record = self.play_turn()?;
            renderer.show(&self.board, &SessionEvent::Moved(record))?;
        }
        renderer.show(&self.board, &SessionEvent::Finished(self.status))?;
        Ok(self.status)
    }
}
