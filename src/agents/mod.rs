//! The "choose a column" abstraction the session orchestrator plays through:
//! a human player deferring to a blocking input provider, and the computer
//! opponent running a tiered greedy heuristic.

mod heuristic;
mod human;

pub use heuristic::{HeuristicAgent, PREFERRED_COLUMNS};
pub use human::HumanAgent;

use crate::error::SessionError;
use crate::game::{Board, Player};

/// Which kind of participant an agent represents. Presentation cares (the UI
/// pauses after computer moves); the orchestrator does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    Human,
    Computer,
}

/// What an input provider is told when a column is requested.
#[derive(Debug, Clone, Copy)]
pub struct PromptContext<'a> {
    pub board: &'a Board,
    pub player: Player,
}

/// Blocking source of column choices for an externally-driven player.
///
/// Implementations may pre-validate (range, fullness) and re-ask on their
/// own, but the orchestrator never relies on it: every returned column is
/// still routed through [`Board::drop_piece`], and an illegal one simply
/// means the same player is asked again.
pub trait ColumnSource {
    fn request_column(&mut self, ctx: PromptContext<'_>) -> Result<usize, SessionError>;
}

/// A participant in a game session: holds an immutable symbol and can choose
/// a column given a read-only view of the board.
pub trait Agent {
    /// The symbol this agent plays.
    fn player(&self) -> Player;

    /// Human or computer.
    fn kind(&self) -> AgentKind;

    /// Choose a column. Blocks for externally-driven agents; synchronous
    /// computation for the heuristic. Callers guarantee at least one legal
    /// column exists (check [`Board::is_full`] first).
    fn choose_column(&mut self, board: &Board) -> Result<usize, SessionError>;
}
