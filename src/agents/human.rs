use crate::error::SessionError;
use crate::game::{Board, Player};

use super::{Agent, AgentKind, ColumnSource, PromptContext};

/// An externally-driven player: every move is deferred to a blocking
/// [`ColumnSource`] (the TUI column selector in the binary, a scripted
/// source in tests).
pub struct HumanAgent {
    player: Player,
    source: Box<dyn ColumnSource>,
}

impl HumanAgent {
    pub fn new(player: Player, source: Box<dyn ColumnSource>) -> Self {
        HumanAgent { player, source }
    }
}

impl Agent for HumanAgent {
    fn player(&self) -> Player {
        self.player
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }

    fn choose_column(&mut self, board: &Board) -> Result<usize, SessionError> {
        self.source.request_column(PromptContext {
            board,
            player: self.player,
        })
    }
}
