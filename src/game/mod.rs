//! Core Connect Four logic: the 6×7 board with placement and win detection,
//! the player symbols, and the turn-taking session state machine.

mod board;
mod player;
mod session;

pub use board::{Board, MoveError, Slot, COLS, ROWS};
pub use player::Player;
pub use session::{
    GameMode, GameSession, GameStatus, Renderer, SessionEvent, TurnRecord,
};
