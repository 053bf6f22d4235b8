//! Terminal UI: the mode menu, the interactive column selector that backs
//! the human player, the session renderer, and the board view itself.
//!
//! Everything here sits strictly downstream of the core's read-only query
//! surface; nothing rendered can influence a decision path.

mod app;
mod game_view;
mod input;
mod renderer;

pub use app::App;

use std::cell::RefCell;
use std::io::Stdout;
use std::rc::Rc;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// The concrete terminal the whole UI draws through.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// The terminal is shared between the app loop, the blocking column
/// selector, and the session renderer; the game is single-threaded, so a
/// reference-counted cell is all the sharing needed.
pub type SharedTui = Rc<RefCell<Tui>>;
