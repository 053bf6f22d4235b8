use std::cell::RefCell;
use std::io;
use std::path::Path;
use std::rc::Rc;

use connect_four::config::AppConfig;
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_or_default(Path::new("connect-four.toml"))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Rc::new(RefCell::new(Terminal::new(backend)?));

    let mut app = App::new(terminal.clone(), config);
    let res = app.run();

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.borrow_mut().backend_mut(), LeaveAlternateScreen);
    let _ = terminal.borrow_mut().show_cursor();

    res?;
    Ok(())
}
