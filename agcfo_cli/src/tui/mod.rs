//! Interactive worksheet using ratatui (Elm architecture).
//!
//! Three worksheets, one per calculator. Every keystroke that edits a field
//! re-derives that worksheet's result; the results panel shows it, or
//! nothing while a required field is blank.

pub mod keymap;
pub mod state;
pub mod view;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::debug;

use keymap::map_key;
use state::TuiApp;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Tear down the terminal, restoring normal mode.
fn teardown_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the worksheet until the user quits.
pub fn run(examples: bool) -> io::Result<()> {
    let mut terminal = setup_terminal()?;
    let mut app = TuiApp::new(examples);
    let result = event_loop(&mut terminal, &mut app);
    teardown_terminal(&mut terminal)?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| view::render(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind == KeyEventKind::Press {
                    let action = map_key(key);
                    debug!(?action, "key");
                    app.handle_key_action(action);
                }
            }
        }
    }
    Ok(())
}
