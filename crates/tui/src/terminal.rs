//! Entering and leaving the guide's full-screen terminal mode.

use std::io::{self, Stdout, Write};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal the guide draws on.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// A terminal mode switch that failed.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("failed to enter full-screen mode: {0}")]
    Setup(#[source] io::Error),

    #[error("failed to restore the terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Switches to raw mode on the alternate screen and hides the cursor.
///
/// The guide is keyboard driven, so mouse capture stays off.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] if any step fails.
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(TerminalError::Setup)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)?;
    terminal.hide_cursor().map_err(TerminalError::Setup)?;
    Ok(terminal)
}

/// Undoes [`setup_terminal`].
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] if any step fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    leave(terminal.backend_mut()).map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)
}

/// Restores the terminal before the previous panic hook prints anything.
///
/// Call once at startup, after logging is set up and before
/// [`setup_terminal`].
///
/// ```no_run
/// use tvgrid_tui::terminal;
///
/// terminal::install_panic_hook();
/// let mut terminal = terminal::setup_terminal()?;
/// // ...
/// terminal::restore_terminal(&mut terminal)?;
/// # Ok::<(), terminal::TerminalError>(())
/// ```
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = leave(&mut io::stdout());
        previous(info);
    }));
}

fn leave(out: &mut impl Write) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen)
}
