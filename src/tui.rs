use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Owns the terminal modes the game switches on. Dropping it puts the
/// terminal back, so early returns and unwinding panics restore it too.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
    active: bool,
}

impl TerminalGuard<Stdout> {
    /// Raw mode plus the alternate screen on stdout.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // Built before the screen switch so a failure there still leaves raw mode.
        let mut guard = Self {
            out: io::stdout(),
            raw_mode: true,
            active: true,
        };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> TerminalGuard<W> {
    /// Alternate screen only, on any writer.
    pub fn screen_only(out: W) -> io::Result<Self> {
        let mut guard = Self {
            out,
            raw_mode: false,
            active: true,
        };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }

    /// Idempotent; errors are ignored since there is nothing left to report
    /// them to.
    pub fn restore(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if self.raw_mode {
            let _ = disable_raw_mode();
        }
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Restores the terminal before the panic message is printed, so the message
/// lands on the normal screen instead of vanishing with the alternate one.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        previous(info);
    }));
}
