use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event as CrosstermEvent},
    terminal,
};

/// Keyboard listener attached to the terminal.
///
/// Attaching switches the terminal to raw mode so arrow keys arrive as key
/// events; detaching (or dropping the listener) restores it. The host owns
/// the listener for as long as navigation should be active.
pub struct KeyListener {
    attached: bool,
}

impl KeyListener {
    pub fn attach() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        log::debug!("[listener] attached");
        Ok(Self { attached: true })
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Wait for input. `None` blocks until at least one event arrives.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();
        if !self.attached {
            return Ok(events);
        }

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                // Block until event
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    pub fn detach(&mut self) -> io::Result<()> {
        if !self.attached {
            return Ok(());
        }
        self.attached = false;
        terminal::disable_raw_mode()?;
        log::debug!("[listener] detached");
        Ok(())
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        let _ = self.detach();
    }
}
