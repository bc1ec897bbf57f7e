//! Resize and interrupt requests, observed once per frame
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// Flags the render loop polls at the top of each frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopSignals {
    running: bool,
    resize_pending: bool,
}

impl Default for LoopSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopSignals {
    /// A pending resize makes the first frame size the buffers
    pub fn new() -> Self {
        Self {
            running: true,
            resize_pending: true,
        }
    }

    pub fn should_continue(&self) -> bool {
        self.running
    }

    /// Whether a resize was requested since the last call
    pub fn take_resize(&mut self) -> bool {
        std::mem::take(&mut self.resize_pending)
    }

    pub fn request_stop(&mut self) {
        self.running = false;
    }

    pub fn request_resize(&mut self) {
        self.resize_pending = true;
    }

    /// Update the flags from one terminal event
    pub fn observe(&mut self, event: &Event) {
        match event {
            Event::Resize(..) => self.request_resize(),
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    self.request_stop()
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.request_stop(),
                _ => {}
            },
            _ => {}
        }
    }

    /// Drain pending terminal events without blocking
    pub fn poll(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            self.observe(&event::read()?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_initial_resize() {
        let mut signals = LoopSignals::new();
        assert!(signals.should_continue());
        assert!(signals.take_resize());
        assert!(!signals.take_resize());
    }

    #[test]
    fn test_resize_event() {
        let mut signals = LoopSignals::new();
        signals.take_resize();
        signals.observe(&Event::Resize(120, 40));
        assert!(signals.take_resize());
        assert!(signals.should_continue());
    }

    #[test]
    fn test_interrupt_keys() {
        for event in [
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            key(KeyCode::Char('q'), KeyModifiers::NONE),
            key(KeyCode::Esc, KeyModifiers::NONE),
        ] {
            let mut signals = LoopSignals::new();
            signals.observe(&event);
            assert!(!signals.should_continue(), "{event:?}");
        }
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut signals = LoopSignals::new();
        signals.observe(&key(KeyCode::Char('c'), KeyModifiers::NONE));
        signals.observe(&key(KeyCode::Char('x'), KeyModifiers::CONTROL));
        signals.observe(&Event::FocusLost);
        assert!(signals.should_continue());
    }

    #[test]
    fn test_key_release_ignored() {
        let mut signals = LoopSignals::new();
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        signals.observe(&Event::Key(release));
        assert!(signals.should_continue());
    }
}
