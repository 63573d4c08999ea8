//! Recording HID output for tests.
//!
//! # Why a mock output?
//!
//! The real backend writes USB reports to a gadget device that only exists on
//! a board plugged into a host.  The `MockHidOutput` records every primitive
//! call instead, and its companion [`MockDelay`] records every wait **into
//! the same log**, so a test can assert on the exact interleaving of key
//! events and pauses.
//!
//! # Usage in tests
//!
//! ```ignore
//! let output = MockHidOutput::new();
//! let delay = output.delay();
//! let mut engine = InjectionEngine::new(output.clone(), delay);
//!
//! engine.type_text("A", InjectionMode::ScanCode, &PacingConfig::immediate(), false);
//!
//! assert_eq!(output.keystrokes(), vec![vec![HidKeyCode::ShiftLeft, HidKeyCode::KeyA]]);
//! ```
//!
//! Clones of a `MockHidOutput` share one log, so the test keeps a clone while
//! the engine owns the other.

use std::sync::{Arc, Mutex};

use ghostkey_core::HidKeyCode;

use crate::application::hid_output::{Delay, HidOutput};

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HidEvent {
    Press(HidKeyCode),
    ReleaseAll,
    WriteChar(char),
    WriteLine(String),
    Delay(u32),
}

type EventLog = Arc<Mutex<Vec<HidEvent>>>;

/// A HID output that records calls instead of sending reports.
#[derive(Debug, Clone, Default)]
pub struct MockHidOutput {
    log: EventLog,
}

/// A delay that records waits into its [`MockHidOutput`]'s log and returns
/// immediately.
#[derive(Debug, Clone)]
pub struct MockDelay {
    log: EventLog,
}

impl MockHidOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a delay that records into this output's log.
    pub fn delay(&self) -> MockDelay {
        MockDelay {
            log: Arc::clone(&self.log),
        }
    }

    fn record(&self, event: HidEvent) {
        self.log.lock().unwrap().push(event);
    }

    /// Snapshot of every recorded call, in order.
    pub fn events(&self) -> Vec<HidEvent> {
        self.log.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.log.lock().unwrap().clear();
    }

    /// Keys held together, one entry per completed press…release-all cycle.
    /// Presses not yet released are not included.
    pub fn keystrokes(&self) -> Vec<Vec<HidKeyCode>> {
        let mut strokes = Vec::new();
        let mut held = Vec::new();
        for event in self.log.lock().unwrap().iter() {
            match event {
                HidEvent::Press(key) => held.push(*key),
                HidEvent::ReleaseAll if !held.is_empty() => {
                    strokes.push(std::mem::take(&mut held));
                }
                _ => {}
            }
        }
        strokes
    }

    /// Text passed to `write_char` and `write_line` (lines end with `'\n'`).
    pub fn written(&self) -> String {
        let mut text = String::new();
        for event in self.log.lock().unwrap().iter() {
            match event {
                HidEvent::WriteChar(c) => text.push(*c),
                HidEvent::WriteLine(line) => {
                    text.push_str(line);
                    text.push('\n');
                }
                _ => {}
            }
        }
        text
    }

    /// Sum of all recorded waits.
    pub fn total_delay_ms(&self) -> u64 {
        self.log
            .lock()
            .unwrap()
            .iter()
            .map(|event| match event {
                HidEvent::Delay(ms) => u64::from(*ms),
                _ => 0,
            })
            .sum()
    }
}

impl HidOutput for MockHidOutput {
    fn press_key(&mut self, key: HidKeyCode) {
        self.record(HidEvent::Press(key));
    }

    fn release_all_keys(&mut self) {
        self.record(HidEvent::ReleaseAll);
    }

    fn write_char(&mut self, c: char) {
        self.record(HidEvent::WriteChar(c));
    }

    fn write_line(&mut self, line: &str) {
        self.record(HidEvent::WriteLine(line.to_string()));
    }
}

impl Delay for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.log.lock().unwrap().push(HidEvent::Delay(ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_and_delay_share_one_ordered_log() {
        // Arrange
        let mut output = MockHidOutput::new();
        let mut delay = output.delay();

        // Act
        output.press_key(HidKeyCode::KeyA);
        delay.delay_ms(5);
        output.release_all_keys();

        // Assert
        assert_eq!(
            output.events(),
            vec![
                HidEvent::Press(HidKeyCode::KeyA),
                HidEvent::Delay(5),
                HidEvent::ReleaseAll,
            ]
        );
    }

    #[test]
    fn test_clones_observe_the_same_calls() {
        let observer = MockHidOutput::new();
        let mut writer = observer.clone();

        writer.write_line("dir");

        assert_eq!(observer.written(), "dir\n");
    }

    #[test]
    fn test_keystrokes_ignores_unreleased_presses_and_empty_releases() {
        let mut output = MockHidOutput::new();
        output.release_all_keys();
        output.press_key(HidKeyCode::KeyB);
        output.release_all_keys();
        output.press_key(HidKeyCode::KeyC);

        assert_eq!(output.keystrokes(), vec![vec![HidKeyCode::KeyB]]);
    }

    #[test]
    fn test_clear_empties_log() {
        let mut output = MockHidOutput::new();
        output.write_char('x');
        output.clear();
        assert!(output.events().is_empty());
        assert_eq!(output.total_delay_ms(), 0);
    }
}
