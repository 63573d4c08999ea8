//! Blocking delay on the calling thread.

use std::thread;
use std::time::Duration;

use crate::application::hid_output::Delay;

/// Sleeps the current thread.  The whole device is unresponsive for the
/// duration, which is fine for a single-purpose injector.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_thread_delay_blocks_at_least_requested_duration() {
        // Arrange
        let mut delay = ThreadDelay;
        let start = Instant::now();

        // Act
        delay.delay_ms(15);

        // Assert
        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}
