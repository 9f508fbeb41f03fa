// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Caret blink timer
//!
//! The host drives the timer by calling `tick` with the elapsed frame time.
//! Every edit, selection change, or focus gain calls `restart`, which
//! cancels the running cycle and shows the caret again; blur calls `stop`.

use crate::settings;

/// Blink state of a caret
#[derive(Debug, Clone)]
pub struct CaretBlink {
    /// Half-period in seconds
    interval: f64,
    /// Time since the last toggle, in seconds
    elapsed: f64,
    visible: bool,
    running: bool,
}

impl Default for CaretBlink {
    fn default() -> Self {
        Self::new(settings::caret::BLINK_INTERVAL)
    }
}

impl CaretBlink {
    /// A stopped timer; the caret is hidden until `restart`.
    pub fn new(interval: f64) -> Self {
        CaretBlink {
            interval,
            elapsed: 0.0,
            visible: false,
            running: false,
        }
    }

    /// Cancel the current cycle and start over in the visible phase.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.visible = true;
        self.running = true;
    }

    /// Cancel the timer and hide the caret.
    pub fn stop(&mut self) {
        self.elapsed = 0.0;
        self.visible = false;
        self.running = false;
    }

    /// Advance by `delta_time` seconds. Returns true if visibility changed.
    pub fn tick(&mut self, delta_time: f64) -> bool {
        if !self.running || self.interval <= 0.0 {
            return false;
        }
        let before = self.visible;
        self.elapsed += delta_time;
        while self.elapsed >= self.interval {
            self.visible = !self.visible;
            self.elapsed -= self.interval;
        }
        before != self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stopped_and_hidden() {
        let blink = CaretBlink::default();
        assert!(!blink.is_visible());
        assert!(!blink.is_running());
    }

    #[test]
    fn toggles_every_interval() {
        let mut blink = CaretBlink::new(0.5);
        blink.restart();
        assert!(blink.is_visible());

        assert!(!blink.tick(0.25));
        assert!(blink.is_visible());
        assert!(blink.tick(0.25));
        assert!(!blink.is_visible());
        assert!(blink.tick(0.5));
        assert!(blink.is_visible());
    }

    #[test]
    fn restart_resets_phase() {
        let mut blink = CaretBlink::new(0.5);
        blink.restart();
        blink.tick(0.5);
        assert!(!blink.is_visible());

        blink.restart();
        assert!(blink.is_visible());
        // A fresh full interval is needed before the next toggle
        assert!(!blink.tick(0.4));
        assert!(blink.is_visible());
    }

    #[test]
    fn stop_hides_and_freezes() {
        let mut blink = CaretBlink::new(0.5);
        blink.restart();
        blink.stop();
        assert!(!blink.is_visible());
        assert!(!blink.tick(10.0));
        assert!(!blink.is_visible());
    }
}
