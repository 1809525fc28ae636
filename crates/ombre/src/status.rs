use std::time::Duration;

use bevy::prelude::*;

pub const DEFAULT_STATUS_DURATION: Duration = Duration::from_millis(2000);
pub const DEFAULT_COPIED_MESSAGE: &str = "✅ CSS copied!";

/// Transient status text that clears itself after a fixed duration.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    text: String,
    timer: Timer,
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_DURATION)
    }
}

impl StatusMessage {
    pub fn new(duration: Duration) -> Self {
        let mut timer = Timer::new(duration, TimerMode::Once);
        // starts finished so an empty message never fires a clear
        timer.tick(duration);
        Self {
            text: String::new(),
            timer,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_visible(&self) -> bool {
        !self.text.is_empty()
    }

    /// Replaces the current text and restarts the countdown.
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.timer.reset();
    }

    /// Advances the countdown. Returns `true` on the tick that cleared the text.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.text.is_empty() {
            return false;
        }
        self.timer.tick(delta);
        if self.timer.just_finished() {
            self.text.clear();
            return true;
        }
        false
    }
}
