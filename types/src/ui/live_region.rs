//! Announcement queue for the results region.
//!
//! The results area behaves like a polite live region: additions are
//! announced without moving focus. The TUI shows the latest announcement in
//! its status bar; the engine also logs each one.

use std::collections::VecDeque;

const MAX_ANNOUNCEMENTS: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
}

/// Bounded queue of announcements, oldest dropped first.
#[derive(Debug, Clone, Default)]
pub struct LiveRegion {
    announcements: VecDeque<Announcement>,
}

impl LiveRegion {
    pub fn announce(&mut self, text: impl Into<String>) {
        if self.announcements.len() == MAX_ANNOUNCEMENTS {
            self.announcements.pop_front();
        }
        self.announcements.push_back(Announcement { text: text.into() });
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Announcement> {
        self.announcements.back()
    }
}
