//! Shared test utilities and fixtures
//!
//! Drives the app through the same event path the terminal uses.

#![allow(dead_code)]

use std::cell::RefCell;
use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use skillscout_engine::{App, AppOptions, OutboundLink, Timings};
use skillscout_tui::{LinkLauncher, apply_event};

pub const SEARCH_DELAY: Duration = Duration::from_millis(1500);
pub const SEND_DELAY: Duration = Duration::from_millis(2200);
pub const FAST_DELAY: Duration = Duration::from_millis(5);

/// Launcher that records URLs instead of opening a browser.
#[derive(Default)]
pub struct RecordingLauncher {
    pub opened: RefCell<Vec<String>>,
    pub fail: bool,
}

impl RecordingLauncher {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl LinkLauncher for RecordingLauncher {
    fn launch(&self, link: &OutboundLink) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::other("no browser available"));
        }
        self.opened.borrow_mut().push(link.url.to_string());
        Ok(())
    }
}

pub fn app() -> App {
    App::new(AppOptions::default())
}

pub fn fast_app() -> App {
    App::new(AppOptions {
        timings: Timings {
            search_delay: FAST_DELAY,
            send_delay: FAST_DELAY,
        },
        ..AppOptions::default()
    })
}

pub fn press(app: &mut App, launcher: &RecordingLauncher, code: KeyCode) -> bool {
    apply_event(
        app,
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE)),
        launcher,
    )
}

pub fn press_with(
    app: &mut App,
    launcher: &RecordingLauncher,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> bool {
    apply_event(app, Event::Key(KeyEvent::new(code, modifiers)), launcher)
}

pub fn type_text(app: &mut App, launcher: &RecordingLauncher, text: &str) {
    for c in text.chars() {
        press(app, launcher, KeyCode::Char(c));
    }
}

pub fn paste(app: &mut App, launcher: &RecordingLauncher, text: &str) {
    apply_event(app, Event::Paste(text.to_string()), launcher);
}

/// Let the paused clock run past `delay`, then tick the app.
pub async fn settle(app: &mut App, delay: Duration) {
    tokio::time::sleep(delay + Duration::from_millis(1)).await;
    app.tick();
}
