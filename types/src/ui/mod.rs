//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod focus;
mod input;
mod live_region;
mod status;

pub use focus::FocusTarget;
pub use input::DraftInput;
pub use live_region::{Announcement, LiveRegion};
pub use status::{StatusLine, StatusTone};

/// UI configuration options derived from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}
