//! Interaction engine for SkillScout - state machines and page state.
//!
//! This crate owns the [`App`] controller without TUI dependencies. The TUI
//! feeds it events, calls [`App::tick`] every frame, and draws [`PageView`].

mod app;
mod deferred;
mod fields;
mod state;
mod view;

pub use app::{
    App, AppOptions, EMPTY_SKILL_PROMPT, FIX_ERRORS_STATUS, SENT_STATUS, loading_message,
};
pub use deferred::{DeferredTask, TaskPoll};
pub use fields::{FieldEditor, FieldToken};
pub use state::{ContactPhase, SearchPhase};
pub use view::{
    LinkPolicy, NEUTRAL_HEADING, OutboundLink, PageView, Presenter, ResourceCard, SENDING_LABEL,
    SUBMIT_LABEL, SubmitControl,
};

pub use skillscout_config::{SkillScoutConfig, Timings};
pub use skillscout_types::ui::{
    Announcement, DraftInput, FocusTarget, LiveRegion, StatusLine, StatusTone, UiOptions,
};
pub use skillscout_types::{FieldError, ResourceRecord, ValidationResult};
