//! Search and contact state machines.
//!
//! Search: `Idle -> Loading -> (Populated | Empty)`.
//! Contact: `Idle -> (ErrorShown | Sending -> Sent)`; validation itself is
//! synchronous, so it never appears as a resting state.

use skillscout_core::ContactSubmission;
use skillscout_types::ValidationResult;

use crate::deferred::DeferredTask;

#[derive(Debug, Default)]
pub(crate) enum SearchState {
    #[default]
    Idle,
    /// Existence of the task proves a lookup is pending.
    Loading { skill: String, task: DeferredTask },
    Populated { skill: String },
    Empty { skill: String },
}

impl SearchState {
    pub(crate) fn phase(&self) -> SearchPhase {
        match self {
            SearchState::Idle => SearchPhase::Idle,
            SearchState::Loading { .. } => SearchPhase::Loading,
            SearchState::Populated { .. } => SearchPhase::Populated,
            SearchState::Empty { .. } => SearchPhase::Empty,
        }
    }

    pub(crate) fn skill(&self) -> Option<&str> {
        match self {
            SearchState::Idle => None,
            SearchState::Loading { skill, .. }
            | SearchState::Populated { skill }
            | SearchState::Empty { skill } => Some(skill),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) enum ContactState {
    #[default]
    Idle,
    ErrorShown(ValidationResult),
    Sending {
        submission: ContactSubmission,
        task: DeferredTask,
    },
    Sent,
}

impl ContactState {
    pub(crate) fn phase(&self) -> ContactPhase {
        match self {
            ContactState::Idle => ContactPhase::Idle,
            ContactState::ErrorShown(_) => ContactPhase::ErrorShown,
            ContactState::Sending { .. } => ContactPhase::Sending,
            ContactState::Sent => ContactPhase::Sent,
        }
    }
}

/// Observable search phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Loading,
    Populated,
    Empty,
}

/// Observable contact form phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    Idle,
    ErrorShown,
    Sending,
    Sent,
}
