//! The interaction controller.

use std::mem;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use skillscout_config::{SkillScoutConfig, Timings};
use skillscout_core::{resolve_detailed, validate_submission};
use skillscout_types::ValidationResult;
use skillscout_types::ui::{DraftInput, FocusTarget, StatusLine, StatusTone, UiOptions};

use crate::deferred::{DeferredTask, TaskPoll};
use crate::state::{ContactPhase, ContactState, SearchPhase, SearchState};
use crate::view::{NEUTRAL_HEADING, OutboundLink, PageView, Presenter, SENDING_LABEL, SUBMIT_LABEL};

pub const EMPTY_SKILL_PROMPT: &str = "Please enter a skill to search.";
pub const FIX_ERRORS_STATUS: &str = "Please fix the errors above and try again.";
pub const SENT_STATUS: &str = "Thank you! Your message has been sent successfully.";

const UI_TICK_INTERVAL: Duration = Duration::from_millis(100);

#[must_use]
pub fn loading_message(skill: &str) -> String {
    format!("Loading top free resources for \"{skill}\"...")
}

/// Startup options for [`App`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub ui: UiOptions,
    pub timings: Timings,
}

impl AppOptions {
    #[must_use]
    pub fn from_config(config: Option<&SkillScoutConfig>) -> Self {
        config.map_or_else(Self::default, |config| Self {
            ui: config.ui_options(),
            timings: config.timings(),
        })
    }
}

/// Owns every piece of transient UI state and mutates it only in response to
/// user events or timer completions.
#[derive(Debug)]
pub struct App {
    pub(crate) skill_input: DraftInput,
    pub(crate) email: DraftInput,
    pub(crate) message: DraftInput,
    pub(crate) focus: FocusTarget,
    view: PageView,
    search: SearchState,
    contact: ContactState,
    options: AppOptions,
    status_note: Option<StatusLine>,
    tick: usize,
    last_ui_tick: Instant,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(options: AppOptions) -> Self {
        Self {
            skill_input: DraftInput::default(),
            email: DraftInput::default(),
            message: DraftInput::default(),
            focus: FocusTarget::SkillInput,
            view: PageView::default(),
            search: SearchState::Idle,
            contact: ContactState::Idle,
            options,
            status_note: None,
            tick: 0,
            last_ui_tick: Instant::now(),
            should_quit: false,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view(&self) -> &PageView {
        &self.view
    }

    pub fn skill_input(&self) -> &DraftInput {
        &self.skill_input
    }

    pub fn email_input(&self) -> &DraftInput {
        &self.email
    }

    pub fn message_input(&self) -> &DraftInput {
        &self.message
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn search_phase(&self) -> SearchPhase {
        self.search.phase()
    }

    /// Skill of the pending or last completed search.
    pub fn searched_skill(&self) -> Option<&str> {
        self.search.skill()
    }

    pub fn contact_phase(&self) -> ContactPhase {
        self.contact.phase()
    }

    /// Errors from the last rejected submit, while they are shown.
    pub fn last_validation(&self) -> Option<&ValidationResult> {
        match &self.contact {
            ContactState::ErrorShown(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.search, SearchState::Loading { .. })
            || matches!(self.contact, ContactState::Sending { .. })
    }

    pub fn ui_options(&self) -> UiOptions {
        self.options.ui
    }

    pub fn timings(&self) -> Timings {
        self.options.timings
    }

    pub fn tick_count(&self) -> usize {
        self.tick
    }

    /// Transient message for the status bar (link launches and the like).
    pub fn status_note(&self) -> Option<&StatusLine> {
        self.status_note.as_ref()
    }

    // ------------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------------

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next(self.view.cards().len());
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev(self.view.cards().len());
    }

    pub fn set_focus(&mut self, target: FocusTarget) {
        self.focus = target.clamp_to(self.view.cards().len());
    }

    /// Enter on the focused control.
    ///
    /// Returns the link to open when a card is focused; opening it is left to
    /// the caller.
    pub fn activate_focused(&mut self) -> Option<OutboundLink> {
        match self.focus {
            FocusTarget::SkillInput | FocusTarget::SearchButton => {
                self.trigger_search();
                None
            }
            FocusTarget::Card(index) => self
                .view
                .cards()
                .get(index)
                .map(|card| card.title_link.clone()),
            FocusTarget::Email | FocusTarget::Submit => {
                self.submit_contact();
                None
            }
            FocusTarget::Message => {
                self.message.enter_char('\n');
                None
            }
        }
    }

    /// The "Visit" link of the focused card.
    pub fn focused_visit_link(&self) -> Option<OutboundLink> {
        match self.focus {
            FocusTarget::Card(index) => self
                .view
                .cards()
                .get(index)
                .map(|card| card.visit_link.clone()),
            _ => None,
        }
    }

    /// Record the outcome of launching a link.
    pub fn note_link_opened(&mut self, link: &OutboundLink, result: Result<(), String>) {
        self.status_note = Some(match result {
            Ok(()) => {
                info!(url = link.url, "Opened link");
                StatusLine::new(format!("Opened {}", link.url), StatusTone::Neutral)
            }
            Err(err) => {
                warn!(url = link.url, error = %err, "Failed to open link");
                StatusLine::new(format!("Could not open {}: {err}", link.url), StatusTone::Error)
            }
        });
    }

    pub fn clear_status_note(&mut self) {
        self.status_note = None;
    }

    // ------------------------------------------------------------------
    // Search flow
    // ------------------------------------------------------------------

    /// Search for the skill in the input, as the Search control does.
    ///
    /// A pending search is cancelled first, so only the latest trigger ever
    /// renders.
    pub fn trigger_search(&mut self) {
        if let SearchState::Loading { skill, task } = mem::take(&mut self.search) {
            debug!(skill = %skill, "Cancelled pending search");
            task.cancel();
        }

        let skill = self.skill_input.text().trim().to_string();
        if skill.is_empty() {
            self.view.show_results_message(EMPTY_SKILL_PROMPT);
            self.view.set_heading(NEUTRAL_HEADING);
            self.view.clear_cards();
            self.focus = FocusTarget::SkillInput;
            return;
        }

        info!(skill = %skill, "Search started");
        self.view.show_results_message(&loading_message(&skill));
        self.view.set_heading("");
        self.view.clear_cards();
        self.focus = self.focus.clamp_to(0);

        let task = DeferredTask::schedule(self.options.timings.search_delay);
        self.search = SearchState::Loading { skill, task };
    }

    fn poll_search(&mut self) {
        match mem::take(&mut self.search) {
            SearchState::Loading { skill, mut task } => match task.poll() {
                TaskPoll::Pending => self.search = SearchState::Loading { skill, task },
                TaskPoll::Done => self.finish_search(skill),
                TaskPoll::Cancelled => {
                    warn!(skill = %skill, "Search timer went away before firing");
                }
            },
            other => self.search = other,
        }
    }

    fn finish_search(&mut self, skill: String) {
        let lookup = resolve_detailed(&skill);
        info!(
            skill = %skill,
            key = %lookup.key,
            matched = lookup.matched,
            count = lookup.resources.len(),
            "Search completed"
        );

        self.view.render_resources(&skill, lookup.resources);
        if let Some(target) = self.view.take_focus_request() {
            self.set_focus(target);
        }
        if let Some(announcement) = self.view.live_region().latest() {
            debug!(text = %announcement.text, "Live region update");
        }

        self.search = if lookup.resources.is_empty() {
            SearchState::Empty { skill }
        } else {
            SearchState::Populated { skill }
        };
    }

    // ------------------------------------------------------------------
    // Contact flow
    // ------------------------------------------------------------------

    /// Validate the contact form and, if valid, start the simulated send.
    ///
    /// Ignored while a send is in progress (the submit control is disabled).
    pub fn submit_contact(&mut self) {
        if matches!(self.contact, ContactState::Sending { .. }) {
            debug!("Submit ignored while sending");
            return;
        }

        self.view.clear_field_errors();

        match validate_submission(self.email.text(), self.message.text()) {
            Err(result) => {
                debug!(
                    email_error = ?result.email_error,
                    message_error = ?result.message_error,
                    "Contact form rejected"
                );
                self.view.set_field_errors(&result);
                self.view
                    .set_contact_status(FIX_ERRORS_STATUS, StatusTone::Error);
                self.contact = ContactState::ErrorShown(result);
            }
            Ok(submission) => {
                info!(
                    message_chars = submission.message().chars().count(),
                    "Contact message sending"
                );
                self.view.set_submit_state(false, SENDING_LABEL);
                self.view.set_contact_status("", StatusTone::Neutral);
                let task = DeferredTask::schedule(self.options.timings.send_delay);
                self.contact = ContactState::Sending { submission, task };
            }
        }
    }

    fn poll_contact(&mut self) {
        match mem::take(&mut self.contact) {
            ContactState::Sending {
                submission,
                mut task,
            } => match task.poll() {
                TaskPoll::Pending => self.contact = ContactState::Sending { submission, task },
                TaskPoll::Done => {
                    info!(email_len = submission.email().len(), "Contact message sent");
                    self.finish_send();
                }
                TaskPoll::Cancelled => {
                    warn!("Send timer went away before firing");
                    self.view.set_submit_state(true, SUBMIT_LABEL);
                }
            },
            other => self.contact = other,
        }
    }

    fn finish_send(&mut self) {
        self.view.set_contact_status(SENT_STATUS, StatusTone::Success);
        self.email.clear();
        self.message.clear();
        self.view.set_submit_state(true, SUBMIT_LABEL);
        self.contact = ContactState::Sent;
    }

    // ------------------------------------------------------------------
    // Frame loop
    // ------------------------------------------------------------------

    /// Advance timers and the spinner.
    pub fn tick(&mut self) {
        self.poll_search();
        self.poll_contact();

        let now = Instant::now();
        if now.duration_since(self.last_ui_tick) >= UI_TICK_INTERVAL {
            self.last_ui_tick = now;
            self.tick = self.tick.wrapping_add(1);
        }
    }
}
