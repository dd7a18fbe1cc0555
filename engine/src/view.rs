//! Presentation seam and the page state the TUI draws.
//!
//! The controller never formats widgets. It talks to a [`Presenter`], and
//! [`PageView`] is the presenter that records what the page should show.

use skillscout_types::ui::{FocusTarget, LiveRegion, StatusLine, StatusTone};
use skillscout_types::{FieldError, ResourceRecord, ValidationResult};

pub const NEUTRAL_HEADING: &str = "Top Free Resources";
pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

/// Display surface driven by the interaction controller.
pub trait Presenter {
    /// Replace the results region with `resources` for `skill`.
    ///
    /// An empty list shows a "no resources" message instead of cards.
    fn render_resources(&mut self, skill: &str, resources: &[ResourceRecord]);
    fn show_results_message(&mut self, text: &str);
    fn set_heading(&mut self, text: &str);
    fn clear_cards(&mut self);
    fn set_field_errors(&mut self, result: &ValidationResult);
    fn clear_field_errors(&mut self);
    fn set_contact_status(&mut self, text: &str, tone: StatusTone);
    fn set_submit_state(&mut self, enabled: bool, label: &'static str);
}

/// How an outbound link opens.
///
/// Links open in a new browsing context that gets no handle back to the
/// opener and no referrer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkPolicy {
    pub new_context: bool,
    pub noopener: bool,
    pub noreferrer: bool,
}

impl LinkPolicy {
    pub const EXTERNAL: Self = Self {
        new_context: true,
        noopener: true,
        noreferrer: true,
    };

    /// The equivalent `rel` attribute value.
    #[must_use]
    pub fn rel(self) -> String {
        let mut parts = Vec::new();
        if self.noopener {
            parts.push("noopener");
        }
        if self.noreferrer {
            parts.push("noreferrer");
        }
        parts.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundLink {
    pub text: String,
    pub url: &'static str,
    /// Label announced by assistive technology.
    pub accessible_label: String,
    pub policy: LinkPolicy,
}

/// One rendered resource: title link, description, and a "Visit" link to
/// the same URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCard {
    pub title_link: OutboundLink,
    pub description: &'static str,
    pub visit_link: OutboundLink,
}

impl ResourceCard {
    #[must_use]
    pub fn new(record: &ResourceRecord) -> Self {
        Self {
            title_link: OutboundLink {
                text: record.title.to_string(),
                url: record.url,
                accessible_label: record.title.to_string(),
                policy: LinkPolicy::EXTERNAL,
            },
            description: record.description,
            visit_link: OutboundLink {
                text: "Visit".to_string(),
                url: record.url,
                accessible_label: format!("Visit {}", record.title),
                policy: LinkPolicy::EXTERNAL,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: &'static str,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            enabled: true,
            label: SUBMIT_LABEL,
        }
    }
}

/// Everything the page currently shows.
#[derive(Debug, Clone)]
pub struct PageView {
    heading: String,
    results_message: Option<String>,
    cards: Vec<ResourceCard>,
    live_region: LiveRegion,
    email_error: Option<FieldError>,
    message_error: Option<FieldError>,
    contact_status: StatusLine,
    submit: SubmitControl,
    focus_request: Option<FocusTarget>,
}

impl Default for PageView {
    fn default() -> Self {
        Self {
            heading: NEUTRAL_HEADING.to_string(),
            results_message: None,
            cards: Vec::new(),
            live_region: LiveRegion::default(),
            email_error: None,
            message_error: None,
            contact_status: StatusLine::default(),
            submit: SubmitControl::default(),
            focus_request: None,
        }
    }
}

impl PageView {
    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    #[must_use]
    pub fn results_message(&self) -> Option<&str> {
        self.results_message.as_deref()
    }

    #[must_use]
    pub fn cards(&self) -> &[ResourceCard] {
        &self.cards
    }

    #[must_use]
    pub fn live_region(&self) -> &LiveRegion {
        &self.live_region
    }

    #[must_use]
    pub fn email_error(&self) -> Option<FieldError> {
        self.email_error
    }

    #[must_use]
    pub fn message_error(&self) -> Option<FieldError> {
        self.message_error
    }

    #[must_use]
    pub fn contact_status(&self) -> &StatusLine {
        &self.contact_status
    }

    #[must_use]
    pub fn submit(&self) -> &SubmitControl {
        &self.submit
    }

    /// Focus the view asked for since the last call, if any.
    pub fn take_focus_request(&mut self) -> Option<FocusTarget> {
        self.focus_request.take()
    }
}

impl Presenter for PageView {
    fn render_resources(&mut self, skill: &str, resources: &[ResourceRecord]) {
        self.cards.clear();
        self.results_message = None;

        if resources.is_empty() {
            self.results_message = Some(format!(
                "No resources found for \"{skill}\". Please try another skill."
            ));
            self.heading = NEUTRAL_HEADING.to_string();
            self.live_region.announce(format!("No resources for \"{skill}\""));
            return;
        }

        self.heading = format!("{NEUTRAL_HEADING} for \"{skill}\"");
        self.cards.extend(resources.iter().map(ResourceCard::new));

        let noun = if resources.len() == 1 {
            "resource"
        } else {
            "resources"
        };
        self.live_region.announce(format!("{} {noun} for \"{skill}\"", resources.len()));
        self.focus_request = Some(FocusTarget::Card(0));
    }

    fn show_results_message(&mut self, text: &str) {
        self.results_message = Some(text.to_string());
    }

    fn set_heading(&mut self, text: &str) {
        self.heading = text.to_string();
    }

    fn clear_cards(&mut self) {
        self.cards.clear();
    }

    fn set_field_errors(&mut self, result: &ValidationResult) {
        self.email_error = result.email_error;
        self.message_error = result.message_error;
    }

    fn clear_field_errors(&mut self) {
        self.email_error = None;
        self.message_error = None;
    }

    fn set_contact_status(&mut self, text: &str, tone: StatusTone) {
        self.contact_status = StatusLine::new(text, tone);
    }

    fn set_submit_state(&mut self, enabled: bool, label: &'static str) {
        self.submit = SubmitControl { enabled, label };
    }
}
