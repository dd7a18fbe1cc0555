//! Contact form flow driven through key events.

use crossterm::event::{KeyCode, KeyModifiers};
use skillscout_engine::{
    ContactPhase, FIX_ERRORS_STATUS, FieldError, FocusTarget, SENT_STATUS, StatusTone,
};

use crate::common::{
    FAST_DELAY, RecordingLauncher, SEND_DELAY, app, fast_app, paste, press, press_with, settle,
    type_text,
};

fn focus_email(app: &mut skillscout_engine::App) {
    app.set_focus(FocusTarget::Email);
}

#[tokio::test(start_paused = true)]
async fn filled_form_sends_and_resets() {
    let launcher = RecordingLauncher::default();
    let mut app = app();
    focus_email(&mut app);
    type_text(&mut app, &launcher, "learner@example.com");
    press(&mut app, &launcher, KeyCode::Tab);
    type_text(&mut app, &launcher, "Please add Rust resources!");
    press(&mut app, &launcher, KeyCode::Tab);
    assert_eq!(app.focus(), FocusTarget::Submit);
    press(&mut app, &launcher, KeyCode::Enter);

    assert_eq!(app.contact_phase(), ContactPhase::Sending);
    assert!(!app.view().submit().enabled);
    assert_eq!(app.view().submit().label, "Sending...");

    settle(&mut app, SEND_DELAY).await;
    assert_eq!(app.contact_phase(), ContactPhase::Sent);
    assert_eq!(app.view().contact_status().text(), SENT_STATUS);
    assert_eq!(app.view().contact_status().tone(), StatusTone::Success);
    assert!(app.email_input().is_empty());
    assert!(app.message_input().is_empty());
    assert_eq!(app.view().submit().label, "Send Message");
}

#[tokio::test(start_paused = true)]
async fn ctrl_s_submits_from_the_message_field() {
    let launcher = RecordingLauncher::default();
    let mut app = fast_app();
    focus_email(&mut app);
    type_text(&mut app, &launcher, "a@b.co");
    press(&mut app, &launcher, KeyCode::Tab);
    type_text(&mut app, &launcher, "hello");
    press_with(&mut app, &launcher, KeyCode::Char('s'), KeyModifiers::CONTROL);

    assert_eq!(app.contact_phase(), ContactPhase::Sending);
    settle(&mut app, FAST_DELAY).await;
    assert_eq!(app.contact_phase(), ContactPhase::Sent);
}

#[tokio::test(start_paused = true)]
async fn enter_in_message_adds_newlines() {
    let launcher = RecordingLauncher::default();
    let mut app = app();
    app.set_focus(FocusTarget::Message);
    type_text(&mut app, &launcher, "one");
    press(&mut app, &launcher, KeyCode::Enter);
    type_text(&mut app, &launcher, "two");
    press_with(&mut app, &launcher, KeyCode::Enter, KeyModifiers::SHIFT);
    type_text(&mut app, &launcher, "three");

    assert_eq!(app.message_input().text(), "one\ntwo\nthree");
    assert_eq!(app.contact_phase(), ContactPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn empty_submit_shows_both_errors() {
    let launcher = RecordingLauncher::default();
    let mut app = app();
    app.set_focus(FocusTarget::Submit);
    press(&mut app, &launcher, KeyCode::Enter);

    assert_eq!(app.contact_phase(), ContactPhase::ErrorShown);
    assert_eq!(app.view().email_error(), Some(FieldError::EmailRequired));
    assert_eq!(app.view().message_error(), Some(FieldError::MessageEmpty));
    assert_eq!(app.view().contact_status().text(), FIX_ERRORS_STATUS);
}

#[tokio::test(start_paused = true)]
async fn whitespace_only_fields_are_empty() {
    let launcher = RecordingLauncher::default();
    let mut app = app();
    focus_email(&mut app);
    type_text(&mut app, &launcher, "   ");
    press(&mut app, &launcher, KeyCode::Tab);
    paste(&mut app, &launcher, "\n\n  \n");
    press_with(&mut app, &launcher, KeyCode::Char('s'), KeyModifiers::CONTROL);

    assert_eq!(app.view().email_error(), Some(FieldError::EmailRequired));
    assert_eq!(app.view().message_error(), Some(FieldError::MessageEmpty));
}

#[tokio::test(start_paused = true)]
async fn bad_email_keeps_input_for_correction() {
    let launcher = RecordingLauncher::default();
    let mut app = fast_app();
    focus_email(&mut app);
    type_text(&mut app, &launcher, "learner@example");
    press(&mut app, &launcher, KeyCode::Tab);
    type_text(&mut app, &launcher, "hi");
    press_with(&mut app, &launcher, KeyCode::Char('s'), KeyModifiers::CONTROL);

    assert_eq!(app.view().email_error(), Some(FieldError::EmailInvalid));
    assert_eq!(app.view().message_error(), None);
    assert_eq!(app.email_input().text(), "learner@example");

    focus_email(&mut app);
    press(&mut app, &launcher, KeyCode::End);
    type_text(&mut app, &launcher, ".org");
    press(&mut app, &launcher, KeyCode::Enter);
    assert_eq!(app.contact_phase(), ContactPhase::Sending);
    assert_eq!(app.view().email_error(), None);
}

#[tokio::test(start_paused = true)]
async fn repeated_submit_while_sending_is_ignored() {
    let launcher = RecordingLauncher::default();
    let mut app = app();
    focus_email(&mut app);
    type_text(&mut app, &launcher, "x@y.io");
    press(&mut app, &launcher, KeyCode::Tab);
    type_text(&mut app, &launcher, "msg");
    for _ in 0..3 {
        press_with(&mut app, &launcher, KeyCode::Char('s'), KeyModifiers::CONTROL);
    }
    assert_eq!(app.contact_phase(), ContactPhase::Sending);

    settle(&mut app, SEND_DELAY).await;
    assert_eq!(app.contact_phase(), ContactPhase::Sent);
    assert_eq!(app.view().contact_status().text(), SENT_STATUS);
}
