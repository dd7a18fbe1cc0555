//! Search flow driven through key events.

use crossterm::event::{KeyCode, KeyModifiers};
use skillscout_engine::{EMPTY_SKILL_PROMPT, FocusTarget, SearchPhase, StatusTone};

use crate::common::{
    FAST_DELAY, RecordingLauncher, SEARCH_DELAY, app, fast_app, paste, press, press_with, settle,
    type_text,
};

#[tokio::test(start_paused = true)]
async fn typing_and_enter_runs_a_search() {
    let launcher = RecordingLauncher::default();
    let mut app = app();
    type_text(&mut app, &launcher, "web development");
    press(&mut app, &launcher, KeyCode::Enter);

    assert_eq!(app.search_phase(), SearchPhase::Loading);
    settle(&mut app, SEARCH_DELAY).await;

    assert_eq!(app.search_phase(), SearchPhase::Populated);
    assert_eq!(app.view().cards().len(), 3);
    assert_eq!(app.focus(), FocusTarget::Card(0));
}

#[tokio::test(start_paused = true)]
async fn search_button_triggers_too() {
    let launcher = RecordingLauncher::default();
    let mut app = fast_app();
    type_text(&mut app, &launcher, "data science");
    press(&mut app, &launcher, KeyCode::Tab);
    assert_eq!(app.focus(), FocusTarget::SearchButton);
    press(&mut app, &launcher, KeyCode::Char(' '));

    settle(&mut app, FAST_DELAY).await;
    assert_eq!(app.view().cards().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn enter_with_empty_input_prompts() {
    let launcher = RecordingLauncher::default();
    let mut app = app();
    type_text(&mut app, &launcher, "   ");
    press(&mut app, &launcher, KeyCode::Enter);

    assert_eq!(app.search_phase(), SearchPhase::Idle);
    assert_eq!(app.view().results_message(), Some(EMPTY_SKILL_PROMPT));
}

#[tokio::test(start_paused = true)]
async fn q_is_text_inside_fields() {
    let launcher = RecordingLauncher::default();
    let mut app = app();
    let quit = press(&mut app, &launcher, KeyCode::Char('q'));
    assert!(!quit);
    assert_eq!(app.skill_input().text(), "q");
}

#[tokio::test(start_paused = true)]
async fn ctrl_c_quits_from_anywhere() {
    let launcher = RecordingLauncher::default();
    let mut app = app();
    assert!(press_with(
        &mut app,
        &launcher,
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    ));
    assert!(app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn cards_open_links_through_the_launcher() {
    let launcher = RecordingLauncher::default();
    let mut app = fast_app();
    type_text(&mut app, &launcher, "Web Development");
    press(&mut app, &launcher, KeyCode::Enter);
    settle(&mut app, FAST_DELAY).await;

    press(&mut app, &launcher, KeyCode::Enter);
    press(&mut app, &launcher, KeyCode::Down);
    press_with(&mut app, &launcher, KeyCode::Char('o'), KeyModifiers::CONTROL);

    assert_eq!(
        launcher.opened(),
        [
            "https://www.freecodecamp.org/learn",
            "https://www.theodinproject.com/",
        ]
    );
    let note = app.status_note().expect("note");
    assert_eq!(note.tone(), StatusTone::Neutral);
    assert!(note.text().contains("theodinproject"));
}

#[tokio::test(start_paused = true)]
async fn launcher_failure_is_reported() {
    let launcher = RecordingLauncher::failing();
    let mut app = fast_app();
    type_text(&mut app, &launcher, "rust");
    press(&mut app, &launcher, KeyCode::Enter);
    settle(&mut app, FAST_DELAY).await;

    press(&mut app, &launcher, KeyCode::Enter);
    let note = app.status_note().expect("note");
    assert_eq!(note.tone(), StatusTone::Error);
    assert!(note.text().contains("no browser available"));

    press(&mut app, &launcher, KeyCode::Esc);
    assert!(app.status_note().is_none());
}

#[tokio::test(start_paused = true)]
async fn tab_walks_cards_then_contact_form() {
    let launcher = RecordingLauncher::default();
    let mut app = fast_app();
    type_text(&mut app, &launcher, "machine learning");
    press(&mut app, &launcher, KeyCode::Enter);
    settle(&mut app, FAST_DELAY).await;

    let mut seen = vec![app.focus()];
    for _ in 0..6 {
        press(&mut app, &launcher, KeyCode::Tab);
        seen.push(app.focus());
    }
    assert_eq!(
        seen,
        [
            FocusTarget::Card(0),
            FocusTarget::Card(1),
            FocusTarget::Card(2),
            FocusTarget::Email,
            FocusTarget::Message,
            FocusTarget::Submit,
            FocusTarget::SkillInput,
        ]
    );

    press(&mut app, &launcher, KeyCode::BackTab);
    assert_eq!(app.focus(), FocusTarget::Submit);
}

#[tokio::test(start_paused = true)]
async fn search_completing_mid_typing_never_quits_or_opens_links() {
    let launcher = RecordingLauncher::default();
    let mut app = app();
    type_text(&mut app, &launcher, "web development");
    press(&mut app, &launcher, KeyCode::Enter);
    app.set_focus(FocusTarget::Email);
    type_text(&mut app, &launcher, "jo");

    settle(&mut app, SEARCH_DELAY).await;
    assert_eq!(app.focus(), FocusTarget::Card(0));

    for c in "qvojk/ ".chars() {
        assert!(!press(&mut app, &launcher, KeyCode::Char(c)));
    }
    assert!(!app.should_quit());
    assert!(launcher.opened().is_empty());
    assert_eq!(app.focus(), FocusTarget::Card(0));
    assert_eq!(app.email_input().text(), "jo");
    assert_eq!(app.search_phase(), SearchPhase::Populated);
}

#[tokio::test(start_paused = true)]
async fn arrows_move_between_cards() {
    let launcher = RecordingLauncher::default();
    let mut app = fast_app();
    type_text(&mut app, &launcher, "web development");
    press(&mut app, &launcher, KeyCode::Enter);
    settle(&mut app, FAST_DELAY).await;

    press(&mut app, &launcher, KeyCode::Down);
    press(&mut app, &launcher, KeyCode::Down);
    assert_eq!(app.focus(), FocusTarget::Card(2));
    press(&mut app, &launcher, KeyCode::Up);
    assert_eq!(app.focus(), FocusTarget::Card(1));
}

#[tokio::test(start_paused = true)]
async fn search_button_restarts_a_loading_search() {
    let launcher = RecordingLauncher::default();
    let mut app = fast_app();
    type_text(&mut app, &launcher, "rust");
    press(&mut app, &launcher, KeyCode::Enter);
    assert_eq!(app.search_phase(), SearchPhase::Loading);

    app.set_focus(FocusTarget::SkillInput);
    press_with(&mut app, &launcher, KeyCode::Char('u'), KeyModifiers::CONTROL);
    type_text(&mut app, &launcher, "data science");
    press(&mut app, &launcher, KeyCode::Tab);
    press(&mut app, &launcher, KeyCode::Char(' '));
    settle(&mut app, FAST_DELAY).await;

    assert_eq!(app.searched_skill(), Some("data science"));
    assert_eq!(app.view().cards().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn pasted_skill_is_sanitized() {
    let launcher = RecordingLauncher::default();
    let mut app = fast_app();
    paste(&mut app, &launcher, "\x1b]0;title\x07Data\tScience\r\n");
    assert_eq!(app.skill_input().text(), "Data Science ");

    press(&mut app, &launcher, KeyCode::Enter);
    settle(&mut app, FAST_DELAY).await;
    assert_eq!(
        app.view().heading(),
        "Top Free Resources for \"Data Science\""
    );
    assert_eq!(app.view().cards().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn editing_keys_work_in_the_skill_field() {
    let launcher = RecordingLauncher::default();
    let mut app = app();
    type_text(&mut app, &launcher, "web dev");
    press_with(&mut app, &launcher, KeyCode::Char('w'), KeyModifiers::CONTROL);
    assert_eq!(app.skill_input().text(), "web ");
    press(&mut app, &launcher, KeyCode::Backspace);
    press(&mut app, &launcher, KeyCode::Home);
    type_text(&mut app, &launcher, ">");
    assert_eq!(app.skill_input().text(), ">web");
    press_with(&mut app, &launcher, KeyCode::Char('u'), KeyModifiers::CONTROL);
    assert!(app.skill_input().is_empty());
}
