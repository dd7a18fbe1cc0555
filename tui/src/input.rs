//! Input handling for the SkillScout TUI.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tracing::debug;

use skillscout_engine::{App, FocusTarget, OutboundLink};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// Opens outbound links.
pub trait LinkLauncher {
    fn launch(&self, link: &OutboundLink) -> io::Result<()>;
}

/// Hands links to the desktop's default browser.
///
/// The browser runs as a separate process: the page gets a fresh context with
/// no handle back to us and no referrer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl LinkLauncher for SystemBrowser {
    fn launch(&self, link: &OutboundLink) -> io::Result<()> {
        open::that_detached(link.url)
    }
}

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(&stop2, &tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a blocked send in the input thread returns.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: &AtomicBool, tx: &mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping events.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending terminal events into the app. Returns `true` when the app
/// should quit.
pub fn handle_events(
    app: &mut App,
    input: &mut InputPump,
    launcher: &impl LinkLauncher,
) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, ev, launcher) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Apply one terminal event. Returns `true` when the app should quit.
pub fn apply_event(app: &mut App, event: Event, launcher: &impl LinkLauncher) -> bool {
    match event {
        Event::Key(key) => {
            // Handle press + repeat events (ignore releases)
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }
            handle_key(app, key, launcher);
        }
        Event::Paste(text) => {
            if let Some(token) = app.field_token() {
                app.field_editor(token).enter_text(&text);
            }
        }
        _ => {}
    }
    app.should_quit()
}

fn handle_key(app: &mut App, key: KeyEvent, launcher: &impl LinkLauncher) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keys first.
    match key.code {
        KeyCode::Char('c') if ctrl => {
            app.request_quit();
            return;
        }
        KeyCode::Char('s') if ctrl => {
            if app.focus().is_contact_field() {
                app.submit_contact();
            }
            return;
        }
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        KeyCode::Esc => {
            app.clear_status_note();
            return;
        }
        KeyCode::Enter => {
            // Shift/Alt+Enter always means a newline in the message field.
            if app.focus() == FocusTarget::Message
                && key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT)
            {
                if let Some(token) = app.field_token() {
                    app.field_editor(token).enter_newline();
                }
                return;
            }
            if let Some(link) = app.activate_focused() {
                open_link(app, &link, launcher);
            }
            return;
        }
        _ => {}
    }

    if app.focus().is_text_field() {
        handle_text_key(app, key);
    } else {
        handle_control_key(app, key, launcher);
    }
}

fn handle_text_key(app: &mut App, key: KeyEvent) {
    let Some(token) = app.field_token() else {
        return;
    };
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let mut editor = app.field_editor(token);
    match key.code {
        KeyCode::Char('w') if ctrl => editor.delete_word_backwards(),
        KeyCode::Char('u') if ctrl => editor.clear(),
        KeyCode::Char('a') if ctrl => editor.move_cursor_home(),
        KeyCode::Char('e') if ctrl => editor.move_cursor_end(),
        KeyCode::Char(_) if ctrl => {}
        KeyCode::Char(c) => editor.enter_char(c),
        KeyCode::Backspace => editor.delete_char(),
        KeyCode::Delete => editor.delete_char_forward(),
        KeyCode::Left => editor.move_cursor_left(),
        KeyCode::Right => editor.move_cursor_right(),
        KeyCode::Home => editor.move_cursor_home(),
        KeyCode::End => editor.move_cursor_end(),
        _ => {}
    }
}

fn handle_control_key(app: &mut App, key: KeyEvent, launcher: &impl LinkLauncher) {
    // Focus can jump to a card when a search completes, so plain letters are
    // never commands here: a keystroke meant for a field must stay harmless.
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char(' ') if !ctrl => {
            if matches!(app.focus(), FocusTarget::SearchButton | FocusTarget::Submit) {
                app.activate_focused();
            }
        }
        KeyCode::Char('o') if ctrl => {
            if let Some(link) = app.focused_visit_link() {
                open_link(app, &link, launcher);
            }
        }
        KeyCode::Down => {
            if matches!(app.focus(), FocusTarget::Card(_)) {
                app.focus_next();
            }
        }
        KeyCode::Up => {
            if matches!(app.focus(), FocusTarget::Card(_)) {
                app.focus_prev();
            }
        }
        _ => {}
    }
}

fn open_link(app: &mut App, link: &OutboundLink, launcher: &impl LinkLauncher) {
    debug!(url = link.url, rel = %link.policy.rel(), "Opening link");
    let result = launcher.launch(link).map_err(|err| err.to_string());
    app.note_link_opened(link, result);
}
