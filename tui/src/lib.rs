//! TUI rendering for SkillScout using ratatui.

mod input;
mod theme;

pub use input::{InputPump, LinkLauncher, SystemBrowser, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use skillscout_engine::{
    App, DraftInput, FieldError, FocusTarget, ResourceCard, SearchPhase, StatusTone,
};
use skillscout_types::{MAX_MESSAGE_CHARS, truncate_with_ellipsis};

const APP_TITLE: &str = "SkillScout";
const TAGLINE: &str = "Find top free learning resources for any skill";
const SEARCH_BUTTON_LABEL: &str = "Search";
const CONTACT_TITLE: &str = "Contact Us";
/// Rows per card: title, description, visit link, spacer.
const CARD_ROWS: usize = 4;
const MESSAGE_FIELD_HEIGHT: u16 = 4;
const CONTACT_HEIGHT: u16 = 3 + 1 + MESSAGE_FIELD_HEIGHT + 1 + 1 + 2;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),              // Title
            Constraint::Length(3),              // Search row
            Constraint::Min(CARD_ROWS as u16),  // Results
            Constraint::Length(CONTACT_HEIGHT), // Contact form
            Constraint::Length(1),              // Status bar
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], &palette, &glyphs);
    draw_search_row(frame, app, chunks[1], &palette, &glyphs);
    draw_results(frame, app, chunks[2], &palette, &glyphs);
    draw_contact(frame, app, chunks[3], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[4], &palette, &glyphs);
}

fn draw_title(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {APP_TITLE} "), styles::title(palette)),
        Span::styled(
            format!("{} {TAGLINE}", glyphs.separator),
            Style::default().fg(palette.text_muted),
        ),
    ]));
    frame.render_widget(title, area);
}

fn draw_search_row(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let button_width = (SEARCH_BUTTON_LABEL.width() + 6) as u16;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(button_width)])
        .split(area);

    let field = TextField {
        title: "Skill",
        placeholder: "e.g. data science, machine learning, web development",
        draft: app.skill_input(),
        focused: app.focus() == FocusTarget::SkillInput,
        multiline: false,
    };
    field.render(frame, chunks[0], palette, glyphs);

    let focused = app.focus() == FocusTarget::SearchButton;
    draw_button(frame, chunks[1], SEARCH_BUTTON_LABEL, focused, palette);
}

fn draw_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    focused: bool,
    palette: &Palette,
) {
    // Re-activating while loading replaces the pending search, so the button
    // always reads as enabled.
    let button = Paragraph::new(Line::from(Span::styled(
        format!(" {label} "),
        styles::button(palette, focused, true),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::border(palette, focused)),
    );
    frame.render_widget(button, area);
}

fn draw_results(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let view = app.view();
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::border(
            palette,
            matches!(app.focus(), FocusTarget::Card(_)),
        ));
    if !view.heading().is_empty() {
        block = block.title(Line::from(Span::styled(
            format!(" {} ", view.heading()),
            styles::heading(palette),
        )));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(message) = view.results_message() {
        let text = if app.search_phase() == SearchPhase::Loading {
            let spinner = spinner_frame(app.tick_count(), app.ui_options());
            format!("{spinner} {message}")
        } else {
            message.to_string()
        };
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(palette.text_secondary),
        )));
    }

    let focused_card = match app.focus() {
        FocusTarget::Card(index) => Some(index),
        _ => None,
    };
    let width = inner.width as usize;
    for (index, card) in view.cards().iter().enumerate() {
        lines.extend(card_lines(
            card,
            focused_card == Some(index),
            width,
            palette,
            glyphs,
        ));
    }

    // Keep the focused card in view.
    let height = inner.height as usize;
    let scroll = focused_card.map_or(0, |index| {
        let end = (index + 1) * CARD_ROWS;
        end.saturating_sub(height)
    });

    let body = Paragraph::new(lines).scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(body, inner);
}

fn card_lines(
    card: &ResourceCard,
    focused: bool,
    width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let marker = if focused {
        format!("{} ", glyphs.selected)
    } else {
        "  ".to_string()
    };
    let row_style = if focused {
        Style::default().bg(palette.bg_highlight)
    } else {
        Style::default()
    };
    let indent = "  ";
    let text_width = width.saturating_sub(indent.len());

    let mut title_style = styles::link(palette).add_modifier(Modifier::BOLD);
    if focused {
        title_style = title_style.bg(palette.bg_highlight);
    }

    vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(palette.accent)),
            Span::styled(
                truncate_with_ellipsis(&card.title_link.text, text_width),
                title_style,
            ),
        ])
        .style(row_style),
        Line::from(vec![
            Span::raw(indent),
            Span::styled(
                truncate_with_ellipsis(card.description, text_width),
                Style::default().fg(palette.text_primary),
            ),
        ])
        .style(row_style),
        Line::from(vec![
            Span::raw(indent),
            Span::styled(
                format!("{} {}", card.visit_link.text, glyphs.external),
                styles::key_highlight(palette),
            ),
            Span::raw(" "),
            Span::styled(
                truncate_with_ellipsis(card.visit_link.url, text_width.saturating_sub(10)),
                Style::default().fg(palette.text_muted),
            ),
        ])
        .style(row_style),
        Line::default(),
    ]
}

fn draw_contact(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let focus = app.focus();
    let view = app.view();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::border(palette, focus.is_contact_field()))
        .title(Line::from(Span::styled(
            format!(" {CONTACT_TITLE} "),
            styles::heading(palette),
        )));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Email
            Constraint::Length(1),                    // Email error
            Constraint::Length(MESSAGE_FIELD_HEIGHT), // Message
            Constraint::Length(1),                    // Message error
            Constraint::Length(1),                    // Submit + status
        ])
        .split(inner);

    TextField {
        title: "Email",
        placeholder: "you@example.com",
        draft: app.email_input(),
        focused: focus == FocusTarget::Email,
        multiline: false,
    }
    .render(frame, rows[0], palette, glyphs);
    draw_field_error(frame, rows[1], view.email_error(), palette, glyphs);

    TextField {
        title: "Message",
        placeholder: "How can we help?",
        draft: app.message_input(),
        focused: focus == FocusTarget::Message,
        multiline: true,
    }
    .render(frame, rows[2], palette, glyphs);
    draw_field_error(frame, rows[3], view.message_error(), palette, glyphs);

    let submit = view.submit();
    let submit_focused = focus == FocusTarget::Submit;
    let button_style = styles::button(palette, submit_focused, submit.enabled);
    let marker = if submit_focused { glyphs.selected } else { " " };
    let status = view.contact_status();
    let status_prefix = match status.tone() {
        StatusTone::Error => format!("{} ", glyphs.error),
        StatusTone::Success => format!("{} ", glyphs.success),
        StatusTone::Neutral => String::new(),
    };

    let mut spans = vec![
        Span::styled(format!("{marker} "), Style::default().fg(palette.accent)),
        Span::styled(format!("[ {} ]", submit.label), button_style),
    ];
    if !status.is_empty() {
        spans.push(Span::raw("  "));
        let mut status_style = Style::default().fg(palette.tone(status.tone()));
        if status.tone() != StatusTone::Neutral {
            status_style = status_style.add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(
            format!("{status_prefix}{}", status.text()),
            status_style,
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), rows[4]);
}

fn draw_field_error(
    frame: &mut Frame,
    area: Rect,
    error: Option<FieldError>,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let Some(error) = error else {
        return;
    };
    let line = Line::from(Span::styled(
        format!(" {} {error}", glyphs.error),
        Style::default().fg(palette.error),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// A bordered, editable text box.
struct TextField<'a> {
    title: &'static str,
    placeholder: &'static str,
    draft: &'a DraftInput,
    focused: bool,
    multiline: bool,
}

impl TextField<'_> {
    fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::border(palette, self.focused))
            .title(Line::from(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(if self.focused {
                    palette.accent
                } else {
                    palette.text_secondary
                }),
            )));
        if self.multiline {
            let count = self.draft.text().trim().chars().count();
            let color = if count > MAX_MESSAGE_CHARS {
                palette.error
            } else {
                palette.text_muted
            };
            block = block.title_bottom(
                Line::from(Span::styled(
                    format!(" {count}/{MAX_MESSAGE_CHARS} "),
                    Style::default().fg(color),
                ))
                .alignment(Alignment::Right),
            );
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let prefix = if self.focused {
            format!("{} ", glyphs.prompt)
        } else {
            "  ".to_string()
        };
        let prefix_width = prefix.width() as u16;
        let content_width = inner.width.saturating_sub(prefix_width).max(1) as usize;

        if self.draft.is_empty() && !self.focused {
            let placeholder = Paragraph::new(Line::from(vec![
                Span::raw(prefix),
                Span::styled(self.placeholder, Style::default().fg(palette.text_muted)),
            ]));
            frame.render_widget(placeholder, inner);
            return;
        }

        let text = self.draft.text();
        let before_cursor = self.draft.text_before_cursor();
        let cursor_line_index = before_cursor.matches('\n').count();
        let cursor_line_start = before_cursor.rsplit('\n').next().unwrap_or("");
        let cursor_display_pos = cursor_line_start.width();

        let raw_lines: Vec<&str> = if self.multiline {
            text.split('\n').collect()
        } else {
            vec![text]
        };
        let visible_lines = inner.height.max(1) as usize;
        let start_line = (cursor_line_index + 1).saturating_sub(visible_lines);
        let end_line = (start_line + visible_lines).min(raw_lines.len());

        let mut display_lines = Vec::new();
        let mut horizontal_scroll: u16 = 0;
        for (idx, line) in raw_lines[start_line..end_line].iter().enumerate() {
            let is_cursor_line = start_line + idx == cursor_line_index;
            let mut line_text = (*line).to_string();
            if is_cursor_line && cursor_display_pos >= content_width {
                let (skipped_bytes, skipped_width) =
                    scroll_offset(line, cursor_display_pos - content_width + 1);
                line_text = line[skipped_bytes..].to_string();
                horizontal_scroll = skipped_width;
            }
            let prefix_text = if idx == 0 {
                prefix.clone()
            } else {
                " ".repeat(prefix_width as usize)
            };
            display_lines.push(Line::from(vec![
                Span::styled(prefix_text, Style::default().fg(palette.primary)),
                Span::styled(line_text, Style::default().fg(palette.text_primary)),
            ]));
        }
        frame.render_widget(Paragraph::new(display_lines), inner);

        if self.focused {
            let cursor_row = cursor_line_index.saturating_sub(start_line) as u16;
            let cursor_x = inner
                .x
                .saturating_add(prefix_width)
                .saturating_add(cursor_display_pos as u16)
                .saturating_sub(horizontal_scroll);
            let cursor_y = inner.y.saturating_add(cursor_row);
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

/// Byte offset and display width of the graphemes skipped to scroll `target`
/// columns.
fn scroll_offset(line: &str, target: usize) -> (usize, u16) {
    let mut skipped_width = 0;
    for (idx, grapheme) in line.grapheme_indices(true) {
        if skipped_width >= target {
            return (idx, skipped_width as u16);
        }
        skipped_width += grapheme.width();
    }
    (line.len(), skipped_width as u16)
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let (status_text, status_style) = if let Some(note) = app.status_note() {
        (
            note.text().to_string(),
            Style::default().fg(palette.tone(note.tone())),
        )
    } else if let Some(announcement) = app.view().live_region().latest() {
        (
            format!("{} {}", glyphs.bullet, announcement.text),
            Style::default().fg(palette.text_secondary),
        )
    } else {
        (String::new(), Style::default())
    };

    let hints: &[(&str, &str)] = match app.focus() {
        FocusTarget::Card(_) => &[
            ("Enter", " open  "),
            ("Ctrl+O", " visit  "),
            ("Tab", " next  "),
            ("Ctrl+C", " quit "),
        ],
        FocusTarget::SkillInput => &[("Enter", " search  "), ("Tab", " next  "), ("Ctrl+C", " quit ")],
        FocusTarget::Message => &[
            ("Shift+Enter", " newline  "),
            ("Ctrl+S", " send  "),
            ("Tab", " next  "),
            ("Ctrl+C", " quit "),
        ],
        FocusTarget::Email => &[("Enter", " send  "), ("Tab", " next  "), ("Ctrl+C", " quit ")],
        FocusTarget::SearchButton | FocusTarget::Submit => {
            &[("Enter", " activate  "), ("Tab", " next  "), ("Ctrl+C", " quit ")]
        }
    };
    let mut hint_spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        hint_spans.push(Span::styled(*key, styles::key_highlight(palette)));
        hint_spans.push(Span::styled(*label, styles::key_hint(palette)));
    }
    let hints_width: u16 = hint_spans.iter().map(|span| span.width() as u16).sum();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(hints_width)])
        .split(area);

    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(status_text, status_style),
    ]));
    frame.render_widget(status, chunks[0]);
    frame.render_widget(
        Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Right),
        chunks[1],
    );
}
