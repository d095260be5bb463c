use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::{AppState, ChatSender},
    i18n,
    ui::{components::card::Card, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::for_mode(state.theme);

    let title = i18n::lookup(state.language, "ai_assistant")
        .unwrap_or_default()
        .to_string();
    let card = Card::new(&title, &theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    render_transcript(frame, rows[0], state, &theme);
    render_input(frame, rows[1], state, &theme);
}

fn render_transcript(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut lines: Vec<Line> = Vec::new();

    // The welcome message is rendered from the dictionary every frame, so a
    // language toggle re-translates it. It is the one entry allowed to span
    // multiple lines.
    if let Some(welcome) = i18n::lookup(state.language, "chat_welcome") {
        for part in welcome.split('\n') {
            lines.push(Line::from(Span::styled(
                part,
                Style::default().fg(theme.dim),
            )));
        }
        lines.push(Line::from(""));
    }

    for message in &state.chat.transcript {
        let line = match message.sender {
            ChatSender::User => Line::from(vec![
                Span::styled(
                    "you ",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(message.text.clone(), Style::default().fg(theme.text)),
            ]),
            ChatSender::Bot => Line::from(vec![
                Span::styled("bot ", Style::default().fg(theme.dim)),
                Span::styled(message.text.clone(), Style::default().fg(theme.text)),
            ]),
        };
        lines.push(line);
    }

    // Pinned to the bottom: show the newest lines that fit.
    let height = area.height as usize;
    let skip = lines.len().saturating_sub(height);
    let visible: Vec<Line> = lines.into_iter().skip(skip).collect();

    frame.render_widget(Paragraph::new(visible), area);
}

fn render_input(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let input = &state.chat.input;

    let (display, style) = if input.is_empty() {
        let placeholder = i18n::lookup(state.language, "placeholder_chat").unwrap_or_default();
        (format!("> {placeholder}"), Style::default().fg(theme.dim))
    } else {
        (format!("> {input}│"), Style::default().fg(theme.accent))
    };

    frame.render_widget(Paragraph::new(Span::styled(display, style)), area);
}
