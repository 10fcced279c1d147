use crate::assistant::Role;
use crate::combos::{format_probability, Stats};
use crate::tui::app::{AppState, AssistantStatus, Scene};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

fn focus_style(app: &AppState, scene: Scene) -> Style {
    if app.scene == scene {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

pub(super) fn draw_ranges(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .title("Ranges")
        .borders(Borders::ALL)
        .border_style(focus_style(app, Scene::Ranges));
    let current = app.book.current_id();
    let compare = app.comparison().map(|(_, other, _)| other.id.clone());
    let items: Vec<ListItem> = app
        .book
        .sorted()
        .into_iter()
        .map(|r| {
            let star = if r.is_favorite { "★" } else { " " };
            let marker = if Some(r.id.as_str()) == current {
                ">"
            } else if compare.as_deref() == Some(r.id.as_str()) {
                "≠"
            } else {
                " "
            };
            let stats = Stats::of(&r.hands);
            let mut spans = vec![
                Span::raw(format!("{marker}{star} ")),
                Span::styled(r.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  {} · {}", stats.hands, format_probability(stats.probability)),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ];
            if r.is_preset {
                spans.push(Span::styled(" preset", Style::default().fg(Color::DarkGray)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    let mut state = ListState::default();
    if app.scene == Scene::Ranges {
        state.select(Some(app.list_index));
    }
    f.render_stateful_widget(list, area, &mut state);
}

pub(super) fn draw_chat(f: &mut Frame, area: Rect, app: &AppState) {
    let title = match app.assistant_status() {
        AssistantStatus::Checking => "Assistant (checking)",
        AssistantStatus::Unavailable => "Assistant (offline)",
        _ => "Assistant",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(focus_style(app, Scene::Chat));
    f.render_widget(block, area);
    let body = inner(area);
    if !app.assistant_enabled() {
        let para = Paragraph::new("Assistant disabled.")
            .style(Style::default().add_modifier(Modifier::DIM));
        f.render_widget(para, body);
        return;
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(body);

    let conversation = app.conversation();
    let mut lines: Vec<Line> = Vec::new();
    for msg in conversation.messages() {
        let (who, color) = match msg.role {
            Role::User => ("you", Color::Cyan),
            Role::Assistant => ("assistant", Color::Green),
        };
        lines.push(Line::from(Span::styled(
            format!("{who}:"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.extend(msg.content.lines().map(|l| Line::from(l.to_string())));
    }
    if conversation.is_pending() {
        lines.push(Line::from(Span::styled("…", Style::default().add_modifier(Modifier::DIM))));
    }
    if let Some(err) = conversation.error() {
        let style = Style::default().fg(Color::Red);
        lines.push(Line::from(Span::styled(format!("Error: {err}"), style)));
    }
    // keep the latest lines in view
    let height = chunks[0].height as usize;
    let scroll = lines.len().saturating_sub(height) as u16;
    let transcript = Paragraph::new(lines).wrap(Wrap { trim: false }).scroll((scroll, 0));
    f.render_widget(transcript, chunks[0]);

    let dim = Style::default().add_modifier(Modifier::DIM);
    let prompt = if app.assistant_status() == AssistantStatus::Unavailable {
        Line::from(Span::styled("Sending is disabled", dim))
    } else if app.scene == Scene::Chat {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::raw(app.chat_input()),
        ])
    } else {
        Line::from(Span::styled("Tab to chat", dim))
    };
    f.render_widget(Paragraph::new(prompt), chunks[1]);
}

pub(super) fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    let keys = match app.scene {
        Scene::Grid => {
            "click/drag select • Space toggle • a all • x clear • i invert • p/s/o kinds"
        }
        Scene::Ranges => {
            "Enter open • n new • r rename • d delete • f fav • c compare • e export • I import"
        }
        _ => "Enter send • Ctrl-L clear • Esc grid",
    };
    let mut spans = Vec::new();
    if let Some(notice) = app.notice() {
        let color = if notice.is_error { Color::Red } else { Color::Green };
        let style = Style::default().fg(color);
        spans.push(Span::styled(format!("{}  ", notice.text), style));
    }
    spans.push(Span::styled(keys, Style::default().add_modifier(Modifier::DIM)));
    let right = Line::from("Tab focus • ? help • q quit");
    let block = Block::default().borders(Borders::ALL).title("Status");
    f.render_widget(block, area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(28)])
        .split(inner(area));
    f.render_widget(Paragraph::new(Line::from(spans)), cols[0]);
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), cols[1]);
}

pub(super) fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Grid:", bold)),
        Line::from("- Mouse: click a cell to toggle it, drag to paint the same way"),
        Line::from("- Arrows: move cursor, Space: toggle cell"),
        Line::from("- a: select all, x: clear, i: invert"),
        Line::from("- p / s / o: toggle pairs / suited / offsuit"),
        Line::from(""),
        Line::from(Span::styled("Ranges:", bold)),
        Line::from("- Up / Down: move, Enter: edit range"),
        Line::from("- n: new, r: rename, d d: delete"),
        Line::from("- f: favorite, c: compare with current"),
        Line::from("- e: export all, I: import file, R R: restore presets"),
        Line::from(""),
        Line::from(Span::styled("Assistant:", bold)),
        Line::from("- type and Enter to ask about the current range"),
        Line::from("- Ctrl-L: start a new conversation"),
        Line::from(""),
        Line::from("Tab: switch pane • q: quit"),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

pub(super) fn draw_entry(f: &mut Frame, app: &AppState) {
    let Some(entry) = app.entry() else { return };
    let area = centered_rect(50, 20, f.area());
    let block = Block::default().title(entry.title()).borders(Borders::ALL);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)])
        .split(inner(area));
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(format!("{}_", entry.buffer)), chunks[0]);
    f.render_widget(
        Paragraph::new("Enter confirm, Esc cancel")
            .style(Style::default().add_modifier(Modifier::DIM)),
        chunks[1],
    );
    let error = entry.error.as_deref().unwrap_or("");
    let error = Span::styled(error, Style::default().fg(Color::Red));
    f.render_widget(Paragraph::new(error), chunks[2]);
}
