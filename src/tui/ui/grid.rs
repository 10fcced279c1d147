use crate::combos::{format_probability, Part, Stats};
use crate::hands::{HandKind, GRID_SIZE};
use crate::tui::app::{AppState, Scene};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{inner, CELL_WIDTH};

fn kind_color(kind: HandKind) -> Color {
    match kind {
        HandKind::Pair => Color::Yellow,
        HandKind::Suited => Color::Green,
        HandKind::Offsuit => Color::Cyan,
    }
}

fn part_color(part: Part) -> Color {
    match part {
        Part::Both => Color::Magenta,
        Part::AOnly => Color::Green,
        Part::BOnly => Color::Blue,
    }
}

pub(super) fn draw_grid(f: &mut Frame, area: Rect, app: &AppState) {
    let comparison = app.comparison();
    let title = match (&comparison, app.current()) {
        (Some((a, b, _)), _) => format!("{} vs {}", a.name, b.name),
        (None, Some(range)) => range.name.clone(),
        (None, None) => "No range".to_string(),
    };
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if app.scene == Scene::Grid {
        block = block.border_style(Style::default().fg(Color::Cyan));
    }
    f.render_widget(block, area);

    let hands = app.current_hands();
    let selector = app.selector();
    let hovered = selector.last_hovered();
    let mut lines: Vec<Line> = Vec::with_capacity(GRID_SIZE);
    for (row, chunk) in selector.grid().chunks(GRID_SIZE).enumerate() {
        let spans: Vec<Span> = chunk
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let text = format!("{:^width$}", cell.label, width = CELL_WIDTH as usize);
                let fill = match &comparison {
                    Some((_, _, cmp)) => [Part::Both, Part::AOnly, Part::BOnly]
                        .into_iter()
                        .find(|p| cmp.part(*p).contains(&cell.label))
                        .map(part_color),
                    None => hands.contains(&cell.label).then(|| kind_color(cell.kind)),
                };
                let mut style = match fill {
                    Some(bg) => {
                        Style::default().bg(bg).fg(Color::Black).add_modifier(Modifier::BOLD)
                    }
                    None => Style::default().fg(Color::DarkGray),
                };
                if app.scene == Scene::Grid && app.cursor == (row, col) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                if hovered == Some(cell.label.as_str()) {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                Span::styled(text, style)
            })
            .collect();
        lines.push(Line::from(spans));
    }
    f.render_widget(Paragraph::new(lines), inner(area));
}

pub(super) fn draw_stats(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().title("Stats").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    if let Some((_, other, cmp)) = app.comparison() {
        let parts = [
            (Part::Both, "Both".to_string()),
            (Part::AOnly, "Only current".to_string()),
            (Part::BOnly, format!("Only {}", other.name)),
        ];
        for (part, label) in parts {
            let s = cmp.summary(part);
            lines.push(Line::from(vec![
                Span::styled("■ ", Style::default().fg(part_color(part))),
                Span::raw(format!("{label}: {} hands, {} combos", s.hands, s.combinations)),
            ]));
        }
    } else {
        let hands = app.current_hands();
        let total = app.stats();
        lines.push(Line::from(Span::styled(
            format!(
                "{} hands  {} combos  {}",
                total.hands,
                total.combinations,
                format_probability(total.probability)
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for kind in HandKind::ALL {
            let s = Stats::of_kind(&hands, kind);
            lines.push(Line::from(vec![
                Span::styled("■ ", Style::default().fg(kind_color(kind))),
                Span::raw(format!(
                    "{}: {} hands, {} combos",
                    kind.label(),
                    s.hands,
                    s.combinations
                )),
            ]));
        }
    }
    if let Some(label) = app.cursor_label() {
        lines.push(Line::from(Span::styled(
            format!("Cursor: {label}"),
            Style::default().add_modifier(Modifier::DIM),
        )));
    }
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}
