//! Rendering helpers shared by the application draw path. Keeping the widget
//! assembly here leaves `app.rs` free to focus on state transitions.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs};
use ratatui::Frame;

use super::helpers::centered_rect;

/// Draw the tab strip with the active entity kind highlighted.
pub(crate) fn draw_tabs(frame: &mut Frame, area: Rect, titles: &[&str], active: usize) {
    let tabs = Tabs::new(titles.iter().map(|title| Line::from(*title)))
        .block(Block::default().borders(Borders::ALL).title("University"))
        .select(active)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

/// Draw the record list for the active tab. The entries are the view-model's
/// cached display strings, shown verbatim.
pub(crate) fn draw_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    entries: &[String],
    selected: usize,
) {
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(entry.clone()))
        .collect();

    let mut state = ListState::default();
    if !entries.is_empty() {
        state.select(Some(selected.min(entries.len() - 1)));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw the footer: status message (or key hints) on the left, connection
/// state and total record count on the right.
pub(crate) fn draw_footer(
    frame: &mut Frame,
    area: Rect,
    status: Option<(&str, Style)>,
    connected: bool,
    total_records: usize,
) {
    let hint = "Tab: switch  a: add  d: delete  r: refresh  q: quit";
    let left = match status {
        Some((text, style)) => Line::from(Span::styled(text.to_string(), style)),
        None => Line::from(Span::raw(hint)),
    };

    let connection = if connected {
        Span::styled("Connected", Style::default().fg(Color::Green))
    } else {
        Span::styled("Disconnected", Style::default().fg(Color::Red))
    };
    let right = Line::from(vec![
        connection,
        Span::raw(format!("  Records: {total_records}")),
    ]);

    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(28)])
        .split(inner);
    frame.render_widget(Paragraph::new(left), halves[0]);
    frame.render_widget(
        Paragraph::new(right).alignment(Alignment::Right),
        halves[1],
    );
}

/// Draw a modal form popup over the list, with an optional error line.
pub(crate) fn draw_form_popup(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    mut lines: Vec<Line<'static>>,
    error: Option<&str>,
) {
    if let Some(message) = error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: save  Tab: next field  Esc: cancel",
        Style::default().fg(Color::DarkGray),
    )));

    let popup = centered_rect(60, 40, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title.to_string())),
        popup,
    );
}

/// Draw the delete confirmation popup for the selected entry.
pub(crate) fn draw_confirm_popup(frame: &mut Frame, area: Rect, entry: &str) {
    let lines = vec![
        Line::from("Delete this record?"),
        Line::from(""),
        Line::from(Span::styled(
            entry.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "y / Enter: delete  n / Esc: keep",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = centered_rect(50, 30, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Confirm")),
        popup,
    );
}
