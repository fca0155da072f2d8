use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Compute a centered popup rectangle as percentages of the parent area.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Pull the record id out of a cached display string. Every projection leads
/// with `"{id}. "`, so the id of the selected row can be recovered without
/// keeping a parallel entity list in the UI.
pub(crate) fn leading_id(entry: &str) -> Option<i64> {
    let (id_part, _) = entry.split_once('.')?;
    id_part.trim().parse().ok()
}
