use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Narrowest detail pane that still fits a device line
const DETAIL_MIN_WIDTH: u16 = 30;

/// Split-pane layout configuration
pub struct AppLayout {
    pub roster_area: Rect,
    pub detail_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create split-pane layout:
    /// - Roster list: 60% width (left)
    /// - Detail pane: 40% width (right), never narrower than
    ///   [`DETAIL_MIN_WIDTH`] so device rows stay readable
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        // Vertical split: main area + status bar
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area (at least 3 rows)
                Constraint::Length(1), // Status bar (1 row)
            ])
            .split(area);

        // Horizontal split: roster + detail, detail keeps a width floor
        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60),          // Roster list
                Constraint::Min(DETAIL_MIN_WIDTH),   // Detail pane
            ])
            .split(vertical_chunks[0]);

        Self {
            roster_area: horizontal_chunks[0],
            detail_area: horizontal_chunks[1],
            status_area: vertical_chunks[1],
        }
    }
}
