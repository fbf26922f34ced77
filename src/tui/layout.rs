//! Layout definitions for the TUI
//!
//! Both screens share the same shell: a brand title line, a two-panel card
//! (info panel on the left, form on the right), and a key-hint bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions shared by both screens
pub struct AppLayout {
    /// Brand title line at the top
    pub title: Rect,
    /// The card holding the two panels
    pub card: Rect,
    /// Key-hint bar at the bottom
    pub hint_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Min(10),   // Card
                Constraint::Length(1), // Hint bar
            ])
            .split(area);

        Self {
            title: vertical[0],
            card: vertical[1],
            hint_bar: vertical[2],
        }
    }
}

/// Split a card area into the info panel and the form panel
pub fn two_panel(area: Rect) -> (Rect, Rect) {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(38), // Info panel
            Constraint::Percentage(62), // Form panel
        ])
        .split(area);

    (horizontal[0], horizontal[1])
}

/// Create a fixed-size centered rect
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
