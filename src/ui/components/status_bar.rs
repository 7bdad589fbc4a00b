//! Status bar component

use crate::constants::STATUS_HINTS;
use crate::content::ContentKind;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, active_tab: ContentKind, count: usize, editing: bool) {
        let status_text = if editing {
            format!("Editing an item under {} • Enter: save • Esc: cancel", active_tab.slug())
        } else {
            format!("{} • {} {}", STATUS_HINTS, count, active_tab.slug())
        };

        let status_color = if editing { Color::Yellow } else { Color::Gray };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
