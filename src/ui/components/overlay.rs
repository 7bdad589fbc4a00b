//! Help and session-log overlays.
//!
//! Rendered centered over the main layout; scrollable with `j`/`k` and
//! dismissed with Esc or the key that opened them.

use crate::constants::DIALOG_TITLE_LOGS;
use crate::logger::Logger;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use once_cell::sync::Lazy;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

static HELP_ENTRIES: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("1-5, ←/→, [/]", "switch category tab"),
        ("j/k, ↑/↓", "move list selection"),
        ("a", "focus the form to add an item"),
        ("e", "edit the selected item"),
        ("d", "delete the selected item"),
        ("Enter", "submit the form (add or save)"),
        ("Tab", "switch form field"),
        ("Esc", "cancel edit / leave the form"),
        ("t", "cycle icon theme"),
        ("G", "show session log"),
        ("?", "show this help"),
        ("q", "quit"),
    ]
});

/// Overlay component managing the help and log dialogs.
pub struct OverlayComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    logger: Logger,
}

impl OverlayComponent {
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            logger,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    fn scroll_down(&mut self) {
        self.scroll_offset += 1;
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let dialog_area = LayoutManager::centered_rect(60, 70, area);
        f.render_widget(Clear, dialog_area);

        let lines: Vec<Line> = HELP_ENTRIES
            .iter()
            .skip(self.scroll_offset)
            .map(|(keys, description)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<16}", keys),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*description, Style::default().fg(Color::Gray)),
                ])
            })
            .collect();

        let help = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Help - Press 'Esc', '?' or 'q' to close ")
                .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(help, dialog_area);
    }

    fn render_logs(&self, f: &mut Frame, area: Rect) {
        let dialog_area = LayoutManager::centered_rect(80, 80, area);
        f.render_widget(Clear, dialog_area);

        let entries = self.logger.entries();
        let lines: Vec<Line> = if entries.is_empty() {
            vec![Line::from(Span::styled(
                "No log entries yet.",
                Style::default().fg(Color::Gray),
            ))]
        } else {
            entries
                .iter()
                .skip(self.scroll_offset)
                .map(|entry| Line::from(Span::styled(entry.clone(), Style::default().fg(Color::Gray))))
                .collect()
        };

        let logs = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!(" {} ", DIALOG_TITLE_LOGS))
                .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(logs, dialog_area);
    }
}

impl Component for OverlayComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.dialog_type {
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.scroll_up();
                    Action::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.scroll_down();
                    Action::None
                }
                _ => Action::None,
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.scroll_up();
                    Action::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.scroll_down();
                    Action::None
                }
                _ => Action::None,
            },
            None => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                self.scroll_offset = 0;
                Action::None
            }
            Action::HideDialog => {
                self.dialog_type = None;
                self.scroll_offset = 0;
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.dialog_type {
            Some(DialogType::Help) => self.render_help(f, rect),
            Some(DialogType::Logs) => self.render_logs(f, rect),
            None => {}
        }
    }
}
