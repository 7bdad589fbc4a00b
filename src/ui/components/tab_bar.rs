//! Category tab bar component.
//!
//! Renders the five fixed category tabs and turns navigation keys into
//! [`Action::SelectTab`] transitions.

use crate::content::ContentKind;
use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Tabs},
    Frame,
};

pub struct TabBar {
    pub selected: ContentKind,
    pub icons: IconService,
}

impl Default for TabBar {
    fn default() -> Self {
        Self::new()
    }
}

impl TabBar {
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected: ContentKind::default(),
            icons: IconService::default(),
        }
    }
}

impl Component for TabBar {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Left | KeyCode::Char('[') => Action::SelectTab(self.selected.previous()),
            KeyCode::Right | KeyCode::Char(']') => Action::SelectTab(self.selected.next()),
            KeyCode::Char(c @ '1'..='5') => {
                let index = (c as usize) - ('1' as usize);
                Action::SelectTab(ContentKind::ALL[index])
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::SelectTab(kind) = action {
            self.selected = kind;
            // Pass through so the app can reset form and selection state
            return Action::SelectTab(kind);
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let titles: Vec<Line> = ContentKind::ALL
            .iter()
            .map(|kind| Line::from(format!(" {} {} ", self.icons.kind(*kind), kind.label())))
            .collect();

        let tabs = Tabs::new(titles)
            .select(self.selected.index())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("|");

        f.render_widget(tabs, rect);
    }
}
