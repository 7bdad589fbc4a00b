//! Item list component for the active category.
//!
//! Shows the filtered view of the collection in insertion order, with an
//! empty-state message when the category has no items yet. Selection moves
//! with `j`/`k` or the arrow keys; `e` begins editing the selected item and
//! `d` deletes it immediately.

use crate::content::{ContentItem, ContentKind};
use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct ItemList {
    items: Vec<ContentItem>,
    active_tab: ContentKind,
    pub show_descriptions: bool,
    pub icons: IconService,
    list_state: ListState,
}

impl Default for ItemList {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemList {
    #[must_use]
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            items: Vec::new(),
            active_tab: ContentKind::default(),
            show_descriptions: true,
            icons: IconService::default(),
            list_state,
        }
    }

    /// Replace the displayed view, clamping the selection to the new bounds.
    pub fn update_data(&mut self, items: Vec<ContentItem>, active_tab: ContentKind) {
        self.items = items;
        self.active_tab = active_tab;

        let selected = self.list_state.selected().unwrap_or(0);
        if self.items.is_empty() {
            self.list_state.select(Some(0));
        } else if selected >= self.items.len() {
            self.list_state.select(Some(self.items.len() - 1));
        }
    }

    /// Move the selection back to the top of the list.
    pub fn reset_selection(&mut self) {
        self.list_state.select(Some(0));
    }

    /// The currently selected item, if the view is non-empty.
    #[must_use]
    pub fn selected_item(&self) -> Option<&ContentItem> {
        self.items.get(self.list_state.selected().unwrap_or(0))
    }

    fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = (current + 1).min(self.items.len() - 1);
        self.list_state.select(Some(next));
    }

    fn select_previous(&mut self) {
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some(current.saturating_sub(1)));
    }
}

impl Component for ItemList {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.select_next();
                Action::NextItem
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.select_previous();
                Action::PreviousItem
            }
            KeyCode::Char('e') => match self.selected_item() {
                Some(item) => Action::BeginEdit(item.id),
                None => Action::None,
            },
            KeyCode::Char('d') => match self.selected_item() {
                Some(item) => Action::DeleteItem(item.id),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", self.active_tab.label()))
            .title_style(Style::default().fg(Color::White))
            .border_style(Style::default().fg(Color::DarkGray));

        if self.items.is_empty() {
            let message = format!("No {} added yet. Create one to get started!", self.active_tab.slug());
            let empty = Paragraph::new(message)
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray));
            f.render_widget(empty, rect);
            return;
        }

        let list_items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| {
                let mut lines = vec![Line::from(Span::styled(
                    format!("{} {}", self.icons.kind(item.kind), item.title),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ))];
                if self.show_descriptions {
                    if let Some(description) = &item.description {
                        lines.push(Line::from(Span::styled(
                            format!("  {}", description),
                            Style::default().fg(Color::DarkGray),
                        )));
                    }
                }
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(list_items)
            .block(block)
            .highlight_style(Style::default().bg(Color::Blue))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
