//! Create/edit form component.
//!
//! The form is always visible below the tab bar. In creating mode, Enter
//! submits a new item under the active category; in editing mode the form
//! is bound to an existing item's id and Enter writes the draft back to it.

use crate::constants::{FORM_HINT_CREATE, FORM_HINT_EDIT};
use crate::content::{ContentItem, ContentKind};
use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use uuid::Uuid;

/// Which input currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
}

/// Single-line text input with a character-indexed cursor.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    pub buffer: String,
    pub cursor: usize,
}

impl InputField {
    fn byte_pos(&self) -> usize {
        self.buffer.chars().take(self.cursor).map(|ch| ch.len_utf8()).sum()
    }

    pub fn insert(&mut self, c: char) {
        let byte_pos = self.byte_pos();
        self.buffer.insert(byte_pos, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let byte_pos = self.byte_pos();
            let prev_char_len = self
                .buffer
                .chars()
                .nth(self.cursor - 1)
                .map(|ch| ch.len_utf8())
                .unwrap_or(1);
            self.buffer.remove(byte_pos - prev_char_len);
            self.cursor -= 1;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            let byte_pos = self.byte_pos();
            self.buffer.remove(byte_pos);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    /// Replace the content and place the cursor at the end.
    pub fn set(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.chars().count();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }
}

/// The create/edit form bound to the active category.
pub struct FormComponent {
    pub title: InputField,
    pub description: InputField,
    pub focused_field: FormField,
    /// Whether keystrokes are routed to the form.
    pub active: bool,
    /// Id of the item being edited, or `None` in creating mode.
    pub editing: Option<Uuid>,
    pub active_tab: ContentKind,
    pub icons: IconService,
}

impl Default for FormComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl FormComponent {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: InputField::default(),
            description: InputField::default(),
            focused_field: FormField::Title,
            active: false,
            editing: None,
            active_tab: ContentKind::default(),
            icons: IconService::default(),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Focus the form in creating mode, keeping any existing draft.
    pub fn open(&mut self) {
        self.active = true;
        self.focused_field = FormField::Title;
    }

    /// Drop focus without touching the draft.
    pub fn blur(&mut self) {
        self.active = false;
    }

    /// Bind the form to an existing item and load its values into the draft.
    pub fn begin_edit(&mut self, item: &ContentItem) {
        self.editing = Some(item.id);
        self.title.set(&item.title);
        self.description.set(item.description_text());
        self.focused_field = FormField::Title;
        self.active = true;
    }

    /// Reset the draft, keeping mode and focus state untouched.
    pub fn clear_draft(&mut self) {
        self.title.clear();
        self.description.clear();
        self.focused_field = FormField::Title;
    }

    /// Back to an unfocused, creating-mode form with an empty draft.
    pub fn reset(&mut self) {
        self.clear_draft();
        self.editing = None;
        self.active = false;
    }

    fn focused_input_mut(&mut self) -> &mut InputField {
        match self.focused_field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
        }
    }

    fn toggle_field(&mut self) {
        self.focused_field = match self.focused_field {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Title,
        };
    }

    fn handle_submit(&mut self) -> Action {
        match self.editing {
            Some(id) => Action::SaveEdit {
                id,
                title: self.title.buffer.clone(),
                description: self.description.buffer.clone(),
            },
            None => Action::AddItem {
                title: self.title.buffer.clone(),
                description: self.description.buffer.clone(),
            },
        }
    }

    fn render_input(&self, f: &mut Frame, area: Rect, field: FormField, title: &str) {
        let input = match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
        };
        let focused = self.active && self.focused_field == field;

        let display = if focused {
            format!("{}█", input.buffer)
        } else {
            input.buffer.clone()
        };

        let border_color = if focused { Color::Yellow } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(Color::White))
            .border_style(Style::default().fg(border_color));

        let paragraph = Paragraph::new(display)
            .block(block)
            .style(Style::default().fg(Color::White));
        f.render_widget(paragraph, area);
    }
}

impl Component for FormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.active {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => {
                if self.is_editing() {
                    Action::CancelEdit
                } else {
                    Action::BlurForm
                }
            }
            KeyCode::Enter => self.handle_submit(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
                self.toggle_field();
                Action::None
            }
            KeyCode::Char(c) => {
                self.focused_input_mut().insert(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.focused_input_mut().backspace();
                Action::None
            }
            KeyCode::Delete => {
                self.focused_input_mut().delete();
                Action::None
            }
            KeyCode::Left => {
                self.focused_input_mut().move_left();
                Action::None
            }
            KeyCode::Right => {
                self.focused_input_mut().move_right();
                Action::None
            }
            KeyCode::Home => {
                self.focused_input_mut().move_home();
                Action::None
            }
            KeyCode::End => {
                self.focused_input_mut().move_end();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::FocusForm => {
                self.open();
                Action::None
            }
            Action::BlurForm => {
                self.blur();
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let mode = if self.is_editing() { "Edit" } else { "Add" };
        let mode_icon = if self.is_editing() {
            self.icons.icons().ui.edit
        } else {
            self.icons.icons().ui.add
        };
        let panel_color = if self.active { Color::Green } else { Color::DarkGray };
        let panel = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} {} {} ", mode_icon, mode, self.active_tab.label()))
            .title_style(Style::default().fg(panel_color).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(panel_color));
        let inner = panel.inner(rect);
        f.render_widget(panel, rect);

        let chunks = LayoutManager::form_layout(inner);
        self.render_input(f, chunks[0], FormField::Title, "Title");
        self.render_input(f, chunks[1], FormField::Description, "Description");

        let hint = if self.is_editing() { FORM_HINT_EDIT } else { FORM_HINT_CREATE };
        let hint_line = Line::from(Span::styled(hint, Style::default().fg(Color::Gray)));
        f.render_widget(Paragraph::new(hint_line).alignment(Alignment::Center), chunks[2]);
    }
}
