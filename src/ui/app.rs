//! Application state and business logic
//!
//! `AppComponent` composes the tab bar, form, item list, status bar, and
//! overlays, routes key events to whichever component currently has
//! priority, and applies every content operation to the store.

use crate::config::Config;
use crate::constants::{APP_TAGLINE, APP_TITLE};
use crate::content::{ContentItem, ContentKind};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::store::ContentStore;
use crate::ui::components::{FormComponent, ItemList, OverlayComponent, StatusBar, TabBar};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Application state separate from UI concerns
pub struct AppState {
    pub active_tab: ContentKind,
    pub store: ContentStore,
    pub show_descriptions: bool,
}

pub struct AppComponent {
    // Component composition
    pub tab_bar: TabBar,
    pub form: FormComponent,
    pub item_list: ItemList,
    pub overlay: OverlayComponent,

    // Application state
    pub state: AppState,
    pub icons: IconService,

    logger: Logger,
    should_quit: bool,
}

impl AppComponent {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let logger = Logger::new();
        let state = AppState {
            active_tab: config.default_tab(),
            store: ContentStore::new(),
            show_descriptions: config.display.show_descriptions,
        };

        let mut app = Self {
            tab_bar: TabBar::new(),
            form: FormComponent::new(),
            item_list: ItemList::new(),
            overlay: OverlayComponent::new(logger.clone()),
            state,
            icons: IconService::new(config.icon_theme()),
            logger,
            should_quit: false,
        };
        app.logger
            .log(format!("App: started on tab '{}'", app.state.active_tab));
        app.sync_component_data();
        app
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        self.tab_bar.selected = self.state.active_tab;
        self.tab_bar.icons = self.icons.clone();

        self.form.active_tab = self.state.active_tab;
        self.form.icons = self.icons.clone();

        self.item_list.icons = self.icons.clone();
        self.item_list.show_descriptions = self.state.show_descriptions;
        let items: Vec<ContentItem> = self.state.store.items_for(self.state.active_tab).cloned().collect();
        self.item_list.update_data(items, self.state.active_tab);
    }

    /// Handle keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('?') | KeyCode::Char('h') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('a') | KeyCode::Char('n') => Action::FocusForm,
            KeyCode::Char('t') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    /// Handle app-level actions that mutate the content store or app state
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.logger.log("App: quitting".to_string());
                self.should_quit = true;
                Action::None
            }
            Action::SelectTab(kind) => {
                let discarded_edit = self.form.is_editing();
                self.state.active_tab = kind;
                // Switching tabs always forces creating mode and a fresh draft
                self.form.reset();
                self.item_list.reset_selection();
                if discarded_edit {
                    self.logger
                        .log(format!("Tabs: switched to '{}', discarded in-progress edit", kind));
                } else {
                    self.logger.log(format!("Tabs: switched to '{}'", kind));
                }
                Action::None
            }
            Action::AddItem { title, description } => {
                match self.state.store.add(&title, &description, self.state.active_tab) {
                    Some(id) => {
                        self.form.clear_draft();
                        log::info!("created item {} under '{}'", id, self.state.active_tab);
                        self.logger
                            .log(format!("Items: added '{}' under '{}'", title, self.state.active_tab));
                    }
                    None => {
                        // Blank title: silently decline, keep the draft
                        self.logger.log("Items: ignored add with blank title".to_string());
                    }
                }
                Action::None
            }
            Action::BeginEdit(id) => {
                if let Some(item) = self.state.store.get(id) {
                    let item = item.clone();
                    self.logger.log(format!("Items: editing '{}' ({})", item.title, item.id));
                    self.form.begin_edit(&item);
                }
                Action::None
            }
            Action::SaveEdit { id, title, description } => {
                if self.state.store.update(id, &title, &description) {
                    log::info!("updated item {}", id);
                    self.logger.log(format!("Items: saved changes to {}", id));
                } else {
                    self.logger.log(format!("Items: save target {} no longer exists", id));
                }
                self.form.reset();
                Action::None
            }
            Action::CancelEdit => {
                self.form.reset();
                self.logger.log("Form: edit cancelled".to_string());
                Action::None
            }
            Action::DeleteItem(id) => {
                if self.state.store.remove(id) {
                    log::info!("deleted item {}", id);
                    self.logger.log(format!("Items: deleted {}", id));
                }
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.logger.log(format!("Display: icon theme now {:?}", self.icons.theme()));
                Action::None
            }
            Action::NextItem | Action::PreviousItem => Action::None,
            // Pass through other actions
            other => other,
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    Action::Quit
                } else if self.overlay.is_visible() {
                    // Overlay has priority when visible
                    self.overlay.handle_key_events(key)
                } else if self.form.is_active() {
                    // An active form captures all typing
                    self.form.handle_key_events(key)
                } else {
                    // Try tab navigation first, then the list, then global keys
                    let tab_action = self.tab_bar.handle_key_events(key);
                    if tab_action != Action::None {
                        tab_action
                    } else {
                        let list_action = self.item_list.handle_key_events(key);
                        if list_action != Action::None {
                            list_action
                        } else {
                            self.handle_global_key(key)
                        }
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        // Process action through the component hierarchy
        let action = self.overlay.update(action);
        let action = self.tab_bar.update(action);
        let action = self.form.update(action);

        // Handle app-level actions
        let _final_action = self.handle_app_action(action);

        // Update component data after any changes
        self.sync_component_data();

        Ok(())
    }

    fn render_header(&self, f: &mut Frame, rect: Rect) {
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                APP_TITLE,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(APP_TAGLINE, Style::default().fg(Color::DarkGray))),
        ]);
        f.render_widget(header, rect);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);

        self.render_header(f, chunks[0]);
        self.tab_bar.render(f, chunks[1]);
        self.form.render(f, chunks[2]);
        self.item_list.render(f, chunks[3]);
        StatusBar::render(
            f,
            chunks[4],
            self.state.active_tab,
            self.state.store.count_for(self.state.active_tab),
            self.form.is_editing(),
        );

        // Render overlay on top if visible
        if self.overlay.is_visible() {
            self.overlay.render(f, rect);
        }
    }
}
