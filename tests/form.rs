use crossterm::event::{KeyCode, KeyEvent};
use piles::content::{ContentItem, ContentKind};
use piles::ui::components::form::{FormComponent, FormField};
use piles::ui::core::{actions::Action, Component};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

fn type_text(form: &mut FormComponent, text: &str) {
    for c in text.chars() {
        form.handle_key_events(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_inactive_form_ignores_keys() {
    let mut form = FormComponent::new();
    assert_eq!(form.handle_key_events(key(KeyCode::Char('x'))), Action::None);
    assert!(form.title.buffer.is_empty());
}

#[test]
fn test_typing_goes_to_focused_field() {
    let mut form = FormComponent::new();
    form.open();

    type_text(&mut form, "Dune");
    assert_eq!(form.title.buffer, "Dune");

    form.handle_key_events(key(KeyCode::Tab));
    assert_eq!(form.focused_field, FormField::Description);
    type_text(&mut form, "Epic");
    assert_eq!(form.description.buffer, "Epic");
    assert_eq!(form.title.buffer, "Dune");
}

#[test]
fn test_cursor_editing_is_char_aware() {
    let mut form = FormComponent::new();
    form.open();

    type_text(&mut form, "Amélie");
    form.handle_key_events(key(KeyCode::Backspace));
    form.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(form.title.buffer, "Amél");

    form.handle_key_events(key(KeyCode::Left));
    form.handle_key_events(key(KeyCode::Left));
    form.handle_key_events(key(KeyCode::Delete));
    assert_eq!(form.title.buffer, "Aml");

    form.handle_key_events(key(KeyCode::Home));
    form.handle_key_events(key(KeyCode::Char('>')));
    assert_eq!(form.title.buffer, ">Aml");
}

#[test]
fn test_enter_submits_add_in_creating_mode() {
    let mut form = FormComponent::new();
    form.open();
    type_text(&mut form, "Dune");

    let action = form.handle_key_events(key(KeyCode::Enter));
    assert_eq!(
        action,
        Action::AddItem {
            title: "Dune".to_string(),
            description: String::new(),
        }
    );
}

#[test]
fn test_enter_submits_save_in_editing_mode() {
    let mut form = FormComponent::new();
    let item = ContentItem::new("Dune", "old", ContentKind::Movies);
    form.begin_edit(&item);

    assert!(form.is_active());
    assert_eq!(form.title.buffer, "Dune");

    type_text(&mut form, ": Part Two");
    let action = form.handle_key_events(key(KeyCode::Enter));
    assert_eq!(
        action,
        Action::SaveEdit {
            id: item.id,
            title: "Dune: Part Two".to_string(),
            description: "old".to_string(),
        }
    );
}

#[test]
fn test_escape_cancels_edit_but_only_blurs_while_creating() {
    let mut form = FormComponent::new();
    form.open();
    assert_eq!(form.handle_key_events(key(KeyCode::Esc)), Action::BlurForm);

    let item = ContentItem::new("Dune", "", ContentKind::Movies);
    form.begin_edit(&item);
    assert_eq!(form.handle_key_events(key(KeyCode::Esc)), Action::CancelEdit);
}

#[test]
fn test_reset_returns_to_empty_creating_mode() {
    let mut form = FormComponent::new();
    let item = ContentItem::new("Dune", "desc", ContentKind::Movies);
    form.begin_edit(&item);

    form.reset();
    assert!(!form.is_active());
    assert!(!form.is_editing());
    assert!(form.title.buffer.is_empty());
    assert!(form.description.buffer.is_empty());
}

#[test]
fn test_blur_keeps_the_draft() {
    let mut form = FormComponent::new();
    form.open();
    type_text(&mut form, "Half-typed");

    form.update(Action::BlurForm);
    assert!(!form.is_active());
    assert_eq!(form.title.buffer, "Half-typed");

    // Reopening resumes the same draft
    form.update(Action::FocusForm);
    assert!(form.is_active());
    assert_eq!(form.title.buffer, "Half-typed");
}
