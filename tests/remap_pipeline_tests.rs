//! End-to-end tests for the keystroke → interceptor → editor → state flow,
//! driven entirely through public `TuiEvent`s (no terminal required).

use shan_note::core::action::{Action, Effect, update};
use shan_note::core::interceptor::{ArrowKey, KeyInput};
use shan_note::core::state::App;
use shan_note::tui::component::EventHandler;
use shan_note::tui::components::{EditorEvent, NoteEditor};
use shan_note::tui::event::TuiEvent;

/// Feed a string of characters through the editor as individual keystrokes,
/// forwarding each content change into the app state the way the event loop
/// does.
fn type_str(editor: &mut NoteEditor, app: &mut App, s: &str) {
    for c in s.chars() {
        if let Some(EditorEvent::ContentChanged(text)) =
            editor.handle_event(&TuiEvent::Key(KeyInput::Char(c)))
        {
            update(app, Action::NoteChanged(text));
        }
    }
}

#[test]
fn typing_a_word_produces_shan_glyphs_and_updates_app() {
    let mut app = App::new(true);
    let mut editor = NoteEditor::new(app.remap_enabled);

    // q w e → ၸ တ ၼ
    type_str(&mut editor, &mut app, "qwe");

    assert_eq!(editor.buffer, "ၸတၼ");
    assert_eq!(app.note_text, "ၸတၼ");
    assert_eq!(app.status_message, "3 chars");
}

#[test]
fn mixed_input_keeps_digits_and_spaces_literal() {
    let mut app = App::new(true);
    let mut editor = NoteEditor::new(app.remap_enabled);

    type_str(&mut editor, &mut app, "q 5w");

    assert_eq!(editor.buffer, "ၸ 5တ");
    assert_eq!(app.note_text, "ၸ 5တ");
}

#[test]
fn suppressed_keystroke_changes_nothing_observable() {
    let mut app = App::new(true);
    let mut editor = NoteEditor::new(app.remap_enabled);

    type_str(&mut editor, &mut app, "q");
    let before = app.note_text.clone();

    // 'T' is a suppressed shifted slot: consumed, no insertion, no callback
    let res = editor.handle_event(&TuiEvent::Key(KeyInput::Char('T')));
    assert_eq!(res, None);
    assert_eq!(editor.buffer, before);
    assert_eq!(app.note_text, before);
}

#[test]
fn arrows_navigate_without_inserting() {
    let mut app = App::new(true);
    let mut editor = NoteEditor::new(app.remap_enabled);

    type_str(&mut editor, &mut app, "qw");
    editor.handle_event(&TuiEvent::Key(KeyInput::Arrow(ArrowKey::Left)));
    type_str(&mut editor, &mut app, "e");

    // 'e' lands between the first two glyphs; arrows contributed no text
    assert_eq!(editor.buffer, "ၸၼတ");
    assert_eq!(app.note_text, "ၸၼတ");
}

#[test]
fn toggling_remap_switches_between_scripts() {
    let mut app = App::new(true);
    let mut editor = NoteEditor::new(app.remap_enabled);

    type_str(&mut editor, &mut app, "q");

    update(&mut app, Action::ToggleRemap);
    editor.remap_enabled = app.remap_enabled;
    type_str(&mut editor, &mut app, "q");

    update(&mut app, Action::ToggleRemap);
    editor.remap_enabled = app.remap_enabled;
    type_str(&mut editor, &mut app, "q");

    assert_eq!(editor.buffer, "ၸqၸ");
}

#[test]
fn backspace_over_glyphs_then_retype() {
    let mut app = App::new(true);
    let mut editor = NoteEditor::new(app.remap_enabled);

    type_str(&mut editor, &mut app, "qw");
    if let Some(EditorEvent::ContentChanged(text)) = editor.handle_event(&TuiEvent::Backspace) {
        update(&mut app, Action::NoteChanged(text));
    }
    type_str(&mut editor, &mut app, "e");

    assert_eq!(editor.buffer, "ၸၼ");
    assert_eq!(app.note_text, "ၸၼ");
    assert_eq!(app.status_message, "2 chars");
}

#[test]
fn quit_action_yields_quit_effect() {
    let mut app = App::new(true);
    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}
