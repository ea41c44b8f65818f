use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Focus};

/// Route a key event to the app.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.focus() {
        Focus::Counter => handle_counter_key(app, key),
        Focus::Input => handle_input_key(app, key),
    }
}

fn handle_counter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => app.increment(),
        KeyCode::Char('-') | KeyCode::Down => app.decrement(),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Delete => app.reset(),
        KeyCode::Char('i') | KeyCode::Tab => app.focus_input(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_input(),
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Backspace => app.backspace_input(),
        KeyCode::Tab => app.cancel_input(),
        KeyCode::Char(ch) => app.push_input(ch),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use crossterm::event::KeyEventState;

    fn make_app() -> App {
        App::new(Store::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn plus_and_minus_move_the_counter() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('+')));
        handle_key(&mut app, press(KeyCode::Char('+')));
        handle_key(&mut app, press(KeyCode::Char('-')));
        assert_eq!(app.value(), 1);
    }

    #[test]
    fn arrows_move_the_counter() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Up));
        handle_key(&mut app, press(KeyCode::Up));
        handle_key(&mut app, press(KeyCode::Down));
        assert_eq!(app.value(), 1);
    }

    #[test]
    fn r_resets() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Up));
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert_eq!(app.value(), 0);
    }

    #[test]
    fn release_events_ignored() {
        let mut app = make_app();
        let mut key = press(KeyCode::Up);
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert_eq!(app.value(), 0);
    }

    #[test]
    fn q_quits_from_counter_focus() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_c_quits_from_any_focus() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('i')));
        handle_key(&mut app, ctrl('c'));
        assert!(app.should_quit());
    }

    #[test]
    fn typing_a_value_and_committing() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('i')));
        assert_eq!(app.focus(), Focus::Input);
        handle_key(&mut app, press(KeyCode::Char('4')));
        handle_key(&mut app, press(KeyCode::Char('2')));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.value(), 42);
        assert_eq!(app.focus(), Focus::Counter);
    }

    #[test]
    fn minus_edits_the_field_while_typing() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('i')));
        handle_key(&mut app, press(KeyCode::Char('-')));
        handle_key(&mut app, press(KeyCode::Char('7')));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.value(), -7);
    }

    #[test]
    fn esc_cancels_editing_without_dispatch() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('i')));
        handle_key(&mut app, press(KeyCode::Char('9')));
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.value(), 0);
        assert_eq!(app.focus(), Focus::Counter);
        assert!(!app.should_quit());
    }

    #[test]
    fn q_edits_nothing_while_typing() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('i')));
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.input(), "");
    }
}
