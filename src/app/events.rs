//! Event handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::state::{AppState, HOME_ROUTE, Mode, Shell};

/// Handle a key event
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // An open modal listens on the hub and sees keys before anything else.
    // The most recent listener receives the key.
    if let Some(&listener) = state.hub.dispatch(key.code).last() {
        if let Some(shell) = state.shell_for_listener(listener) {
            handle_modal_key(state, shell, key);
        }
        return;
    }

    match state.mode {
        Mode::Compose => handle_compose_key(state, key),
        Mode::Normal => handle_normal_key(state, key),
    }
}

/// Handle a mouse event
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        state.click(mouse.column, mouse.row);
    }
}

fn handle_modal_key(state: &mut AppState, shell: Shell, key: KeyEvent) {
    let authenticated = state.is_authenticated();
    if state.shell_mut(shell).handle_modal_key(key.code) {
        return;
    }
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => state.shell_mut(shell).cursor_next(authenticated),
        KeyCode::Up | KeyCode::Char('k') => state.shell_mut(shell).cursor_prev(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.activate_drawer(shell);
            if state.route == "login" && !state.is_authenticated() {
                state.login();
                state.navigate(HOME_ROUTE);
            }
        }
        KeyCode::Char('p') if shell == Shell::Sidebar => state.toggle_sidebar_sheet(),
        KeyCode::Char('a') if shell == Shell::Header => state.toggle_header_drawer(),
        _ => {}
    }
}

fn handle_normal_key(state: &mut AppState, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Char('q')) => {
            state.should_quit = true;
        }

        // Sidebar link focus
        (_, KeyCode::Tab) => state.sidebar.focus_next(),
        (_, KeyCode::BackTab) => state.sidebar.focus_prev(),
        (_, KeyCode::Enter) => {
            if let Some(route) = state.sidebar.focused_link().map(|l| l.route.clone()) {
                state.navigate(&route);
            }
        }

        // Feed
        (_, KeyCode::Char('j') | KeyCode::Down) => state.select_next_post(),
        (_, KeyCode::Char('k') | KeyCode::Up) => state.select_prev_post(),
        (_, KeyCode::Char('g')) => state.selected_post = 0,
        (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
            if !state.feed.is_empty() {
                state.selected_post = state.feed.len() - 1;
            }
        }

        // Composer
        (_, KeyCode::Char('i' | 'n')) => {
            if !state.on_home() {
                state.navigate(HOME_ROUTE);
            }
            state.open_compose();
        }

        // Modals
        (_, KeyCode::Char('p')) => state.toggle_sidebar_sheet(),
        (_, KeyCode::Char('a')) => state.toggle_header_drawer(),

        (_, KeyCode::Esc) => {
            state.sidebar.blur_all();
            state.clear_status();
        }

        _ => {}
    }
}

fn handle_compose_key(state: &mut AppState, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => state.close_compose(),
        // Terminals without keyboard enhancement report Ctrl+Enter as a plain
        // Enter, so Alt+Enter is accepted too
        (KeyModifiers::CONTROL | KeyModifiers::ALT, KeyCode::Enter) => state.hotkey_submit(),
        (KeyModifiers::CONTROL, KeyCode::Char('s')) => state.submit_post(),
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => state.should_quit = true,
        (_, KeyCode::Enter) => state.composer.insert_newline(),
        (_, KeyCode::Backspace) => state.composer.pop_char(),
        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => state.composer.push_char(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::seed::Seed;

    fn state() -> AppState {
        AppState::from_seed(Config::default(), Seed::builtin())
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_compose_and_submit() {
        let mut state = state();
        let before = state.feed.len();
        press(&mut state, KeyCode::Char('i'));
        assert_eq!(state.mode, Mode::Compose);

        type_text(&mut state, "hi there");
        press(&mut state, KeyCode::Backspace);
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
        );

        assert_eq!(state.feed.len(), before + 1);
        assert_eq!(state.feed.get(0).unwrap().content, "hi ther");
        assert!(state.composer.draft().content.is_empty());
        assert_eq!(state.mode, Mode::Compose);
    }

    #[test]
    fn test_ctrl_enter_keeps_draft() {
        let mut state = state();
        press(&mut state, KeyCode::Char('n'));
        type_text(&mut state, "again");
        handle_key(&mut state, KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL));

        assert_eq!(state.feed.get(0).unwrap().content, "again");
        assert_eq!(state.composer.draft().content, "again");
    }

    #[test]
    fn test_alt_enter_is_quick_post() {
        let mut state = state();
        let before = state.feed.len();
        press(&mut state, KeyCode::Char('i'));
        type_text(&mut state, "quick");
        handle_key(&mut state, KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT));

        assert_eq!(state.feed.len(), before + 1);
        assert_eq!(state.feed.get(0).unwrap().content, "quick");
        assert_eq!(state.composer.draft().content, "quick");

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.feed.len(), before + 1);
        assert_eq!(state.composer.draft().content, "quick\n");
    }

    #[test]
    fn test_quit_key_is_text_in_composer() {
        let mut state = state();
        press(&mut state, KeyCode::Char('i'));
        press(&mut state, KeyCode::Char('q'));
        assert!(!state.should_quit);
        assert_eq!(state.composer.draft().content, "q");

        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Char('q'));
        assert!(state.should_quit);
    }

    #[test]
    fn test_escape_closes_modal_before_anything_else() {
        let mut state = state();
        press(&mut state, KeyCode::Char('p'));
        assert!(state.sidebar.modal().is_open());
        assert_eq!(state.hub.listener_count(), 1);

        press(&mut state, KeyCode::Esc);
        assert!(!state.sidebar.modal().is_open());
        assert_eq!(state.hub.listener_count(), 0);

        // Second Escape reaches normal mode and changes no modal
        press(&mut state, KeyCode::Esc);
        assert!(!state.sidebar.modal().is_open());
    }

    #[test]
    fn test_modal_swallows_typing() {
        let mut state = state();
        press(&mut state, KeyCode::Char('a'));
        press(&mut state, KeyCode::Char('q'));
        assert!(!state.should_quit);
        assert!(state.header.modal().is_open());
    }

    #[test]
    fn test_sheet_logout_and_login() {
        let mut state = state();
        press(&mut state, KeyCode::Char('p'));
        press(&mut state, KeyCode::Char('j'));
        press(&mut state, KeyCode::Enter);
        assert!(!state.is_authenticated());
        assert!(!state.sidebar.modal().is_open());

        press(&mut state, KeyCode::Char('p'));
        press(&mut state, KeyCode::Char('j'));
        press(&mut state, KeyCode::Enter);
        assert!(state.is_authenticated());
        assert!(state.on_home());
    }

    #[test]
    fn test_drawer_link_navigates() {
        let mut state = state();
        press(&mut state, KeyCode::Char('a'));
        assert!(state.header.modal().is_open());
        assert_eq!(state.header.focused_link().unwrap().label, "Profile");

        press(&mut state, KeyCode::Char('j'));
        press(&mut state, KeyCode::Down);
        assert_eq!(state.header.focused_link().unwrap().id, "lists");
        assert!(!state.header.is_focused("blue"));

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.route, "lists");
        assert!(!state.header.modal().is_open());
        assert_eq!(state.hub.listener_count(), 0);
        assert!(state.header.focused_link().is_none());
    }

    #[test]
    fn test_keys_go_to_the_latest_listener() {
        let mut state = state();
        press(&mut state, KeyCode::Char('p'));
        let other = state.hub.subscribe();

        press(&mut state, KeyCode::Esc);
        assert!(state.sidebar.modal().is_open());

        drop(other);
        press(&mut state, KeyCode::Esc);
        assert!(!state.sidebar.modal().is_open());
    }

    #[test]
    fn test_tab_focus_and_navigate() {
        let mut state = state();
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Tab);
        assert!(state.sidebar.is_focused("explorer"));
        assert!(!state.sidebar.is_focused("home"));

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.route, "explorer");
        assert_eq!(state.route_title(), "Explore");
    }

    #[test]
    fn test_mouse_click_on_overlay() {
        let mut state = state();
        press(&mut state, KeyCode::Char('p'));
        state.modal_areas.sidebar = Some(ratatui::layout::Rect::new(5, 5, 10, 3));
        handle_mouse(
            &mut state,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 40,
                row: 20,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert!(!state.sidebar.modal().is_open());
    }
}
