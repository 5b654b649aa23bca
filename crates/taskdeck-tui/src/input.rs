//! Keyboard dispatch. Overlays (delete confirmation, task editor, search)
//! capture keys before the per-view handlers see them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::actions;
use crate::ui::{App, View};
use taskdeck_core::models::TabFilter;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if app.confirm_delete.is_some() {
        handle_confirm_key(app, key);
        return;
    }
    if app.view == View::Tasks && app.task_form.is_some() {
        handle_task_form_key(app, key);
        return;
    }
    if app.view == View::Tasks && app.searching {
        handle_search_key(app, key);
        return;
    }

    match app.view {
        View::Login => handle_login_key(app, key),
        View::Signup => handle_signup_key(app, key),
        View::Tasks => handle_tasks_key(app, key),
        View::Analytics => handle_analytics_key(app, key),
        View::Profile => handle_profile_key(app, key),
    }
}

fn plain(key: &KeyEvent) -> bool {
    !key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            actions::confirm_pending_delete(app);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Char('q') => {
            app.confirm_delete = None;
        }
        _ => {}
    }
}

fn handle_task_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_task_form(),
        KeyCode::Enter => actions::submit_task_form(app),
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = app.task_form.as_mut() {
                form.focus_next();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = app.task_form.as_mut() {
                form.focus_prev();
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = app.task_form.as_mut() {
                form.active_mut().pop();
            }
        }
        KeyCode::Char(c) if plain(&key) => {
            if let Some(form) = app.task_form.as_mut() {
                form.active_mut().push(c);
            }
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => app.finish_search(),
        KeyCode::Backspace => {
            app.search_query.pop();
            app.selected = 0;
        }
        KeyCode::Char(c) if plain(&key) => {
            app.search_query.push(c);
            app.selected = 0;
        }
        _ => {}
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.enter_signup_view();
        }
        KeyCode::Enter => actions::submit_login(app),
        KeyCode::Tab | KeyCode::Down => app.login_form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.login_form.focus_prev(),
        KeyCode::Backspace => {
            if let Some(field) = app.login_form.active_mut() {
                field.pop();
            }
        }
        KeyCode::Char(c) if plain(&key) => {
            if let Some(field) = app.login_form.active_mut() {
                field.push(c);
            }
        }
        _ => {}
    }
}

fn handle_signup_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.enter_login_view();
        }
        KeyCode::Esc => app.enter_login_view(),
        KeyCode::Enter => actions::submit_signup(app),
        KeyCode::Tab | KeyCode::Down => app.signup_form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.signup_form.focus_prev(),
        KeyCode::Backspace => {
            if let Some(field) = app.signup_form.active_mut() {
                field.pop();
            }
        }
        KeyCode::Char(c) if plain(&key) => {
            if let Some(field) = app.signup_form.active_mut() {
                field.push(c);
            }
        }
        _ => {}
    }
}

fn handle_tasks_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char(' ') | KeyCode::Char('x') => actions::toggle_selected_task(app),
        KeyCode::Char('a') => app.open_create_form(),
        KeyCode::Char('e') => app.open_edit_form(),
        KeyCode::Char('d') => app.request_delete(),
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Tab => app.cycle_tab(),
        KeyCode::BackTab => app.cycle_tab_back(),
        KeyCode::Char('1') => app.set_tab(TabFilter::All),
        KeyCode::Char('2') => app.set_tab(TabFilter::Active),
        KeyCode::Char('3') => app.set_tab(TabFilter::Completed),
        KeyCode::Char('t') => app.cycle_display_mode(),
        KeyCode::Char('g') => app.enter_analytics_view(),
        KeyCode::Char('p') => app.enter_profile_view(),
        KeyCode::Char('r') => actions::start_load_tasks(app),
        KeyCode::Char('L') => app.logout(),
        KeyCode::Esc => {
            if !app.search_query.is_empty() {
                app.clear_search();
            }
        }
        _ => {}
    }
}

fn handle_analytics_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('g') => app.enter_tasks_view(),
        KeyCode::Tab | KeyCode::Char('w') => app.cycle_timeframe(),
        KeyCode::Char('t') => app.cycle_display_mode(),
        KeyCode::Char('r') => actions::start_load_tasks(app),
        _ => {}
    }
}

fn handle_profile_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.enter_tasks_view(),
        KeyCode::Enter => actions::submit_profile(app),
        KeyCode::Tab | KeyCode::Down => app.profile_form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.profile_form.focus_prev(),
        KeyCode::Backspace => {
            if let Some(field) = app.profile_form.active_mut() {
                field.pop();
            }
        }
        KeyCode::Char(c) if plain(&key) => {
            if let Some(field) = app.profile_form.active_mut() {
                field.push(c);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crossterm::event::KeyEvent;
    use taskdeck_core::config::CoreConfig;
    use taskdeck_core::models::Task;
    use tempfile::tempdir;

    fn test_app(dir: &std::path::Path) -> App {
        let mut app = App::new(&CoreConfig::new(dir, "http://localhost:5000"));
        app.view = View::Tasks;
        app.input_mode = crate::ui::InputMode::Normal;
        app
    }

    fn task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            completed: false,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::from(code));
    }

    #[test]
    fn test_tab_keys_switch_filter() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.tab, TabFilter::Active);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.tab, TabFilter::Completed);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.tab, TabFilter::Active);
    }

    #[test]
    fn test_search_capture_and_clear() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.tasks.replace_all(vec![task("1", "Buy milk")]);

        press(&mut app, KeyCode::Char('/'));
        assert!(app.searching);
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.search_query, "mi");

        press(&mut app, KeyCode::Enter);
        assert!(!app.searching);
        assert_eq!(app.search_query, "mi");

        press(&mut app, KeyCode::Esc);
        assert!(app.search_query.is_empty());
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.tasks.replace_all(vec![task("1", "Buy milk")]);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.confirm_delete.as_deref(), Some("1"));

        // Declining keeps the task and drops the prompt
        press(&mut app, KeyCode::Char('n'));
        assert!(app.confirm_delete.is_none());
        assert_eq!(app.tasks.len(), 1);
    }

    #[test]
    fn test_form_keys_edit_focused_field() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.open_create_form();

        press(&mut app, KeyCode::Char('h'));
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('d'));

        let form = app.task_form.as_ref().unwrap();
        assert_eq!(form.title, "hi");
        assert_eq!(form.description, "d");

        press(&mut app, KeyCode::Esc);
        assert!(app.task_form.is_none());
    }

    #[test]
    fn test_theme_key_cycles_mode() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        use taskdeck_core::models::DisplayMode;

        assert_eq!(app.prefs.display_mode(), DisplayMode::Light);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.prefs.display_mode(), DisplayMode::Dark);
    }

    #[test]
    fn test_ctrl_n_toggles_auth_views() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.enter_login_view();

        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.view, View::Signup);

        // Plain chars still type into the focused field
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.signup_form.username, "n");
    }
}
