use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::components::{render_hints, render_statusbar, truncate_with_ellipsis};
use crate::ui::views::{
    render_analytics, render_login, render_profile, render_signup, render_task_form, render_tasks,
};
use crate::ui::{App, View};

pub(crate) fn render(f: &mut Frame, app: &App) {
    let palette = app.palette();
    let bg = Block::default().style(Style::default().bg(palette.bg));
    f.render_widget(bg, f.area());

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(f.area());

    // Header
    let chrome_color = if app.pending_quit {
        palette.error
    } else {
        palette.accent
    };
    let title = match app.view {
        View::Login => "TaskDeck · Sign in",
        View::Signup => "TaskDeck · Create account",
        View::Tasks => "TaskDeck · Tasks",
        View::Analytics => "TaskDeck · Analytics",
        View::Profile => "TaskDeck · Profile",
    };
    let mut header_spans = vec![Span::styled(
        format!(" {}", title),
        Style::default()
            .fg(chrome_color)
            .add_modifier(Modifier::BOLD),
    )];
    if app.loading_tasks {
        header_spans.push(Span::styled(
            "  loading...",
            Style::default().fg(palette.text_dim),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(header_spans)), chunks[0]);

    // Main content
    match app.view {
        View::Login => render_login(f, app, chunks[1]),
        View::Signup => render_signup(f, app, chunks[1]),
        View::Tasks => render_tasks(f, app, chunks[1]),
        View::Analytics => render_analytics(f, app, chunks[1]),
        View::Profile => render_profile(f, app, chunks[1]),
    }

    // Hint line, except when a delete is waiting on a y/n
    if let Some(id) = &app.confirm_delete {
        let title = app
            .tasks
            .get(id)
            .map(|t| truncate_with_ellipsis(&t.title, 30))
            .unwrap_or_else(|| "this task".to_string());
        let prompt = Line::from(vec![
            Span::styled(
                format!(" Delete \"{}\"? ", title),
                Style::default()
                    .fg(palette.error)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("y", Style::default().fg(palette.accent)),
            Span::styled(" confirm · ", Style::default().fg(palette.text_dim)),
            Span::styled("n", Style::default().fg(palette.accent)),
            Span::styled(" cancel", Style::default().fg(palette.text_dim)),
        ]);
        f.render_widget(Paragraph::new(prompt), chunks[2]);
    } else {
        render_hints(f, chunks[2], palette, &hints_for(app));
    }

    render_statusbar(f, chunks[3], app);

    // Overlays last
    if app.view == View::Tasks {
        if let Some(form) = &app.task_form {
            render_task_form(f, app, form, f.area());
        }
    }
}

fn hints_for(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.view == View::Tasks && app.task_form.is_some() {
        return vec![("enter", "save"), ("tab", "next field"), ("esc", "cancel")];
    }
    if app.view == View::Tasks && app.searching {
        return vec![("enter", "apply"), ("esc", "clear")];
    }
    match app.view {
        View::Login => vec![
            ("enter", "sign in"),
            ("tab", "next field"),
            ("ctrl+n", "sign up"),
        ],
        View::Signup => vec![
            ("enter", "create account"),
            ("tab", "next field"),
            ("esc", "back"),
        ],
        View::Tasks => vec![
            ("a", "add"),
            ("e", "edit"),
            ("d", "delete"),
            ("space", "toggle"),
            ("/", "search"),
            ("tab", "filter"),
            ("r", "reload"),
            ("g", "analytics"),
            ("p", "profile"),
            ("t", "theme"),
            ("L", "logout"),
        ],
        View::Analytics => vec![
            ("tab", "window"),
            ("r", "reload"),
            ("t", "theme"),
            ("g", "back"),
        ],
        View::Profile => vec![("enter", "save"), ("tab", "next field"), ("esc", "back")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_core::config::CoreConfig;
    use tempfile::tempdir;

    fn test_app(dir: &std::path::Path, view: View) -> App {
        let mut app = App::new(&CoreConfig::new(dir, "http://localhost:5000"));
        app.view = view;
        app
    }

    #[test]
    fn test_tasks_hints_cover_session_keys() {
        let dir = tempdir().unwrap();
        let app = test_app(dir.path(), View::Tasks);

        let hints = hints_for(&app);
        for key in ["r", "L", "space", "/"] {
            assert!(
                hints.iter().any(|(k, _)| *k == key),
                "tasks footer is missing a hint for {}",
                key
            );
        }
    }

    #[test]
    fn test_analytics_hints_cover_reload() {
        let dir = tempdir().unwrap();
        let app = test_app(dir.path(), View::Analytics);
        assert!(hints_for(&app).iter().any(|(k, _)| *k == "r"));
    }
}
