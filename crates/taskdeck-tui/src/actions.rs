//! Background API calls and the events they resolve to.
//!
//! Every network round trip runs on a spawned task and reports back through
//! the runtime's mpsc channel as an [`ApiEvent`]. State changes only happen
//! in [`handle_api_event`], on the main loop, with the server's response in
//! hand; nothing is applied optimistically.

use std::path::Path;

use taskdeck_core::api::{ApiError, AuthSession};
use taskdeck_core::models::{ImageAttachment, Task, TaskDraft, TaskPatch, UserProfile};
use taskdeck_core::store::MergeOutcome;
use taskdeck_core::validate::{
    validate_login, validate_profile_update, validate_signup, validate_task_title,
    ValidationError,
};

use crate::ui::notifications::Notification;
use crate::ui::App;

/// Resolution of a background API round trip.
pub enum ApiEvent {
    LoggedIn(Result<AuthSession, ApiError>),
    SignedUp(Result<AuthSession, ApiError>),
    ProfileSaved(Result<UserProfile, ApiError>),
    TasksLoaded(Result<Vec<Task>, ApiError>),
    TaskCreated(Result<Task, ApiError>),
    TaskUpdated {
        id: String,
        ticket: u64,
        origin: UpdateOrigin,
        result: Result<Task, ApiError>,
    },
    TaskRemoved {
        id: String,
        result: Result<(), ApiError>,
    },
}

/// Interaction that fired a task update. Only an editor save may close the
/// task form when it lands; a toggle leaves any open edit alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOrigin {
    Editor,
    Toggle,
}

pub fn start_load_tasks(app: &mut App) {
    let Some(tx) = app.api_tx() else { return };
    app.loading_tasks = true;
    let api = app.api.clone();
    tokio::spawn(async move {
        let result = api.list_tasks().await;
        let _ = tx.send(ApiEvent::TasksLoaded(result)).await;
    });
}

pub fn submit_login(app: &mut App) {
    let email = app.login_form.email.clone();
    let password = app.login_form.password.clone();
    if let Err(err) = validate_login(&email, &password) {
        app.notify(Notification::error(err.to_string()));
        return;
    }

    let Some(tx) = app.api_tx() else { return };
    let api = app.api.clone();
    tokio::spawn(async move {
        let result = api.login(&email, &password).await;
        let _ = tx.send(ApiEvent::LoggedIn(result)).await;
    });
}

pub fn submit_signup(app: &mut App) {
    let username = app.signup_form.username.clone();
    let email = app.signup_form.email.clone();
    let password = app.signup_form.password.clone();
    let confirm = app.signup_form.confirm.clone();
    if let Err(err) = validate_signup(&username, &email, &password, &confirm) {
        app.notify(Notification::error(err.to_string()));
        return;
    }

    let Some(tx) = app.api_tx() else { return };
    let api = app.api.clone();
    tokio::spawn(async move {
        let result = api.signup(&username, &email, &password).await;
        let _ = tx.send(ApiEvent::SignedUp(result)).await;
    });
}

pub fn submit_profile(app: &mut App) {
    let username = app.profile_form.username.clone();
    let email = app.profile_form.email.clone();
    if app.profile_form.password != app.profile_form.confirm {
        app.notify(Notification::error(
            ValidationError::PasswordMismatch.to_string(),
        ));
        return;
    }
    if let Err(err) = validate_profile_update(&username, &email, &app.profile_form.password) {
        app.notify(Notification::error(err.to_string()));
        return;
    }
    let password =
        (!app.profile_form.password.is_empty()).then(|| app.profile_form.password.clone());

    let Some(tx) = app.api_tx() else { return };
    let api = app.api.clone();
    tokio::spawn(async move {
        let result = api
            .update_profile(&username, &email, password.as_deref())
            .await;
        let _ = tx.send(ApiEvent::ProfileSaved(result)).await;
    });
}

/// Submit the open task form, as a create or an update depending on how it
/// was opened. Validation failures and unreadable image paths leave the form
/// open for correction.
pub fn submit_task_form(app: &mut App) {
    let Some(form) = app.task_form.clone() else {
        return;
    };
    if let Err(err) = validate_task_title(&form.title) {
        app.notify(Notification::error(err.to_string()));
        return;
    }
    let description = (!form.description.is_empty()).then(|| form.description.clone());

    match &form.editing_id {
        Some(id) => {
            let id = id.clone();
            let ticket = app.tasks.begin_mutation(&id);
            let patch = TaskPatch::fields(form.title.clone(), description);

            let Some(tx) = app.api_tx() else { return };
            let api = app.api.clone();
            tokio::spawn(async move {
                let result = api.update_task(&id, &patch).await;
                let _ = tx
                    .send(ApiEvent::TaskUpdated {
                        id,
                        ticket,
                        origin: UpdateOrigin::Editor,
                        result,
                    })
                    .await;
            });
        }
        None => {
            let image = if form.image_path.trim().is_empty() {
                None
            } else {
                match ImageAttachment::read(Path::new(form.image_path.trim())) {
                    Ok(attachment) => Some(attachment),
                    Err(err) => {
                        app.notify(Notification::error(format!("Could not read image: {}", err)));
                        return;
                    }
                }
            };
            let draft = TaskDraft {
                title: form.title.clone(),
                description,
                image,
            };

            let Some(tx) = app.api_tx() else { return };
            let api = app.api.clone();
            tokio::spawn(async move {
                let result = api.create_task(&draft).await;
                let _ = tx.send(ApiEvent::TaskCreated(result)).await;
            });
        }
    }
}

pub fn toggle_selected_task(app: &mut App) {
    let Some((id, completed)) = app.selected_task().map(|t| (t.id.clone(), t.completed)) else {
        return;
    };
    let ticket = app.tasks.begin_mutation(&id);
    let patch = TaskPatch::completion(!completed);

    let Some(tx) = app.api_tx() else { return };
    let api = app.api.clone();
    tokio::spawn(async move {
        let result = api.update_task(&id, &patch).await;
        let _ = tx
            .send(ApiEvent::TaskUpdated {
                id,
                ticket,
                origin: UpdateOrigin::Toggle,
                result,
            })
            .await;
    });
}

/// Fire the delete the user just confirmed.
pub fn confirm_pending_delete(app: &mut App) {
    let Some(id) = app.confirm_delete.take() else {
        return;
    };

    let Some(tx) = app.api_tx() else { return };
    let api = app.api.clone();
    tokio::spawn(async move {
        let result = api.delete_task(&id).await;
        let _ = tx.send(ApiEvent::TaskRemoved { id, result }).await;
    });
}

/// Apply a resolved round trip to app state.
pub fn handle_api_event(app: &mut App, event: ApiEvent) {
    match event {
        ApiEvent::LoggedIn(result) => match result {
            Ok(auth) => {
                let greeting = format!("Welcome back, {}", auth.profile.display_name());
                adopt_session(app, auth, greeting);
            }
            Err(err) => app.notify_api_error("Login failed", &err),
        },
        ApiEvent::SignedUp(result) => match result {
            Ok(auth) => {
                let greeting = format!("Account created for {}", auth.profile.display_name());
                adopt_session(app, auth, greeting);
            }
            Err(err) => app.notify_api_error("Signup failed", &err),
        },
        ApiEvent::ProfileSaved(result) => match result {
            Ok(profile) => {
                // No token reissue on this path; keep the one we have.
                if let Some(token) = app.session.token().map(str::to_string) {
                    app.session.establish(token, profile);
                }
                app.notify(Notification::success("Profile updated"));
                app.enter_tasks_view();
            }
            Err(err) => app.notify_api_error("Could not update profile", &err),
        },
        ApiEvent::TasksLoaded(result) => {
            app.loading_tasks = false;
            match result {
                Ok(tasks) => {
                    app.tasks.replace_all(tasks);
                    app.clamp_selection();
                }
                // A rejected load means the whole session is no good.
                Err(ApiError::Unauthorized) => app.invalidate_session(),
                Err(err) => app.notify_api_error("Could not load tasks", &err),
            }
        }
        ApiEvent::TaskCreated(result) => match result {
            Ok(task) => {
                app.tasks.insert_new(task);
                app.close_task_form();
                app.notify(Notification::success("Task added"));
            }
            Err(err) => app.notify_api_error("Could not add task", &err),
        },
        ApiEvent::TaskUpdated {
            id,
            ticket,
            origin,
            result,
        } => match result {
            Ok(task) => {
                let outcome = app.tasks.commit_update(&id, ticket, task);
                if outcome == MergeOutcome::Applied
                    && origin == UpdateOrigin::Editor
                    && app.editing_task_id() == Some(id.as_str())
                {
                    app.close_task_form();
                    app.notify(Notification::success("Task updated"));
                }
                app.clamp_selection();
            }
            Err(err) => app.notify_api_error("Could not update task", &err),
        },
        ApiEvent::TaskRemoved { id, result } => match result {
            Ok(()) => {
                app.tasks.remove(&id);
                app.clamp_selection();
                app.notify(Notification::success("Task deleted"));
            }
            Err(err) => app.notify_api_error("Could not delete task", &err),
        },
    }
}

fn adopt_session(app: &mut App, auth: AuthSession, greeting: String) {
    app.api.set_token(auth.token.clone());
    app.session.establish(auth.token, auth.profile);
    app.notify(Notification::success(greeting));
    app.enter_tasks_view();
    start_load_tasks(app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use taskdeck_core::config::CoreConfig;
    use taskdeck_core::models::UserProfile;
    use tempfile::tempdir;

    fn test_app(dir: &std::path::Path) -> App {
        App::new(&CoreConfig::new(dir, "http://localhost:5000"))
    }

    fn task(id: &str, title: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            completed,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    fn auth() -> AuthSession {
        AuthSession {
            token: "tok-1".to_string(),
            profile: UserProfile {
                id: "u1".to_string(),
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
            },
        }
    }

    #[test]
    fn test_login_success_establishes_session() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());

        handle_api_event(&mut app, ApiEvent::LoggedIn(Ok(auth())));
        assert!(app.session.is_authenticated());
        assert!(app.api.has_token());
        assert_eq!(app.view, crate::ui::View::Tasks);
    }

    #[test]
    fn test_login_failure_stays_on_login() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());

        handle_api_event(
            &mut app,
            ApiEvent::LoggedIn(Err(ApiError::Api {
                status: 400,
                message: "invalid credentials".to_string(),
            })),
        );
        assert!(!app.session.is_authenticated());
        assert_eq!(app.view, crate::ui::View::Login);
        assert!(app
            .notifications
            .current()
            .map(|n| n.message.contains("invalid credentials"))
            .unwrap_or(false));
    }

    #[test]
    fn test_rejected_load_invalidates_session() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        handle_api_event(&mut app, ApiEvent::LoggedIn(Ok(auth())));
        app.tasks.replace_all(vec![task("1", "a", false)]);

        handle_api_event(&mut app, ApiEvent::TasksLoaded(Err(ApiError::Unauthorized)));
        assert!(!app.session.is_authenticated());
        assert!(!app.api.has_token());
        assert!(app.tasks.is_empty());
        assert_eq!(app.view, crate::ui::View::Login);
    }

    #[test]
    fn test_rejected_mutation_keeps_session() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        handle_api_event(&mut app, ApiEvent::LoggedIn(Ok(auth())));
        app.tasks.replace_all(vec![task("1", "a", false)]);

        handle_api_event(
            &mut app,
            ApiEvent::TaskUpdated {
                id: "1".to_string(),
                ticket: 1,
                origin: UpdateOrigin::Toggle,
                result: Err(ApiError::Unauthorized),
            },
        );
        assert!(app.session.is_authenticated());
        assert_eq!(app.tasks.len(), 1);
    }

    #[test]
    fn test_created_task_prepends() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.tasks.replace_all(vec![task("1", "old", false)]);

        handle_api_event(&mut app, ApiEvent::TaskCreated(Ok(task("2", "new", false))));
        assert_eq!(app.tasks.tasks()[0].id, "2");
    }

    #[test]
    fn test_failed_create_leaves_collection_unchanged() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.tasks.replace_all(vec![task("1", "old", false)]);
        app.open_create_form();

        handle_api_event(
            &mut app,
            ApiEvent::TaskCreated(Err(ApiError::Api {
                status: 500,
                message: "boom".to_string(),
            })),
        );
        assert_eq!(app.tasks.len(), 1);
        // The form stays open for another attempt
        assert!(app.task_form.is_some());
    }

    #[test]
    fn test_update_closes_matching_edit_form() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.tasks.replace_all(vec![task("1", "old", false)]);
        app.open_edit_form();
        let ticket = app.tasks.begin_mutation("1");

        handle_api_event(
            &mut app,
            ApiEvent::TaskUpdated {
                id: "1".to_string(),
                ticket,
                origin: UpdateOrigin::Editor,
                result: Ok(task("1", "renamed", false)),
            },
        );
        assert!(app.task_form.is_none());
        assert_eq!(app.tasks.get("1").unwrap().title, "renamed");
    }

    #[test]
    fn test_toggle_landing_keeps_edit_form_open() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.tasks.replace_all(vec![task("1", "old", false)]);

        // Toggle fired first, then the user opened the editor on the same task
        let ticket = app.tasks.begin_mutation("1");
        app.open_edit_form();

        handle_api_event(
            &mut app,
            ApiEvent::TaskUpdated {
                id: "1".to_string(),
                ticket,
                origin: UpdateOrigin::Toggle,
                result: Ok(task("1", "old", true)),
            },
        );
        // The completion change lands but the in-progress edit survives
        assert_eq!(app.editing_task_id(), Some("1"));
        assert!(app.tasks.get("1").unwrap().completed);
    }

    #[test]
    fn test_remove_clamps_selection() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.tasks
            .replace_all(vec![task("1", "a", false), task("2", "b", false)]);
        app.selected = 1;

        handle_api_event(
            &mut app,
            ApiEvent::TaskRemoved {
                id: "2".to_string(),
                result: Ok(()),
            },
        );
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_profile_save_keeps_token() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        handle_api_event(&mut app, ApiEvent::LoggedIn(Ok(auth())));

        let renamed = UserProfile {
            id: "u1".to_string(),
            username: "ada2".to_string(),
            email: "ada@example.com".to_string(),
        };
        handle_api_event(&mut app, ApiEvent::ProfileSaved(Ok(renamed)));
        assert_eq!(app.session.token(), Some("tok-1"));
        assert_eq!(
            app.session.profile().map(|p| p.username.as_str()),
            Some("ada2")
        );
    }
}
