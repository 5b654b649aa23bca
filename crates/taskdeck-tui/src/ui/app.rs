//! Central application state.

use tokio::sync::mpsc::Sender;

use taskdeck_core::api::{ApiClient, ApiError};
use taskdeck_core::config::CoreConfig;
use taskdeck_core::models::{TabFilter, Task, Timeframe};
use taskdeck_core::projection::project_tasks;
use taskdeck_core::session::SessionStore;
use taskdeck_core::stats::{compute_stats, TaskStats};
use taskdeck_core::store::{PreferenceStore, TaskCollection};

use crate::actions::ApiEvent;
use crate::ui::forms::{LoginForm, ProfileForm, SignupForm, TaskForm};
use crate::ui::notifications::{Notification, NotificationQueue};
use crate::ui::theme::{self, Palette};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Signup,
    Tasks,
    Analytics,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App {
    pub running: bool,
    pub pending_quit: bool,
    pub view: View,
    pub input_mode: InputMode,

    pub api: ApiClient,
    pub session: SessionStore,
    pub prefs: PreferenceStore,

    pub tasks: TaskCollection,
    pub tab: TabFilter,
    pub search_query: String,
    /// True while the search line is capturing keystrokes.
    pub searching: bool,
    pub timeframe: Timeframe,
    /// Index into the projected (tab + search) list.
    pub selected: usize,
    /// Id of the task awaiting delete confirmation.
    pub confirm_delete: Option<String>,
    pub loading_tasks: bool,

    pub login_form: LoginForm,
    pub signup_form: SignupForm,
    pub task_form: Option<TaskForm>,
    pub profile_form: ProfileForm,

    pub notifications: NotificationQueue,
    api_tx: Option<Sender<ApiEvent>>,
}

impl App {
    pub fn new(config: &CoreConfig) -> Self {
        Self {
            running: true,
            pending_quit: false,
            view: View::Login,
            input_mode: InputMode::Editing,
            api: ApiClient::new(config.api_url.clone()),
            session: SessionStore::new(&config.data_dir),
            prefs: PreferenceStore::new(&config.data_dir),
            tasks: TaskCollection::new(),
            tab: TabFilter::default(),
            search_query: String::new(),
            searching: false,
            timeframe: Timeframe::default(),
            selected: 0,
            confirm_delete: None,
            loading_tasks: false,
            login_form: LoginForm::new(),
            signup_form: SignupForm::new(),
            task_form: None,
            profile_form: ProfileForm::default(),
            notifications: NotificationQueue::new(),
            api_tx: None,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_api_tx(&mut self, tx: Sender<ApiEvent>) {
        self.api_tx = Some(tx);
    }

    pub fn api_tx(&self) -> Option<Sender<ApiEvent>> {
        self.api_tx.clone()
    }

    pub fn palette(&self) -> &'static Palette {
        theme::palette(self.prefs.display_mode())
    }

    /// Called on every tick so timed UI state can advance.
    pub fn tick(&mut self) {
        self.notifications.tick();
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn notify_api_error(&mut self, context: &str, err: &ApiError) {
        tracing::warn!(error = %err, "{}", context);
        self.notify(Notification::error(format!("{}: {}", context, err)));
    }

    // --- task list projection ---

    /// Tasks visible under the active tab and search query, in display order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        project_tasks(self.tasks.tasks(), self.tab, &self.search_query)
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.selected).copied()
    }

    pub fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn select_next(&mut self) {
        let len = self.visible_tasks().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn set_tab(&mut self, tab: TabFilter) {
        self.tab = tab;
        self.clamp_selection();
    }

    pub fn cycle_tab(&mut self) {
        self.set_tab(self.tab.cycle_next());
    }

    pub fn cycle_tab_back(&mut self) {
        self.set_tab(self.tab.cycle_prev());
    }

    /// Route a typed or pasted character into whatever field is capturing
    /// input, using the same precedence as key dispatch.
    pub fn enter_char(&mut self, c: char) {
        if let Some(form) = self.task_form.as_mut() {
            form.active_mut().push(c);
            return;
        }
        if self.searching {
            self.search_query.push(c);
            self.selected = 0;
            return;
        }
        let field = match self.view {
            View::Login => self.login_form.active_mut(),
            View::Signup => self.signup_form.active_mut(),
            View::Profile => self.profile_form.active_mut(),
            View::Tasks | View::Analytics => None,
        };
        if let Some(field) = field {
            field.push(c);
        }
    }

    pub fn start_search(&mut self) {
        self.searching = true;
        self.input_mode = InputMode::Editing;
    }

    pub fn finish_search(&mut self) {
        self.searching = false;
        self.input_mode = InputMode::Normal;
        self.clamp_selection();
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.finish_search();
    }

    // --- analytics ---

    pub fn stats(&self) -> TaskStats {
        compute_stats(self.tasks.tasks(), self.timeframe, chrono::Utc::now())
    }

    pub fn cycle_timeframe(&mut self) {
        self.timeframe = self.timeframe.cycle_next();
    }

    pub fn cycle_display_mode(&mut self) {
        self.prefs.cycle_display_mode();
    }

    // --- view transitions ---

    pub fn enter_login_view(&mut self) {
        self.view = View::Login;
        self.input_mode = InputMode::Editing;
        self.login_form = LoginForm::new();
    }

    pub fn enter_signup_view(&mut self) {
        self.view = View::Signup;
        self.input_mode = InputMode::Editing;
        self.signup_form = SignupForm::new();
    }

    pub fn enter_tasks_view(&mut self) {
        self.view = View::Tasks;
        self.input_mode = InputMode::Normal;
        self.searching = false;
        self.task_form = None;
        self.confirm_delete = None;
    }

    pub fn enter_analytics_view(&mut self) {
        self.view = View::Analytics;
        self.input_mode = InputMode::Normal;
    }

    pub fn enter_profile_view(&mut self) {
        let Some(profile) = self.session.profile() else {
            return;
        };
        self.profile_form = ProfileForm::from_profile(profile);
        self.view = View::Profile;
        self.input_mode = InputMode::Editing;
    }

    // --- task editor overlay ---

    pub fn open_create_form(&mut self) {
        self.task_form = Some(TaskForm::new());
        self.input_mode = InputMode::Editing;
    }

    pub fn open_edit_form(&mut self) {
        if let Some(task) = self.selected_task() {
            self.task_form = Some(TaskForm::edit(task));
            self.input_mode = InputMode::Editing;
        }
    }

    pub fn close_task_form(&mut self) {
        self.task_form = None;
        self.input_mode = InputMode::Normal;
    }

    /// Id the open task form is editing, if any.
    pub fn editing_task_id(&self) -> Option<&str> {
        self.task_form.as_ref()?.editing_id.as_deref()
    }

    pub fn request_delete(&mut self) {
        if let Some(task) = self.selected_task() {
            self.confirm_delete = Some(task.id.clone());
        }
    }

    // --- session lifecycle ---

    /// Forced logout after the backend rejected our token.
    pub fn invalidate_session(&mut self) {
        self.drop_session();
        self.notify(Notification::warning("Session expired, please log in again"));
    }

    pub fn logout(&mut self) {
        self.drop_session();
        self.notify(Notification::info("Logged out"));
    }

    fn drop_session(&mut self) {
        self.session.clear();
        self.api.clear_token();
        self.tasks.clear();
        self.selected = 0;
        self.search_query.clear();
        self.confirm_delete = None;
        self.loading_tasks = false;
        // Toasts do not carry across sessions
        self.notifications.clear();
        self.enter_login_view();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
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

    #[test]
    fn test_selection_follows_projection() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.tasks.replace_all(vec![
            task("1", "Buy milk", false),
            task("2", "Buy eggs", true),
            task("3", "Walk dog", false),
        ]);

        app.selected = 2;
        app.set_tab(TabFilter::Completed);
        assert_eq!(app.selected, 0);
        assert_eq!(app.selected_task().map(|t| t.id.as_str()), Some("2"));
    }

    #[test]
    fn test_select_next_stops_at_end() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.tasks
            .replace_all(vec![task("1", "a", false), task("2", "b", false)]);

        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 1);
        app.select_prev();
        app.select_prev();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_search_narrows_selection_target() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.tasks.replace_all(vec![
            task("1", "Buy milk", false),
            task("2", "Walk dog", false),
        ]);

        app.search_query = "walk".to_string();
        app.clamp_selection();
        assert_eq!(app.selected_task().map(|t| t.id.as_str()), Some("2"));
    }

    #[test]
    fn test_invalidate_session_returns_to_login() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.view = View::Tasks;
        app.tasks.replace_all(vec![task("1", "a", false)]);

        app.invalidate_session();
        assert_eq!(app.view, View::Login);
        assert_eq!(app.input_mode, InputMode::Editing);
        assert!(app.tasks.is_empty());
        assert!(app.notifications.current().is_some());
    }

    #[test]
    fn test_logout_drops_stale_toasts() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.view = View::Tasks;
        app.notify(Notification::success("Task added"));
        app.notify(Notification::success("Task updated"));

        app.logout();
        assert_eq!(
            app.notifications.current().map(|n| n.message.as_str()),
            Some("Logged out")
        );
        // Nothing from the old session queued behind it
        app.notifications.dismiss();
        assert!(app.notifications.current().is_none());
    }

    #[test]
    fn test_edit_form_opens_for_selected_task() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.tasks.replace_all(vec![task("7", "Water plants", false)]);

        app.open_edit_form();
        assert_eq!(app.editing_task_id(), Some("7"));
        assert_eq!(app.input_mode, InputMode::Editing);

        app.close_task_form();
        assert!(app.task_form.is_none());
        assert_eq!(app.input_mode, InputMode::Normal);
    }
}
