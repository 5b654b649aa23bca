//! Editable form state for the login, signup, task, and profile screens.

use taskdeck_core::models::{Task, UserProfile};

/// Which field is focused on the login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    pub fn next(&self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }

    pub fn prev(&self) -> Self {
        // Two fields, so forward and back are the same hop.
        self.next()
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: Option<LoginField>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            focus: Some(LoginField::Email),
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = Some(self.focus.map_or(LoginField::Email, |f| f.next()));
    }

    pub fn focus_prev(&mut self) {
        self.focus = Some(self.focus.map_or(LoginField::Password, |f| f.prev()));
    }

    pub fn active_mut(&mut self) -> Option<&mut String> {
        match self.focus? {
            LoginField::Email => Some(&mut self.email),
            LoginField::Password => Some(&mut self.password),
        }
    }
}

/// Which field is focused on the signup screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    Username,
    Email,
    Password,
    Confirm,
}

impl SignupField {
    pub fn next(&self) -> Self {
        match self {
            SignupField::Username => SignupField::Email,
            SignupField::Email => SignupField::Password,
            SignupField::Password => SignupField::Confirm,
            SignupField::Confirm => SignupField::Username,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            SignupField::Username => SignupField::Confirm,
            SignupField::Email => SignupField::Username,
            SignupField::Password => SignupField::Email,
            SignupField::Confirm => SignupField::Password,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub focus: Option<SignupField>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            confirm: String::new(),
            focus: Some(SignupField::Username),
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = Some(self.focus.map_or(SignupField::Username, |f| f.next()));
    }

    pub fn focus_prev(&mut self) {
        self.focus = Some(self.focus.map_or(SignupField::Confirm, |f| f.prev()));
    }

    pub fn active_mut(&mut self) -> Option<&mut String> {
        match self.focus? {
            SignupField::Username => Some(&mut self.username),
            SignupField::Email => Some(&mut self.email),
            SignupField::Password => Some(&mut self.password),
            SignupField::Confirm => Some(&mut self.confirm),
        }
    }
}

/// Which field is focused in the task editor overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    Description,
    /// Path to an image to attach. Only offered when creating; the update
    /// endpoint has no attachment support.
    Image,
}

impl TaskField {
    pub fn next(&self) -> Self {
        match self {
            TaskField::Title => TaskField::Description,
            TaskField::Description => TaskField::Image,
            TaskField::Image => TaskField::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            TaskField::Title => TaskField::Image,
            TaskField::Description => TaskField::Title,
            TaskField::Image => TaskField::Description,
        }
    }
}

/// State for the create/edit task overlay
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub image_path: String,
    pub focus: TaskField,
    /// Set when editing an existing task; `None` means create.
    pub editing_id: Option<String>,
}

impl TaskForm {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            image_path: String::new(),
            focus: TaskField::Title,
            editing_id: None,
        }
    }

    /// Pre-populate the form from an existing task.
    pub fn edit(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            image_path: String::new(),
            focus: TaskField::Title,
            editing_id: Some(task.id.clone()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn title_label(&self) -> &'static str {
        if self.is_editing() {
            "Edit Task"
        } else {
            "New Task"
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        if self.is_editing() && self.focus == TaskField::Image {
            self.focus = self.focus.next();
        }
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        if self.is_editing() && self.focus == TaskField::Image {
            self.focus = self.focus.prev();
        }
    }

    pub fn active_mut(&mut self) -> &mut String {
        match self.focus {
            TaskField::Title => &mut self.title,
            TaskField::Description => &mut self.description,
            TaskField::Image => &mut self.image_path,
        }
    }
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Which field is focused on the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Username,
    Email,
    Password,
    Confirm,
}

impl ProfileField {
    pub fn next(&self) -> Self {
        match self {
            ProfileField::Username => ProfileField::Email,
            ProfileField::Email => ProfileField::Password,
            ProfileField::Password => ProfileField::Confirm,
            ProfileField::Confirm => ProfileField::Username,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            ProfileField::Username => ProfileField::Confirm,
            ProfileField::Email => ProfileField::Username,
            ProfileField::Password => ProfileField::Email,
            ProfileField::Confirm => ProfileField::Password,
        }
    }
}

/// State for the profile editor. Leaving the password blank keeps the
/// current one.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub focus: Option<ProfileField>,
}

impl ProfileForm {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            username: profile.username.clone(),
            email: profile.email.clone(),
            password: String::new(),
            confirm: String::new(),
            focus: Some(ProfileField::Username),
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = Some(self.focus.map_or(ProfileField::Username, |f| f.next()));
    }

    pub fn focus_prev(&mut self) {
        self.focus = Some(self.focus.map_or(ProfileField::Confirm, |f| f.prev()));
    }

    pub fn active_mut(&mut self) -> Option<&mut String> {
        match self.focus? {
            ProfileField::Username => Some(&mut self.username),
            ProfileField::Email => Some(&mut self.email),
            ProfileField::Password => Some(&mut self.password),
            ProfileField::Confirm => Some(&mut self.confirm),
        }
    }
}
