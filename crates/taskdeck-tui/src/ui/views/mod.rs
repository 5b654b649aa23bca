pub mod analytics;
pub mod login;
pub mod profile;
pub mod signup;
pub mod tasks;

pub use analytics::render_analytics;
pub use login::render_login;
pub use profile::render_profile;
pub use signup::render_signup;
pub use tasks::{render_task_form, render_tasks};
