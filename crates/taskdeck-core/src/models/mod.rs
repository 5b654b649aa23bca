mod display_mode;
mod tab;
mod task;
mod timeframe;
mod user;

pub use display_mode::DisplayMode;
pub use tab::TabFilter;
pub use task::{ImageAttachment, Task, TaskDraft, TaskPatch};
pub use timeframe::Timeframe;
pub use user::UserProfile;
