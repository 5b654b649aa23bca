mod preferences;
mod task_collection;

pub use preferences::{PreferenceStore, Preferences};
pub use task_collection::{MergeOutcome, TaskCollection};
