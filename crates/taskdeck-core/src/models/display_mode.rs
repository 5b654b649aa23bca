use serde::{Deserialize, Serialize};

/// The three visual modes. Cycles in a fixed order and wraps; the active
/// value is persisted by the preference store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
    Neon,
}

impl DisplayMode {
    pub fn cycle_next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Neon,
            Self::Neon => Self::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Neon => "neon",
        }
    }
}
