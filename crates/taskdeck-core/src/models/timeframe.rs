/// Analytics window, counted in whole days back from now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Timeframe {
    #[default]
    All,
    Day,
    Week,
    Month,
}

impl Timeframe {
    pub const ORDER: [Timeframe; 4] = [
        Timeframe::All,
        Timeframe::Day,
        Timeframe::Week,
        Timeframe::Month,
    ];

    /// Window size in days; `None` passes every task.
    pub fn days(&self) -> Option<i64> {
        match self {
            Self::All => None,
            Self::Day => Some(1),
            Self::Week => Some(7),
            Self::Month => Some(30),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All time",
            Self::Day => "24h",
            Self::Week => "7d",
            Self::Month => "30d",
        }
    }

    pub fn cycle_next(self) -> Self {
        match self {
            Self::All => Self::Day,
            Self::Day => Self::Week,
            Self::Week => Self::Month,
            Self::Month => Self::All,
        }
    }
}
