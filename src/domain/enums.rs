/// One timed interval of a pomodoro cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Work,
    ShortBreak,
    LongBreak,
}

impl Phase {
    /// Tag used in log lines, e.g. "short_break"
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::ShortBreak => "short_break",
            Self::LongBreak => "long_break",
        }
    }

    /// Get the display name for this phase
    pub fn name(&self) -> &'static str {
        match self {
            Self::Work => "Work Session",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Announcement shown when the phase begins
    pub fn announcement(&self) -> &'static str {
        match self {
            Self::Work => "Time to focus.",
            Self::ShortBreak => "Take a short break.",
            Self::LongBreak => "Great job! Take a long break.",
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }
}
