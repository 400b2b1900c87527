use super::enums::Phase;

/// Phase lengths in minutes and the number of work sessions per cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PomodoroSettings {
    pub work_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
    pub sessions: u32,
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            sessions: 4,
        }
    }
}

impl PomodoroSettings {
    /// Length of a phase in seconds
    pub fn duration_secs(&self, phase: Phase) -> u64 {
        let minutes = match phase {
            Phase::Work => self.work_minutes,
            Phase::ShortBreak => self.short_break_minutes,
            Phase::LongBreak => self.long_break_minutes,
        };
        u64::from(minutes) * 60
    }
}

/// What a single tick did to the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is not running; nothing changed
    Idle,
    /// One second was taken off the current phase
    Counting,
    /// The previous phase ran out and this one started
    PhaseChanged(Phase),
    /// The long break ended; the timer is back at its initial state
    Completed,
}

/// Pomodoro countdown driven by one `tick` per elapsed second.
///
/// Work is followed by a short break until the last session, whose work
/// phase is followed by the long break. When the long break runs out the
/// timer resets itself and stays stopped until started again.
#[derive(Debug, Clone)]
pub struct Pomodoro {
    settings: PomodoroSettings,
    phase: Phase,
    current_session: u32,
    remaining_seconds: u64,
    running: bool,
}

impl Pomodoro {
    pub fn new(settings: PomodoroSettings) -> Self {
        Self {
            settings,
            phase: Phase::Work,
            current_session: 0,
            remaining_seconds: 0,
            running: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Zero-based index of the current work session
    pub fn current_session(&self) -> u32 {
        self.current_session
    }

    pub fn total_sessions(&self) -> u32 {
        self.settings.sessions.max(1)
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start or resume. A fresh phase is loaded only when nothing remains.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        if self.remaining_seconds == 0 {
            self.load_current_phase();
        }
        self.running = true;
    }

    /// Pause, keeping the remaining time
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Back to the initial idle state regardless of phase
    pub fn reset(&mut self) {
        self.running = false;
        self.phase = Phase::Work;
        self.current_session = 0;
        self.remaining_seconds = 0;
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return TickOutcome::Counting;
        }

        self.advance()
    }

    /// End the current phase early
    pub fn skip(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        self.remaining_seconds = 0;
        self.advance()
    }

    fn advance(&mut self) -> TickOutcome {
        self.phase = match self.phase {
            Phase::Work if self.current_session + 1 < self.total_sessions() => Phase::ShortBreak,
            Phase::Work => Phase::LongBreak,
            Phase::ShortBreak => {
                self.current_session += 1;
                Phase::Work
            }
            Phase::LongBreak => {
                self.reset();
                return TickOutcome::Completed;
            }
        };

        self.load_current_phase();
        TickOutcome::PhaseChanged(self.phase)
    }

    fn load_current_phase(&mut self) {
        self.remaining_seconds = self.settings.duration_secs(self.phase);
    }

    /// Remaining time as "MM:SS"
    pub fn clock(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_seconds / 60,
            self.remaining_seconds % 60
        )
    }

    /// e.g. "Work Session - Session 1 of 4"
    pub fn status_line(&self) -> String {
        format!(
            "{} - Session {} of {}",
            self.phase.name(),
            self.current_session + 1,
            self.total_sessions()
        )
    }
}
