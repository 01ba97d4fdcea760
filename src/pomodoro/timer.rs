//! State machine for work and break phases.
//!
//! The timer never runs a background task. It records when the current
//! phase started and derives everything else from the injected clock on
//! [`PomodoroTimer::poll`], so the same clock inputs always produce the
//! same snapshots.

use chrono::{DateTime, Duration, Utc};
use mockable::Clock;
use thiserror::Error;

/// The kind of interval currently being timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A focused work session.
    Work,
    /// The short break between work sessions.
    ShortBreak,
    /// The long break after a full cycle of work sessions.
    LongBreak,
}

impl Phase {
    /// Returns `true` for either break phase.
    #[must_use]
    pub const fn is_break(self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }
}

/// Whether the timer is counting down right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Not started, or reset.
    Idle,
    /// Counting down against the clock.
    Running,
    /// Frozen with time already spent in the current phase.
    Paused,
}

/// Rejected configuration values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PomodoroConfigError {
    /// A phase duration is zero or negative.
    #[error("the {0} duration must be positive")]
    NonPositiveDuration(&'static str),

    /// The long-break cycle length is zero.
    #[error("sessions per long break must be at least one")]
    ZeroCycle,
}

/// Operations issued while the timer is in the wrong state.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TimerError {
    /// `start` while already started.
    #[error("the timer is already started")]
    AlreadyStarted,

    /// `pause` or `skip` while nothing is counting down.
    #[error("the timer is not running")]
    NotRunning,

    /// `resume` while not paused.
    #[error("the timer is not paused")]
    NotPaused,
}

/// Phase lengths and the long-break cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PomodoroConfig {
    work: Duration,
    short_break: Duration,
    long_break: Duration,
    sessions_per_long_break: u32,
}

impl Default for PomodoroConfig {
    /// The classic 25/5/15 split with a long break every fourth session.
    fn default() -> Self {
        Self {
            work: Duration::minutes(25),
            short_break: Duration::minutes(5),
            long_break: Duration::minutes(15),
            sessions_per_long_break: 4,
        }
    }
}

impl PomodoroConfig {
    /// Builds a configuration from explicit values.
    ///
    /// # Errors
    ///
    /// Returns [`PomodoroConfigError`] when a duration is not positive or
    /// the cycle length is zero.
    pub fn new(
        work: Duration,
        short_break: Duration,
        long_break: Duration,
        sessions_per_long_break: u32,
    ) -> Result<Self, PomodoroConfigError> {
        for (name, duration) in [
            ("work", work),
            ("short break", short_break),
            ("long break", long_break),
        ] {
            if duration <= Duration::zero() {
                return Err(PomodoroConfigError::NonPositiveDuration(name));
            }
        }
        if sessions_per_long_break == 0 {
            return Err(PomodoroConfigError::ZeroCycle);
        }
        Ok(Self {
            work,
            short_break,
            long_break,
            sessions_per_long_break,
        })
    }

    /// Returns the configured length of a phase.
    #[must_use]
    pub const fn phase_duration(&self, phase: Phase) -> Duration {
        match phase {
            Phase::Work => self.work,
            Phase::ShortBreak => self.short_break,
            Phase::LongBreak => self.long_break,
        }
    }

    /// Returns how many work sessions precede a long break.
    #[must_use]
    pub const fn sessions_per_long_break(&self) -> u32 {
        self.sessions_per_long_break
    }
}

/// One observation of the timer, produced by [`PomodoroTimer::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSnapshot {
    /// Idle, running, or paused.
    pub state: TimerState,
    /// The phase being timed. Idle timers report the upcoming work phase.
    pub phase: Phase,
    /// Time left in the current phase.
    pub remaining: Duration,
    /// Work sessions completed since the last reset.
    pub completed_sessions: u32,
}

#[derive(Debug, Clone, Copy)]
enum Machine {
    Idle,
    Running {
        phase: Phase,
        started_at: DateTime<Utc>,
        carried: Duration,
    },
    Paused {
        phase: Phase,
        elapsed: Duration,
    },
}

/// Pomodoro timer generic over the clock so tests can drive time by hand.
#[derive(Debug)]
pub struct PomodoroTimer<C> {
    config: PomodoroConfig,
    clock: C,
    machine: Machine,
    completed_sessions: u32,
}

impl<C: Clock> PomodoroTimer<C> {
    /// Creates an idle timer.
    pub const fn new(config: PomodoroConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            machine: Machine::Idle,
            completed_sessions: 0,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &PomodoroConfig {
        &self.config
    }

    /// Begins the first work phase.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::AlreadyStarted`] unless the timer is idle.
    pub fn start(&mut self) -> Result<(), TimerError> {
        if !matches!(self.machine, Machine::Idle) {
            return Err(TimerError::AlreadyStarted);
        }
        self.machine = Machine::Running {
            phase: Phase::Work,
            started_at: self.clock.utc(),
            carried: Duration::zero(),
        };
        Ok(())
    }

    /// Freezes the countdown, keeping time already spent in the phase.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::NotRunning`] unless the timer is running.
    pub fn pause(&mut self) -> Result<(), TimerError> {
        let Machine::Running {
            phase,
            started_at,
            carried,
        } = self.machine
        else {
            return Err(TimerError::NotRunning);
        };
        // Roll past any phase boundary first so the frozen remainder is
        // never negative.
        let (current, elapsed) =
            self.advance(phase, carried + (self.clock.utc() - started_at));
        self.machine = Machine::Paused {
            phase: current,
            elapsed,
        };
        Ok(())
    }

    /// Continues a paused countdown from where it stopped.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::NotPaused`] unless the timer is paused.
    pub fn resume(&mut self) -> Result<(), TimerError> {
        let Machine::Paused { phase, elapsed } = self.machine else {
            return Err(TimerError::NotPaused);
        };
        self.machine = Machine::Running {
            phase,
            started_at: self.clock.utc(),
            carried: elapsed,
        };
        Ok(())
    }

    /// Abandons the current phase and moves straight to the next one.
    ///
    /// A skipped work phase does not count towards the long-break cycle;
    /// only fully elapsed work sessions do.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::NotRunning`] when the timer is idle.
    pub fn skip(&mut self) -> Result<(), TimerError> {
        let phase = match self.machine {
            Machine::Idle => return Err(TimerError::NotRunning),
            Machine::Running { phase, .. } | Machine::Paused { phase, .. } => phase,
        };
        self.machine = Machine::Running {
            phase: self.next_phase(phase),
            started_at: self.clock.utc(),
            carried: Duration::zero(),
        };
        Ok(())
    }

    /// Returns to idle and clears the completed-session count.
    pub const fn reset(&mut self) {
        self.machine = Machine::Idle;
        self.completed_sessions = 0;
    }

    /// Observes the timer, advancing past any phases that have elapsed.
    ///
    /// Time beyond a phase boundary carries into the next phase, so a
    /// poll that arrives late still lands on the right phase with the
    /// right remainder.
    pub fn poll(&mut self) -> TimerSnapshot {
        match self.machine {
            Machine::Idle => TimerSnapshot {
                state: TimerState::Idle,
                phase: Phase::Work,
                remaining: self.config.phase_duration(Phase::Work),
                completed_sessions: self.completed_sessions,
            },
            Machine::Paused { phase, elapsed } => TimerSnapshot {
                state: TimerState::Paused,
                phase,
                remaining: self.config.phase_duration(phase) - elapsed,
                completed_sessions: self.completed_sessions,
            },
            Machine::Running {
                phase,
                started_at,
                carried,
            } => {
                let now = self.clock.utc();
                let (current, elapsed) = self.advance(phase, carried + (now - started_at));
                self.machine = Machine::Running {
                    phase: current,
                    started_at: now,
                    carried: elapsed,
                };
                TimerSnapshot {
                    state: TimerState::Running,
                    phase: current,
                    remaining: self.config.phase_duration(current) - elapsed,
                    completed_sessions: self.completed_sessions,
                }
            }
        }
    }

    /// Rolls `elapsed` forward across phase boundaries.
    fn advance(&mut self, mut phase: Phase, mut elapsed: Duration) -> (Phase, Duration) {
        let mut duration = self.config.phase_duration(phase);
        while elapsed >= duration {
            elapsed -= duration;
            if phase == Phase::Work {
                self.completed_sessions += 1;
            }
            phase = self.next_phase(phase);
            duration = self.config.phase_duration(phase);
        }
        (phase, elapsed)
    }

    /// Picks the phase that follows `phase` in the cycle.
    fn next_phase(&self, phase: Phase) -> Phase {
        if phase.is_break() {
            return Phase::Work;
        }
        if self.completed_sessions > 0
            && self.completed_sessions % self.config.sessions_per_long_break == 0
        {
            Phase::LongBreak
        } else {
            Phase::ShortBreak
        }
    }
}
