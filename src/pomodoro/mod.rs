//! Pomodoro timer driven entirely by an injected clock.

mod timer;

pub use timer::{
    Phase, PomodoroConfig, PomodoroConfigError, PomodoroTimer, TimerError, TimerSnapshot,
    TimerState,
};

#[cfg(test)]
mod tests;
