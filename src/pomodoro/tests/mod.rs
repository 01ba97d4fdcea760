//! Unit tests for the pomodoro timer.
