//! Completion progress indicator helpers.

/// Clamps a raw percentage into the displayable range `[0, 100]`.
#[must_use]
pub fn clamp_percent(value: i64) -> u8 {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the value is clamped into u8 range first"
    )]
    {
        value.clamp(0, 100) as u8
    }
}

/// Advances a rendered value toward the target by at most `max_step`.
///
/// Pure per-frame animation step: repeated application converges on the
/// target and never overshoots.
#[must_use]
pub fn advance_toward(rendered: u8, target: u8, max_step: u8) -> u8 {
    if rendered < target {
        rendered.saturating_add(max_step.min(target - rendered))
    } else {
        rendered.saturating_sub(max_step.min(rendered - target))
    }
}

/// Display model for the completion bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressIndicator {
    value: u8,
    show_label: bool,
}

impl ProgressIndicator {
    /// Creates an indicator, clamping the raw value into `[0, 100]`.
    #[must_use]
    pub fn new(value: i64, show_label: bool) -> Self {
        Self {
            value: clamp_percent(value),
            show_label,
        }
    }

    /// Returns the clamped percentage.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns the centred percentage label, when enabled.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        self.show_label.then(|| format!("{}%", self.value))
    }
}
