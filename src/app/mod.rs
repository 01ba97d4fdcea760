//! Application context, configuration, theme preference, and notices.

mod config;
mod context;
mod notice;
mod theme;

pub use config::{BackendConfig, ConfigError};
pub use context::AppContext;
pub use notice::{Notice, NoticeLevel, NoticeQueue};
pub use theme::{Theme, ThemeStore};

#[cfg(test)]
mod tests;
