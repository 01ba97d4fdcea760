//! Colour theme preference and its on-disk persistence.

use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

/// Name of the preference file inside the store directory.
const THEME_FILE: &str = "theme";

/// Colour theme applied to the whole interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light palette, the starting preference.
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

impl Theme {
    /// Returns the canonical name stored on disk.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Persists the theme preference in a single file under one directory.
///
/// Loading never fails: a missing or unreadable preference falls back to
/// [`Theme::default`], so the interface always has a palette.
#[derive(Debug)]
pub struct ThemeStore {
    dir: Dir,
}

impl ThemeStore {
    /// Opens a store rooted at an existing directory path.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the directory cannot be
    /// opened.
    pub fn open(path: &str) -> io::Result<Self> {
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self { dir })
    }

    /// Wraps an already-opened directory handle.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }

    /// Reads the stored preference.
    ///
    /// Absent files and unrecognized contents both yield the default
    /// theme rather than an error.
    #[must_use]
    pub fn load(&self) -> Theme {
        match self.dir.read_to_string(THEME_FILE) {
            Ok(contents) => Theme::parse(&contents).unwrap_or_default(),
            Err(_) => Theme::default(),
        }
    }

    /// Writes the preference, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the file cannot be written.
    pub fn save(&self, theme: Theme) -> io::Result<()> {
        self.dir.write(THEME_FILE, theme.as_str())
    }
}
