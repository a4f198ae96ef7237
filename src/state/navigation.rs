//! Navigation-related state types.
//!
//! This module contains enums for input focus and the color theme.

/// Specifying where typed characters go when no row is being edited.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Tasks,
    Draft,
}

/// Specifying the color theme.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Return the opposite theme.
    ///
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl From<bool> for ThemeMode {
    fn from(dark_mode: bool) -> Self {
        if dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_toggled() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_theme_mode_from_dark_mode_flag() {
        assert_eq!(ThemeMode::from(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::from(false), ThemeMode::Light);
    }
}
