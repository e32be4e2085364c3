//! Light/dark theme preference.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display theme for the session.
///
/// Independent of the game; a reset keeps the current theme.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// Returns the other theme.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Scheme name (`"light"` or `"dark"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Caption for the control that switches away from this theme.
    pub const fn toggle_caption(self) -> &'static str {
        match self {
            Self::Light => "Dark mode",
            Self::Dark => "Light mode",
        }
    }

    /// Spoken description of the toggle control.
    pub fn toggle_description(self) -> String {
        format!("Switch to {} mode", self.toggle().as_str())
    }
}

/// Reflects the theme into the display environment.
///
/// The controller never calls this itself. Front ends call
/// [`ThemeSink::apply_theme`] once after start-up and again after every
/// [`GameController::toggle_theme`](crate::GameController::toggle_theme).
pub trait ThemeSink {
    /// Applies `theme` to whatever this sink drives.
    fn apply_theme(&mut self, theme: Theme);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("Light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_toggle_labels() {
        assert_eq!(Theme::Light.toggle_caption(), "Dark mode");
        assert_eq!(Theme::Light.toggle_description(), "Switch to dark mode");
        assert_eq!(Theme::Dark.toggle_caption(), "Light mode");
        assert_eq!(Theme::Dark.toggle_description(), "Switch to light mode");
    }
}
