use serde::{Deserialize, Serialize};

/// Key under which the explicit theme preference is persisted.
///
/// The value is always `Theme::as_str` output; any other stored string is
/// treated as "no preference".
pub const THEME_STORAGE_KEY: &str = "lume-theme";

/// A named visual mode for the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The theme implied by the operating system's dark-mode signal.
    pub fn from_system(system_dark: bool) -> Self {
        if system_dark { Self::Dark } else { Self::Light }
    }

    /// Parse a stored preference value. Anything but the two canonical
    /// strings is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label for the toggle control. Names the mode a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark mode",
            Self::Dark => "Light mode",
        }
    }

    /// `aria-pressed` value for the toggle control (pressed = dark applied).
    pub fn aria_pressed(self) -> &'static str {
        match self {
            Self::Light => "false",
            Self::Dark => "true",
        }
    }
}
