use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// An addressable page hook.
///
/// Indexed variants refer to the n-th matching element in the order the
/// driver discovered them at startup. Components and drivers share this
/// ordering; it never changes for the lifetime of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// The root document element (`<html>`).
    Root,
    ThemeToggle,
    NavToggle,
    NavLinks,
    NavLink(usize),
    RoleText,
    Reveal(usize),
    Counter(usize),
    ProgressBar,
    CursorGlow,
    TiltCard(usize),
    Year,
}

/// A single, stateless page mutation.
///
/// Components emit a `Vec<DomCommand>` per input. Drivers consume the list
/// sequentially; each command carries all the data it needs. Commands
/// addressed to hooks the page does not supply are silently dropped by the
/// driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomCommand {
    SetAttribute {
        target: Target,
        name: String,
        value: String,
    },
    SetText {
        target: Target,
        text: String,
    },
    SetStyle {
        target: Target,
        property: String,
        value: String,
    },
    AddClass {
        target: Target,
        class: String,
    },
    RemoveClass {
        target: Target,
        class: String,
    },
    /// Persist the explicit theme preference to origin-scoped storage.
    StoreTheme {
        theme: Theme,
    },
}

impl DomCommand {
    pub fn attr(target: Target, name: &str, value: impl Into<String>) -> Self {
        Self::SetAttribute {
            target,
            name: name.to_string(),
            value: value.into(),
        }
    }

    pub fn text(target: Target, text: impl Into<String>) -> Self {
        Self::SetText {
            target,
            text: text.into(),
        }
    }

    pub fn style(target: Target, property: &str, value: impl Into<String>) -> Self {
        Self::SetStyle {
            target,
            property: property.to_string(),
            value: value.into(),
        }
    }

    pub fn add_class(target: Target, class: &str) -> Self {
        Self::AddClass {
            target,
            class: class.to_string(),
        }
    }

    pub fn remove_class(target: Target, class: &str) -> Self {
        Self::RemoveClass {
            target,
            class: class.to_string(),
        }
    }
}
