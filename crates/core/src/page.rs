use std::collections::{BTreeSet, HashMap};

use lume_protocol::{DomCommand, Target, Theme};

/// In-memory interpretation of the command stream.
///
/// Drivers that own a real DOM apply commands to it directly; tests and the
/// terminal preview apply them here instead and query the resulting state.
/// Application is order-sensitive and idempotent per command, exactly like
/// the DOM operations the commands stand for.
#[derive(Debug, Clone, Default)]
pub struct PageModel {
    attrs: HashMap<(Target, String), String>,
    classes: HashMap<Target, BTreeSet<String>>,
    styles: HashMap<(Target, String), String>,
    texts: HashMap<Target, String>,
    stored_theme: Option<Theme>,
}

impl PageModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, cmd: &DomCommand) {
        match cmd {
            DomCommand::SetAttribute {
                target,
                name,
                value,
            } => {
                self.attrs.insert((*target, name.clone()), value.clone());
            }
            DomCommand::SetText { target, text } => {
                self.texts.insert(*target, text.clone());
            }
            DomCommand::SetStyle {
                target,
                property,
                value,
            } => {
                self.styles
                    .insert((*target, property.clone()), value.clone());
            }
            DomCommand::AddClass { target, class } => {
                self.classes.entry(*target).or_default().insert(class.clone());
            }
            DomCommand::RemoveClass { target, class } => {
                if let Some(set) = self.classes.get_mut(target) {
                    set.remove(class);
                }
            }
            DomCommand::StoreTheme { theme } => {
                self.stored_theme = Some(*theme);
            }
        }
    }

    pub fn apply_all(&mut self, cmds: &[DomCommand]) {
        for cmd in cmds {
            self.apply(cmd);
        }
    }

    pub fn attr(&self, target: Target, name: &str) -> Option<&str> {
        self.attrs
            .get(&(target, name.to_string()))
            .map(String::as_str)
    }

    pub fn has_class(&self, target: Target, class: &str) -> bool {
        self.classes
            .get(&target)
            .is_some_and(|set| set.contains(class))
    }

    pub fn style(&self, target: Target, property: &str) -> Option<&str> {
        self.styles
            .get(&(target, property.to_string()))
            .map(String::as_str)
    }

    pub fn text(&self, target: Target) -> &str {
        self.texts.get(&target).map_or("", String::as_str)
    }

    pub fn stored_theme(&self) -> Option<Theme> {
        self.stored_theme
    }
}
