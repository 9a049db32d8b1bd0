use lume_protocol::{DomCommand, Target, Theme};

/// Resolves and persists the page's color theme.
///
/// A stored preference, once set, permanently overrides the system signal
/// until cleared externally. System-driven changes are applied but never
/// persisted; only an explicit toggle writes to storage.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    applied: Theme,
    stored: Option<Theme>,
}

impl ThemeManager {
    /// Resolve the startup theme: stored preference first, system signal
    /// otherwise. The resolution itself is not an explicit choice, so no
    /// persist command is emitted.
    pub fn init(stored: Option<Theme>, system_dark: bool) -> (Self, Vec<DomCommand>) {
        let applied = stored.unwrap_or_else(|| Theme::from_system(system_dark));
        let manager = Self { applied, stored };
        let cmds = manager.apply_commands();
        (manager, cmds)
    }

    pub fn applied(&self) -> Theme {
        self.applied
    }

    /// Explicit user toggle: invert the applied theme, apply, persist.
    pub fn toggle(&mut self) -> Vec<DomCommand> {
        self.applied = self.applied.inverse();
        self.stored = Some(self.applied);
        let mut cmds = self.apply_commands();
        cmds.push(DomCommand::StoreTheme {
            theme: self.applied,
        });
        cmds
    }

    /// The operating system's preference changed. Followed only while no
    /// explicit preference is stored, and never persisted.
    pub fn system_changed(&mut self, system_dark: bool) -> Vec<DomCommand> {
        if self.stored.is_some() {
            return Vec::new();
        }
        self.applied = Theme::from_system(system_dark);
        self.apply_commands()
    }

    fn apply_commands(&self) -> Vec<DomCommand> {
        let theme = self.applied;
        vec![
            DomCommand::attr(Target::Root, "data-theme", theme.as_str()),
            DomCommand::text(Target::ThemeToggle, theme.toggle_label()),
            DomCommand::attr(Target::ThemeToggle, "aria-pressed", theme.aria_pressed()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied_attr(cmds: &[DomCommand]) -> Option<&str> {
        cmds.iter().find_map(|cmd| match cmd {
            DomCommand::SetAttribute {
                target: Target::Root,
                name,
                value,
            } if name == "data-theme" => Some(value.as_str()),
            _ => None,
        })
    }

    fn persists(cmds: &[DomCommand]) -> bool {
        cmds.iter()
            .any(|cmd| matches!(cmd, DomCommand::StoreTheme { .. }))
    }

    #[test]
    fn init_follows_system_when_nothing_stored() {
        let (manager, cmds) = ThemeManager::init(None, true);
        assert_eq!(manager.applied(), Theme::Dark);
        assert_eq!(applied_attr(&cmds), Some("dark"));
        assert!(!persists(&cmds), "startup resolution must not persist");
    }

    #[test]
    fn stored_preference_wins_over_system() {
        let (manager, cmds) = ThemeManager::init(Some(Theme::Light), true);
        assert_eq!(manager.applied(), Theme::Light);
        assert_eq!(applied_attr(&cmds), Some("light"));
    }

    #[test]
    fn toggle_inverts_and_persists() {
        let (mut manager, _) = ThemeManager::init(None, false);
        let cmds = manager.toggle();
        assert_eq!(manager.applied(), Theme::Dark);
        assert!(persists(&cmds));
        assert!(cmds.contains(&DomCommand::StoreTheme { theme: Theme::Dark }));
    }

    #[test]
    fn system_change_ignored_after_explicit_choice() {
        let (mut manager, _) = ThemeManager::init(None, false);
        manager.toggle(); // dark, stored
        let cmds = manager.system_changed(false);
        assert!(cmds.is_empty());
        assert_eq!(manager.applied(), Theme::Dark);
    }

    #[test]
    fn system_change_followed_without_stored_preference() {
        let (mut manager, _) = ThemeManager::init(None, true);
        let cmds = manager.system_changed(false);
        assert_eq!(applied_attr(&cmds), Some("light"));
        assert!(!persists(&cmds), "system-driven change must not persist");
        assert_eq!(manager.applied(), Theme::Light);
    }

    #[test]
    fn toggle_updates_control_label_and_aria() {
        let (mut manager, _) = ThemeManager::init(Some(Theme::Dark), false);
        let cmds = manager.toggle(); // now light
        assert!(cmds.contains(&DomCommand::text(Target::ThemeToggle, "Dark mode")));
        assert!(cmds.contains(&DomCommand::attr(
            Target::ThemeToggle,
            "aria-pressed",
            "false"
        )));
    }
}
