use lume_protocol::{DomCommand, Target};

/// Class toggled on the link container while the menu is open.
pub const OPEN_CLASS: &str = "open";

/// Collapsible mobile navigation menu.
#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle control clicked: flip the open state.
    pub fn toggle(&mut self) -> Vec<DomCommand> {
        self.open = !self.open;
        self.state_commands()
    }

    /// A navigation link was clicked: always close, however the menu got
    /// opened.
    pub fn link_clicked(&mut self) -> Vec<DomCommand> {
        self.open = false;
        self.state_commands()
    }

    fn state_commands(&self) -> Vec<DomCommand> {
        let class = if self.open {
            DomCommand::add_class(Target::NavLinks, OPEN_CLASS)
        } else {
            DomCommand::remove_class(Target::NavLinks, OPEN_CLASS)
        };
        let expanded = if self.open { "true" } else { "false" };
        vec![
            class,
            DomCommand::attr(Target::NavToggle, "aria-expanded", expanded),
        ]
    }
}
