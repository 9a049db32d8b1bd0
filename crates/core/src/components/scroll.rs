use lume_protocol::{DomCommand, Target};

/// Pixels of lookahead when deciding which section is active, so a section
/// becomes current slightly before its top edge reaches the viewport top.
pub const SECTION_LOOKAHEAD_PX: f64 = 180.0;
/// Class carried by the nav link of the active section.
pub const ACTIVE_CLASS: &str = "active";

/// Scroll geometry sampled by the driver on each scroll/resize event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub content_height: f64,
}

impl ScrollMetrics {
    pub fn max_scroll(&self) -> f64 {
        self.content_height - self.viewport_height
    }

    /// Scroll progress in percent. 0 whenever there is nothing to scroll.
    pub fn progress_pct(&self) -> f64 {
        let max = self.max_scroll();
        if max > 0.0 {
            self.scroll_y / max * 100.0
        } else {
            0.0
        }
    }
}

/// A page section with its current vertical offset. Offsets are re-read by
/// the driver on every update because layout changes move them.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self {
            id: id.into(),
            top,
        }
    }
}

/// Scroll-progress bar plus active-section link highlighting.
///
/// Holds only the nav-link → section-id mapping; everything that can change
/// between events is passed into `update`.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    /// Per nav link: the section id its href points at, if any.
    link_ids: Vec<Option<String>>,
}

impl ScrollTracker {
    pub fn new(link_ids: Vec<Option<String>>) -> Self {
        Self { link_ids }
    }

    /// The last section (in document order) whose top is within the
    /// lookahead window; the first section when none qualify.
    pub fn active_section<'a>(sections: &'a [Section], scroll_y: f64) -> Option<&'a str> {
        let offset = scroll_y + SECTION_LOOKAHEAD_PX;
        let mut current = sections.first().map(|s| s.id.as_str());
        for section in sections {
            if offset >= section.top {
                current = Some(section.id.as_str());
            }
        }
        current
    }

    pub fn update(&self, metrics: &ScrollMetrics, sections: &[Section]) -> Vec<DomCommand> {
        let mut cmds = vec![DomCommand::style(
            Target::ProgressBar,
            "width",
            format!("{}%", metrics.progress_pct()),
        )];

        let active = Self::active_section(sections, metrics.scroll_y);
        for (index, link_id) in self.link_ids.iter().enumerate() {
            let is_active =
                matches!((link_id.as_deref(), active), (Some(id), Some(act)) if id == act);
            cmds.push(if is_active {
                DomCommand::add_class(Target::NavLink(index), ACTIVE_CLASS)
            } else {
                DomCommand::remove_class(Target::NavLink(index), ACTIVE_CLASS)
            });
        }
        cmds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("home", 0.0),
            Section::new("work", 500.0),
            Section::new("contact", 1000.0),
        ]
    }

    fn tracker() -> ScrollTracker {
        ScrollTracker::new(vec![
            Some("home".to_string()),
            Some("work".to_string()),
            Some("contact".to_string()),
        ])
    }

    fn progress_width(cmds: &[DomCommand]) -> &str {
        cmds.iter()
            .find_map(|cmd| match cmd {
                DomCommand::SetStyle {
                    target: Target::ProgressBar,
                    property,
                    value,
                } if property == "width" => Some(value.as_str()),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn lookahead_selects_last_passed_section() {
        // scroll_y 650 + 180 = 830: past 500, short of 1000.
        let sections = sections();
        let active = ScrollTracker::active_section(&sections, 650.0);
        assert_eq!(active, Some("work"));
    }

    #[test]
    fn defaults_to_first_section_near_top() {
        // Lookahead covers offset 0 even at scroll_y 0.
        assert_eq!(
            ScrollTracker::active_section(&sections(), 0.0),
            Some("home")
        );
        assert_eq!(ScrollTracker::active_section(&[], 0.0), None);
    }

    #[test]
    fn exactly_one_link_is_active() {
        let cmds = tracker().update(
            &ScrollMetrics {
                scroll_y: 650.0,
                viewport_height: 800.0,
                content_height: 2400.0,
            },
            &sections(),
        );
        let adds: Vec<_> = cmds
            .iter()
            .filter(|c| matches!(c, DomCommand::AddClass { .. }))
            .collect();
        assert_eq!(adds.len(), 1);
        assert_eq!(
            adds[0],
            &DomCommand::add_class(Target::NavLink(1), ACTIVE_CLASS)
        );
    }

    #[test]
    fn progress_is_zero_when_page_fits_the_viewport() {
        let metrics = ScrollMetrics {
            scroll_y: 0.0,
            viewport_height: 900.0,
            content_height: 600.0,
        };
        assert_eq!(metrics.progress_pct(), 0.0);
        let cmds = tracker().update(&metrics, &sections());
        assert_eq!(progress_width(&cmds), "0%");
    }

    #[test]
    fn progress_reaches_one_hundred_at_the_bottom() {
        let metrics = ScrollMetrics {
            scroll_y: 1600.0,
            viewport_height: 800.0,
            content_height: 2400.0,
        };
        assert_eq!(metrics.progress_pct(), 100.0);
        let cmds = tracker().update(&metrics, &sections());
        assert_eq!(progress_width(&cmds), "100%");
    }

    #[test]
    fn links_without_section_ids_never_activate() {
        let tracker = ScrollTracker::new(vec![None, Some("home".to_string())]);
        let cmds = tracker.update(
            &ScrollMetrics {
                scroll_y: 0.0,
                viewport_height: 800.0,
                content_height: 2400.0,
            },
            &sections(),
        );
        assert!(cmds.contains(&DomCommand::remove_class(Target::NavLink(0), ACTIVE_CLASS)));
        assert!(cmds.contains(&DomCommand::add_class(Target::NavLink(1), ACTIVE_CLASS)));
    }
}
