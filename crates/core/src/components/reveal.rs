use lume_protocol::{DomCommand, Target};

use crate::components::counter::CounterSpec;

/// Fraction of an element's area that must be visible to count as revealed.
pub const REVEAL_THRESHOLD: f64 = 0.16;
/// Class added (permanently) when an element first becomes visible.
pub const REVEAL_CLASS: &str = "in-view";
/// Delay after load before counters are started unconditionally, covering
/// elements that are already in view and never re-enter.
pub const COUNTER_FALLBACK_DELAY_MS: u64 = 350;

/// Result of a visibility event: page mutations plus the counters the
/// driver should start animating.
#[derive(Debug, Clone, Default)]
pub struct RevealUpdate {
    pub commands: Vec<DomCommand>,
    pub start_counters: Vec<usize>,
}

/// Tracks reveal and counter-trigger state for the whole page.
///
/// Reveals are once-only: the class is never removed, so re-entering the
/// viewport is a no-op. Counter triggering is global: any revealed element
/// that contains a counter starts every counter on the page that has not
/// run yet, each guarded by its own animated flag.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    revealed: Vec<bool>,
    animated: Vec<bool>,
}

impl RevealTracker {
    /// `counters` carries the parsed per-element specs; elements arriving
    /// pre-marked (`data-animated="true"`) are excluded from triggering.
    pub fn new(reveal_count: usize, counters: &[CounterSpec]) -> Self {
        Self {
            revealed: vec![false; reveal_count],
            animated: counters.iter().map(|c| c.animated).collect(),
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// An observed element intersected the viewport.
    pub fn on_intersection(&mut self, index: usize, contains_counter: bool) -> RevealUpdate {
        let mut update = RevealUpdate::default();
        let Some(slot) = self.revealed.get_mut(index) else {
            return update;
        };
        *slot = true;
        update
            .commands
            .push(DomCommand::add_class(Target::Reveal(index), REVEAL_CLASS));
        if contains_counter {
            self.claim_pending(&mut update);
        }
        update
    }

    /// Load-time fallback: start whatever never got scroll-triggered.
    pub fn on_fallback(&mut self) -> RevealUpdate {
        let mut update = RevealUpdate::default();
        self.claim_pending(&mut update);
        update
    }

    fn claim_pending(&mut self, update: &mut RevealUpdate) {
        for (index, animated) in self.animated.iter_mut().enumerate() {
            if *animated {
                continue;
            }
            *animated = true;
            update.commands.push(DomCommand::attr(
                Target::Counter(index),
                "data-animated",
                "true",
            ));
            update.start_counters.push(index);
        }
    }
}
