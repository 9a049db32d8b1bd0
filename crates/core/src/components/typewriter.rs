/// Delay after appending a character while typing.
pub const TYPE_DELAY_MS: u64 = 70;
/// Delay after removing a character while deleting.
pub const DELETE_DELAY_MS: u64 = 40;
/// Hold on the fully typed role before deletion starts.
pub const HOLD_FULL_MS: u64 = 1300;
/// Hold on the empty line before the next role starts.
pub const HOLD_EMPTY_MS: u64 = 280;

/// One step of the typewriter loop: the text to display and how long to
/// wait before the next step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterTick {
    pub text: String,
    pub delay_ms: u64,
}

/// Cycles through a fixed role list with a typing/deleting animation.
///
/// The loop is infinite and self-rescheduling: each `tick` reports the delay
/// the driver should sleep before calling `tick` again. State is owned here
/// exclusively; there is no cancellation, the loop runs for the page's
/// lifetime.
#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<String>,
    role: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    /// Empty roles (or a list of only empty strings) would make the cursor
    /// arithmetic meaningless, so construction rejects them and the driver
    /// skips the component.
    pub fn new(roles: Vec<String>) -> Option<Self> {
        let roles: Vec<String> = roles.into_iter().filter(|r| !r.is_empty()).collect();
        if roles.is_empty() {
            return None;
        }
        Some(Self {
            roles,
            role: 0,
            chars: 0,
            deleting: false,
        })
    }

    /// Advance the animation one step.
    ///
    /// The cursor moves first, then the edges are checked: reaching the full
    /// role length flips into deleting with the long hold, reaching zero
    /// flips back into typing on the next role with the short hold. The
    /// cursor never leaves `0..=len`.
    pub fn tick(&mut self) -> TypewriterTick {
        let len = self.roles[self.role].chars().count();

        if self.deleting {
            self.chars -= 1;
        } else {
            self.chars += 1;
        }

        let text: String = self.roles[self.role].chars().take(self.chars).collect();
        let mut delay_ms = if self.deleting {
            DELETE_DELAY_MS
        } else {
            TYPE_DELAY_MS
        };

        if !self.deleting && self.chars == len {
            delay_ms = HOLD_FULL_MS;
            self.deleting = true;
        }

        if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.role = (self.role + 1) % self.roles.len();
            delay_ms = HOLD_EMPTY_MS;
        }

        TypewriterTick { text, delay_ms }
    }
}
