pub mod commands;
pub mod theme;
pub mod types;

pub use commands::{DomCommand, Target};
pub use theme::{Theme, THEME_STORAGE_KEY};
pub use types::{Point, Rect};
