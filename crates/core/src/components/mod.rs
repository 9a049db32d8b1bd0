pub mod counter;
pub mod glow;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod tilt;
pub mod typewriter;
