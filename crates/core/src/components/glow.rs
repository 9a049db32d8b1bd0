use lume_protocol::{DomCommand, Point, Target};

/// Reposition the decorative glow element to the pointer location.
///
/// Runs at the native pointer-event rate, without throttling.
pub fn follow(pointer: Point) -> Vec<DomCommand> {
    vec![
        DomCommand::style(Target::CursorGlow, "left", format!("{}px", pointer.x)),
        DomCommand::style(Target::CursorGlow, "top", format!("{}px", pointer.y)),
    ]
}
