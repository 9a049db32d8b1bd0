use lume_protocol::{DomCommand, Point, Rect, Target};

/// Maximum rotation on either axis, degrees.
pub const MAX_TILT_DEG: f64 = 8.0;

const PERSPECTIVE_PX: f64 = 900.0;
const HOVER_LIFT_PX: f64 = 4.0;

/// Pointer-relative 3D rotation for a card.
///
/// The normalized offset from the card center drives each axis: horizontal
/// offset turns the card left/right, vertical offset tips it away from the
/// pointer (inverted sign). A pointer at the exact center yields 0° on both
/// axes.
pub fn tilt(card: usize, pointer: Point, bounds: Rect) -> Vec<DomCommand> {
    if bounds.w <= 0.0 || bounds.h <= 0.0 {
        return reset(card);
    }
    let x = pointer.x - bounds.x;
    let y = pointer.y - bounds.y;
    let rotate_x = (0.5 - y / bounds.h) * MAX_TILT_DEG;
    let rotate_y = (x / bounds.w - 0.5) * MAX_TILT_DEG;

    vec![DomCommand::style(
        Target::TiltCard(card),
        "transform",
        format!(
            "perspective({PERSPECTIVE_PX}px) rotateX({rotate_x}deg) \
             rotateY({rotate_y}deg) translateY(-{HOVER_LIFT_PX}px)"
        ),
    )]
}

/// Neutral transform applied when the pointer leaves the card.
pub fn reset(card: usize) -> Vec<DomCommand> {
    vec![DomCommand::style(
        Target::TiltCard(card),
        "transform",
        format!("perspective({PERSPECTIVE_PX}px) rotateX(0deg) rotateY(0deg) translateY(0px)"),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(cmds: &[DomCommand]) -> &str {
        match &cmds[0] {
            DomCommand::SetStyle { value, .. } => value,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn center_produces_zero_rotation() {
        let bounds = Rect::new(100.0, 200.0, 300.0, 150.0);
        let cmds = tilt(0, bounds.center(), bounds);
        assert_eq!(
            transform(&cmds),
            "perspective(900px) rotateX(0deg) rotateY(0deg) translateY(-4px)"
        );
    }

    #[test]
    fn corners_reach_the_maximum_angles() {
        let bounds = Rect::new(0.0, 0.0, 200.0, 100.0);
        // Top-left corner: card tips toward the pointer, turns left.
        let cmds = tilt(2, Point::new(0.0, 0.0), bounds);
        assert_eq!(
            transform(&cmds),
            "perspective(900px) rotateX(4deg) rotateY(-4deg) translateY(-4px)"
        );
        // Bottom-right corner: both signs flip.
        let cmds = tilt(2, Point::new(200.0, 100.0), bounds);
        assert_eq!(
            transform(&cmds),
            "perspective(900px) rotateX(-4deg) rotateY(4deg) translateY(-4px)"
        );
    }

    #[test]
    fn degenerate_bounds_fall_back_to_neutral() {
        let cmds = tilt(1, Point::new(5.0, 5.0), Rect::new(0.0, 0.0, 0.0, 120.0));
        assert_eq!(cmds, reset(1));
    }

    #[test]
    fn reset_clears_rotation_and_lift() {
        assert_eq!(
            transform(&reset(3)),
            "perspective(900px) rotateX(0deg) rotateY(0deg) translateY(0px)"
        );
    }
}
