use crate::point2d::Point2D;
use crate::raster::RenderMode;

/// Pixels added to the position per frame per held direction key.
pub const MOVE: f32 = 4.0;
/// Radians added to the angle per frame while the rotate key is held.
pub const ROT: f32 = 0.08;

/// What the harness does after a stage's frame loop ends.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionAction {
    NextStage,
    Quit,
}

/// Per-frame snapshot of the held keys, polled once by the harness.
#[derive(Debug, Default, Copy, Clone)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub rotate: bool,
}

/// Accumulated render state for one benchmark session. Owned by the harness
/// and passed into each frame step; the rasterizers never see it directly.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub angle: f32,
    pub position: Point2D,
    pub mode: RenderMode,
}

impl SessionState {
    /// Start centered in the viewport, unrotated, filled.
    pub fn new(width: u32, height: u32) -> Self {
        SessionState {
            angle: 0.0,
            position: Point2D { x: (width / 2) as f32, y: (height / 2) as f32 },
            mode: RenderMode::Filled,
        }
    }

    /// Held-key semantics: every recognized key in the snapshot contributes
    /// its fixed increment, and several may apply in the same frame. The
    /// angle accumulates without wrapping; trigonometry absorbs the period.
    pub fn apply_input(&mut self, input: &InputSnapshot) {
        if input.left {
            self.position.x -= MOVE;
        }
        if input.right {
            self.position.x += MOVE;
        }
        if input.up {
            self.position.y -= MOVE;
        }
        if input.down {
            self.position.y += MOVE;
        }
        if input.rotate {
            self.angle += ROT;
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.next();
    }

    /// Transform Stage: rotation then translation, `R(angle) * v + position`,
    /// applied to every object-space vertex.
    pub fn transform_vertices(&self, verts: &[Point2D]) -> Vec<Point2D> {
        let (s, c) = self.angle.sin_cos();
        verts
            .iter()
            .map(|v| Point2D {
                x: c * v.x - s * v.y + self.position.x,
                y: s * v.x + c * v.y + self.position.y,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_angle_is_pure_translation() {
        let mut state = SessionState::new(800, 600);
        state.position = Point2D { x: 100.0, y: 50.0 };
        let verts = [Point2D { x: -50.0, y: -50.0 }, Point2D { x: 0.0, y: 50.0 }];
        let out = state.transform_vertices(&verts);
        assert_eq!(out[0], Point2D { x: 50.0, y: 0.0 });
        assert_eq!(out[1], Point2D { x: 100.0, y: 100.0 });
    }

    #[test]
    fn quarter_turn_rotates_before_translating() {
        let mut state = SessionState::new(800, 600);
        state.angle = std::f32::consts::FRAC_PI_2;
        state.position = Point2D { x: 10.0, y: 10.0 };
        let out = state.transform_vertices(&[Point2D { x: 1.0, y: 0.0 }]);
        assert!((out[0].x - 10.0).abs() < 1e-5);
        assert!((out[0].y - 11.0).abs() < 1e-5);
    }

    #[test]
    fn held_keys_accumulate_together() {
        let mut state = SessionState::new(800, 600);
        let start = state.position;
        let input = InputSnapshot { right: true, down: true, rotate: true, ..Default::default() };
        state.apply_input(&input);
        state.apply_input(&input);
        assert_eq!(state.position.x, start.x + 2.0 * MOVE);
        assert_eq!(state.position.y, start.y + 2.0 * MOVE);
        assert_eq!(state.angle, 2.0 * ROT);
    }

    #[test]
    fn mode_toggle_cycles() {
        let mut state = SessionState::new(800, 600);
        assert_eq!(state.mode, RenderMode::Filled);
        state.toggle_mode();
        assert_eq!(state.mode, RenderMode::Wireframe);
        state.toggle_mode();
        assert_eq!(state.mode, RenderMode::Filled);
    }
}
