use crate::constants::DRAG_MOVE_THRESHOLD_SQ;
use crate::rotation::RotationState;
use glam::DVec2;

/// Transient pointer-drag state: created on pointer-down, dropped on
/// pointer-up. Only the first pointer is tracked.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    start_pointer: DVec2,
    start_rotation: RotationState,
    last_point: DVec2,
    last_delta: DVec2,
    moved: bool,
}

impl DragSession {
    pub fn begin(point: DVec2, rotation: RotationState) -> Self {
        Self {
            start_pointer: point,
            start_rotation: rotation,
            last_point: point,
            last_delta: DVec2::ZERO,
            moved: false,
        }
    }

    /// Rotation for the current pointer position. Pitch follows vertical drag
    /// against the clamp; yaw follows horizontal drag and stays normalized.
    /// Also tracks the per-move delta used for the release velocity and trips
    /// the move threshold once total travel is no longer a plausible tap.
    pub fn update(&mut self, point: DVec2, sensitivity: f64, max_pitch: f64) -> RotationState {
        let total = point - self.start_pointer;
        if !self.moved && total.length_squared() > DRAG_MOVE_THRESHOLD_SQ {
            self.moved = true;
        }
        self.last_delta = point - self.last_point;
        self.last_point = point;
        RotationState::compose(
            self.start_rotation.pitch - total.y / sensitivity,
            self.start_rotation.yaw + total.x / sensitivity,
            max_pitch,
        )
    }

    /// True once the threshold was exceeded; a release without it is a tap.
    pub fn moved(&self) -> bool {
        self.moved
    }

    /// Rotation-space velocity at release, degrees per frame, derived from
    /// the final pointer delta. Clamping and gain are the integrator's job.
    pub fn release_velocity(&self, sensitivity: f64) -> DVec2 {
        self.last_delta / sensitivity
    }
}
