use crate::constants::*;
use crate::rotation::RotationState;
use glam::DVec2;

/// Post-drag momentum. Velocity decays by a dampening-derived friction factor
/// every frame until both components fall under the stop threshold or the
/// frame cap is hit.
#[derive(Debug, Default)]
pub struct Inertia {
    velocity: DVec2,
    friction: f64,
    stop_threshold: f64,
    frame_cap: u32,
    frames: u32,
    active: bool,
}

impl Inertia {
    /// Begin a run from a release velocity. Any prior run is replaced.
    pub fn start(&mut self, release: DVec2, dampening: f64) {
        let clamped = release.clamp(
            DVec2::splat(-MAX_RELEASE_VELOCITY),
            DVec2::splat(MAX_RELEASE_VELOCITY),
        );
        self.velocity = clamped * INERTIA_GAIN;
        self.friction = FRICTION_BASE + FRICTION_SPAN * dampening;
        self.stop_threshold = INERTIA_STOP_BASE - INERTIA_STOP_SPAN * dampening;
        self.frame_cap =
            INERTIA_FRAME_CAP_BASE + (INERTIA_FRAME_CAP_SPAN as f64 * dampening).round() as u32;
        self.frames = 0;
        self.active = true;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// One frame of decay, applying the drag formula with the velocity in
    /// place of a pointer delta. Returns false once the run has stopped.
    pub fn step(&mut self, rotation: &mut RotationState, max_pitch: f64) -> bool {
        if !self.active {
            return false;
        }
        self.frames += 1;
        self.velocity *= self.friction;
        *rotation = RotationState::compose(
            rotation.pitch - self.velocity.y,
            rotation.yaw + self.velocity.x,
            max_pitch,
        );
        let under_threshold = self.velocity.x.abs() < self.stop_threshold
            && self.velocity.y.abs() < self.stop_threshold;
        if under_threshold || self.frames >= self.frame_cap {
            self.active = false;
        }
        self.active
    }
}

/// Constant yaw drift while nothing else owns the rotation. Tracks its own
/// last-seen timestamp so a pause (drag, focus, backgrounded tab) never turns
/// into a jump: the first tick after `reset` advances zero degrees.
#[derive(Debug, Default)]
pub struct AutoRotate {
    last_ms: Option<f64>,
}

impl AutoRotate {
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    pub fn tick(&mut self, now_ms: f64, rotation: &mut RotationState) {
        let elapsed = match self.last_ms {
            Some(prev) => (now_ms - prev).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        if elapsed > 0.0 {
            // Pitch is untouched by idle rotation.
            rotation.yaw =
                crate::rotation::normalize_yaw(rotation.yaw + elapsed * AUTO_ROTATE_DEG_PER_MS);
        }
    }
}
