use crate::geometry::TilePlacement;

/// Sphere orientation in degrees. Pitch is clamped by the caller's vertical
/// limit; yaw is always stored normalized into `(-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub pitch: f64,
    pub yaw: f64,
}

impl RotationState {
    /// Clamp + normalize in one place so every driver stores the same ranges.
    pub fn compose(pitch: f64, yaw: f64, max_pitch: f64) -> Self {
        Self {
            pitch: pitch.clamp(-max_pitch, max_pitch),
            yaw: normalize_yaw(yaw),
        }
    }
}

/// Which subsystem currently owns `RotationState`. Exactly one writer at a
/// time; the gallery never rotates while the focus viewer is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDriver {
    #[default]
    None,
    Dragging,
    Inertia,
    AutoRotate,
    Focused,
}

impl ActiveDriver {
    pub fn accepts_drag(self) -> bool {
        !matches!(self, ActiveDriver::Focused)
    }
}

/// Map any angle into `(-180, 180]`. Idempotent, so repeated stores never
/// drift.
pub fn normalize_yaw(deg: f64) -> f64 {
    let mut y = deg % 360.0;
    if y <= -180.0 {
        y += 360.0;
    } else if y > 180.0 {
        y -= 360.0;
    }
    y
}

/// Angular position of a tile on the sphere, `(pitch, yaw)` in degrees.
/// Depends only on the placement and segment count, never on the global
/// rotation.
pub fn tile_angles(placement: &TilePlacement, segments: u32) -> (f64, f64) {
    let unit = 180.0 / segments as f64;
    let yaw = unit * (placement.column_offset as f64 + (placement.span_x as f64 - 1.0) / 2.0);
    let pitch = unit * (placement.row_offset as f64 - (placement.span_y as f64 - 1.0) / 2.0);
    (pitch, yaw)
}

/// CSS transform for the sphere container; the one place the global rotation
/// is applied, so tiles rotate together without per-tile recomputation.
/// `--radius` is maintained by the stage as a px length.
pub fn sphere_transform(rotation: &RotationState) -> String {
    format!(
        "translateZ(calc(var(--radius) * -1)) rotateX({:.4}deg) rotateY({:.4}deg)",
        rotation.pitch, rotation.yaw
    )
}

/// Static CSS transform for one tile: orient on the sphere, then push outward
/// to the surface.
pub fn tile_transform(placement: &TilePlacement, segments: u32) -> String {
    let (pitch, yaw) = tile_angles(placement, segments);
    format!(
        "translate(-50%, -50%) rotateY({:.4}deg) rotateX({:.4}deg) translateZ(var(--radius))",
        yaw, pitch
    )
}
