// Shared tuning constants for the dome gallery.

// Drag
pub const DRAG_MOVE_THRESHOLD_SQ: f64 = 16.0; // squared px before a press counts as a drag

// Inertia
pub const MAX_RELEASE_VELOCITY: f64 = 1.4; // per-axis release velocity clamp, deg/frame
pub const INERTIA_GAIN: f64 = 1.2; // applied after the clamp
pub const FRICTION_BASE: f64 = 0.94;
pub const FRICTION_SPAN: f64 = 0.055; // friction = BASE + SPAN * dampening
pub const INERTIA_FRAME_CAP_BASE: u32 = 90;
pub const INERTIA_FRAME_CAP_SPAN: u32 = 270; // cap = BASE + SPAN * dampening
pub const INERTIA_STOP_BASE: f64 = 0.06;
pub const INERTIA_STOP_SPAN: f64 = 0.05; // threshold = BASE - SPAN * dampening

// Idle rotation
pub const AUTO_ROTATE_DEG_PER_MS: f64 = 0.0045; // slow constant yaw drift

// Focus viewer
pub const CLOSE_GUARD_MS: f64 = 250.0; // close requests this soon after opening are ignored
pub const TILE_RESTORE_FADE_MS: f64 = 120.0; // tile fade-in after the viewer closes
pub const MIN_VIEWER_PAD_PX: f64 = 8.0;

// Tile sizing: chord length of one angular segment, widened so neighbours
// overlap slightly instead of leaving seams.
pub const TILE_CHORD_FACTOR: f64 = 1.15;
