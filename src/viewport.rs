use crate::config::{FitBasis, GalleryOptions};
use crate::constants::MIN_VIEWER_PAD_PX;

/// Sphere radius for a viewport, in px. Degenerate viewports fall back to the
/// configured minimum.
pub fn sphere_radius(width: f64, height: f64, options: &GalleryOptions) -> f64 {
    if width <= 0.0 || height <= 0.0 {
        return options.min_radius;
    }
    let basis = match options.fit_basis {
        FitBasis::Min => width.min(height),
        FitBasis::Max => width.max(height),
        FitBasis::Width => width,
        FitBasis::Height => height,
        FitBasis::Auto => (width * height).sqrt(),
    };
    (basis * options.fit).clamp(options.min_radius, options.max_radius)
}

/// Padding kept between the opened viewer and the viewport edges.
pub fn viewer_pad(radius: f64, pad_factor: f64) -> f64 {
    (radius * pad_factor).max(MIN_VIEWER_PAD_PX)
}

/// Side length of one tile for the current radius: the chord subtended by a
/// full segment, widened by the overlap factor.
pub fn tile_span_px(radius: f64, segments: u32) -> f64 {
    let segment_angle = std::f64::consts::PI / segments.max(1) as f64;
    2.0 * radius * segment_angle.sin() * crate::constants::TILE_CHORD_FACTOR
}
