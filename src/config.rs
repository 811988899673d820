use crate::error::GalleryError;

/// One image supplied by the host page. Immutable once handed to the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub source: String,
    pub alt_text: String,
}

/// Which viewport dimension the sphere radius is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitBasis {
    /// Geometric mean of width and height; tracks both dimensions smoothly.
    #[default]
    Auto,
    Min,
    Max,
    Width,
    Height,
}

impl FitBasis {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(Self::Auto),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            "width" => Some(Self::Width),
            "height" => Some(Self::Height),
            _ => None,
        }
    }
}

/// Gallery tuning options. Everything has a usable default.
#[derive(Debug, Clone)]
pub struct GalleryOptions {
    /// Number of angular columns on the sphere.
    pub segments: u32,
    /// Fraction of the fit basis length used as the sphere radius.
    pub fit: f64,
    pub fit_basis: FitBasis,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Viewer padding as a fraction of the radius.
    pub pad_factor: f64,
    pub max_vertical_rotation_deg: f64,
    /// Pixels of pointer travel per degree of rotation.
    pub drag_sensitivity: f64,
    /// Duration of the open/close focus transitions.
    pub transition_ms: f64,
    /// Inertia dampening in [0, 1]; higher coasts longer.
    pub dampening: f64,
    /// Explicit opened viewer size; `None` keeps the padded natural frame.
    pub opened_width: Option<f64>,
    pub opened_height: Option<f64>,
    pub tile_radius_px: f64,
    pub opened_radius_px: f64,
    pub grayscale: bool,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            segments: 35,
            fit: 0.5,
            fit_basis: FitBasis::Auto,
            min_radius: 600.0,
            max_radius: f64::INFINITY,
            pad_factor: 0.25,
            max_vertical_rotation_deg: 5.0,
            drag_sensitivity: 20.0,
            transition_ms: 300.0,
            dampening: 0.6,
            opened_width: None,
            opened_height: None,
            tile_radius_px: 30.0,
            opened_radius_px: 30.0,
            grayscale: true,
        }
    }
}

impl GalleryOptions {
    /// Fail-fast validation at mount time.
    pub fn validate(&self, images: &[ImageDescriptor]) -> Result<(), GalleryError> {
        if images.is_empty() {
            return Err(GalleryError::Configuration("image list is empty".into()));
        }
        if self.segments == 0 {
            return Err(GalleryError::Configuration(
                "segments must be at least 1".into(),
            ));
        }
        if !(self.fit > 0.0) {
            return Err(GalleryError::Configuration(format!(
                "fit must be positive, got {}",
                self.fit
            )));
        }
        if !(self.drag_sensitivity > 0.0) {
            return Err(GalleryError::Configuration(format!(
                "drag_sensitivity must be positive, got {}",
                self.drag_sensitivity
            )));
        }
        if !(0.0..=1.0).contains(&self.dampening) {
            return Err(GalleryError::Configuration(format!(
                "dampening must be within [0, 1], got {}",
                self.dampening
            )));
        }
        if !(self.transition_ms >= 0.0) {
            return Err(GalleryError::Configuration(format!(
                "transition_ms must be non-negative, got {}",
                self.transition_ms
            )));
        }
        if self.min_radius > self.max_radius {
            return Err(GalleryError::Configuration(format!(
                "min_radius {} exceeds max_radius {}",
                self.min_radius, self.max_radius
            )));
        }
        Ok(())
    }
}
