use thiserror::Error;

/// Failures the gallery can report.
///
/// Configuration errors fail fast at mount and leave nothing mounted.
/// Measurement errors are recovered locally: the focus transition is aborted
/// and the gallery keeps rotating.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("invalid gallery configuration: {0}")]
    Configuration(String),
    #[error("could not measure {0} rect")]
    Measurement(&'static str),
}
