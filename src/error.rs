use thiserror::Error;

/// Top-level error type for zonohedron generation.
#[derive(Debug, Error)]
pub enum ZonoError {
    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised while validating build parameters, before any geometry is
/// computed.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} must be at least {min}")]
    TooSmall {
        parameter: &'static str,
        value: usize,
        min: usize,
    },

    #[error("parameter {parameter} = {value} must be positive")]
    NotPositive { parameter: &'static str, value: f64 },

    #[error("parameter {parameter} must be finite")]
    NotFinite { parameter: &'static str },

    #[error("unknown shape kind: {0}")]
    UnknownKind(String),
}

/// Errors related to geometric construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`ZonoError`].
pub type Result<T> = std::result::Result<T, ZonoError>;
