use thiserror::Error;

/// Errors raised while assembling a scene from invalid values.
///
/// Tracing itself never fails; every check happens before a render starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("Plane normal has zero length")]
    DegenerateNormal,

    #[error("Refraction index must be positive and finite, got {0}")]
    InvalidRefractionIndex(f64),

    #[error("{what} must be non-negative, got {value}")]
    Negative { what: &'static str, value: f64 },
}

/// Result type for scene assembly.
pub type SceneResult<T> = Result<T, SceneError>;

/// Reject negative or NaN values for fields that must be `>= 0`.
pub(crate) fn non_negative(what: &'static str, value: f64) -> SceneResult<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SceneError::Negative { what, value })
    }
}
