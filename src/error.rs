use thiserror::Error;

#[derive(Error, Debug)]
pub enum CurveError {
    /// The property backend could not be constructed for a gas.
    #[error("property backend unavailable: {0}")]
    Backend(String),

    /// A state query the property library rejected (outside the valid
    /// phase envelope, failed convergence, …). Recoverable: sweeps degrade
    /// the affected grid point to a missing value.
    #[error("property lookup failed: {0}")]
    Lookup(String),

    /// Physically inconsistent input, e.g. a condensing temperature not
    /// greater than the evaporating temperature.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A reference table contained a missing value that cannot be encoded
    /// as a fixed-point integer.
    #[error("cannot encode table: {0}")]
    Encoding(String),

    /// Regression fitting failed (degenerate data, too few valid rows).
    #[error("regression failed: {0}")]
    Fit(String),

    /// Plot rendering failed.
    #[error("rendering failed: {0}")]
    Render(String),

    /// File-system failure while writing an artifact. Fatal for the
    /// pipeline invocation; never retried.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CurveError>;
