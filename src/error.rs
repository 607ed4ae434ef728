/// Errors returned by the fallible operations of [`driftbox`](crate).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A construction parameter or per-tick input is out of its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A region or surface has a zero or non-finite extent.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

/// Alias for `Result<T, driftbox::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "{name} must be finite, got {value}"
        )))
    }
}
