use thiserror::Error;

/// Result type alias for all fallible operations of this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while optimizing rotations or packing sheets.
///
/// Oversized parts are not errors: they are reported as
/// [`OversizedPart`](crate::entities::OversizedPart) warnings on the packing result.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A required scalar input was absent.
    #[error("missing required input: {field}")]
    MissingRequiredInput { field: &'static str },

    /// An input was present but outside of its valid domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The geometry of a part could not produce a bounding rectangle.
    #[error("part {part_index} has degenerate geometry, no bounding rectangle could be computed")]
    DegenerateGeometry { part_index: usize },

    /// The computation was cancelled through a [`CancelToken`](crate::util::CancelToken).
    #[error("computation cancelled")]
    Cancelled,

    /// The configuration is not usable.
    #[error("configuration error: {0}")]
    Config(String),
}
