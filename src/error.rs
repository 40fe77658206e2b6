use thiserror::Error;

use crate::body::BodyId;
use crate::prelude::Scalar;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A simulation parameter is out of its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// A body violates the store invariants (mass, finiteness, unique id).
    #[error("invalid body {id:?}: {reason}")]
    InvalidBody { id: BodyId, reason: String },

    /// The frame delta was negative or not finite; the frame was not stepped.
    #[error("invalid frame delta: {0}")]
    InvalidDelta(Scalar),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
