//! # Culler Error Types
//!
//! Culling itself is total; only configuration can fail.

use thiserror::Error;

/// Errors that can occur while configuring a culler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CullError {
    /// The configuration document could not be parsed.
    #[error("invalid culler configuration: {0}")]
    InvalidConfig(String),

    /// A toggle name other than `visible` or `renderable`.
    #[error("unknown toggle field `{0}`, expected `visible` or `renderable`")]
    UnknownToggle(String),
}

/// Result type for culler configuration.
pub type CullResult<T> = Result<T, CullError>;
