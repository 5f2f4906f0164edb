//! Error types for the selection domain.

use thiserror::Error;

/// Error returned while parsing a generation mode name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown generation mode: {0}")]
pub struct ParseGenerationModeError(pub String);
