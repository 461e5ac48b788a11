//! Error types for config generation

use thiserror::Error;

/// Errors produced while turning CLI input into a docker config document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// One or more required options were empty
    #[error("Inputs Missing ! ({})", .0.iter().map(|name| format!("--{}", name)).collect::<Vec<_>>().join(", "))]
    MissingInput(Vec<&'static str>),
    /// JSON encoding of the document failed
    #[error("Failed to serialize docker config: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
