// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for inventory generation
//!
//! Each stage of a run has its own error type so callers can tell a missing
//! credential apart from a failed fetch or an unrepresentable document. All of
//! them fold into [`InventoryError`] for the entry point.

use thiserror::Error;

/// A required environment variable together with what it is for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingVariable {
    pub name: &'static str,
    pub description: &'static str,
}

/// Configuration could not be resolved from the environment
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more required variables are unset
    #[error("missing environment variables: {}", format_missing(.0))]
    MissingVariables(Vec<MissingVariable>),

    /// A variable is set but cannot be parsed
    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

fn format_missing(missing: &[MissingVariable]) -> String {
    missing
        .iter()
        .map(|var| format!("{} ({})", var.name, var.description))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Retrieving or decoding the instance list failed
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed
    #[error("failed to create HTTP client: {0}")]
    Client(String),

    /// The request never produced a response
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    /// The API answered with a non-success status
    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body is not a valid droplet listing
    #[error("failed to decode droplet listing: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The inventory contains a value the JSON wire format cannot carry
#[derive(Debug, Error)]
#[error("failed to serialize inventory: {0}")]
pub struct SerializationError(#[from] serde_json::Error);

/// Any failure along the config → fetch → build → serialize pipeline
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Serialization(#[from] SerializationError),
}

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;
