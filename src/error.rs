//! Unified error types for litterwatch
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.
//!
//! The alert evaluator itself is infallible: insufficient data degrades to
//! "no alert" rather than an error. Errors only arise at the edges, when
//! loading visits, reading configuration, or validating domain values.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the visit data source
    #[error("Visit source error: {0}")]
    Source(#[from] SourceError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from domain type validation
    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    /// No visit file given on the command line or in the config
    #[error("No visit history specified")]
    NoVisitsPath,

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from domain type validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Weight must be a finite, non-negative number of kilograms
    #[error("Invalid weight: {0} kg (must be finite and non-negative)")]
    InvalidWeight(f64),

    /// Monitoring mode string not recognized
    #[error("Unknown monitoring mode: '{0}' (expected strict, standard or kitten)")]
    UnknownMode(String),
}

/// Errors from loading visit records
#[derive(Error, Debug)]
pub enum SourceError {
    /// Visit file not found
    #[error("Visit file not found: {0}")]
    FileNotFound(String),

    /// Visit file exists but could not be read
    #[error("Failed to read visit file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Visit records could not be decoded
    #[error("Failed to parse visit records: {0}")]
    Parse(#[from] serde_json::Error),

    /// Visit file exists but holds no records
    #[error("Visit file is empty: {0}")]
    Empty(String),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
