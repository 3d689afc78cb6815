//! Error types for nodeprep operations.
//!
//! This module defines [`NodeprepError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! Every variant here is fatal to a run: the binary prints it and exits
//! nonzero. A single plugin failing to install is *not* an error; it is
//! recorded in [`crate::plugins::InstallReport`] and the run continues.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for nodeprep operations.
#[derive(Debug, Error)]
pub enum NodeprepError {
    /// Settings file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Settings parsed but hold unusable values.
    #[error("Invalid configuration: {message}")]
    ConfigValidation { message: String },

    /// The application root could not be validated, even after prompting.
    #[error(
        "The specified path '{path}' does not appear to be a valid application directory \
         (expected {markers})"
    )]
    InvalidAppRoot { path: PathBuf, markers: String },

    /// A user-supplied virtual environment lacks the activation marker.
    #[error(
        "The specified path '{path}' does not appear to be a valid virtual environment \
         (expected {marker})"
    )]
    InvalidVenv { path: PathBuf, marker: String },

    /// Creating a new virtual environment failed.
    #[error("Error creating virtual environment at {path}: {message}")]
    VenvCreationFailed { path: PathBuf, message: String },

    /// The activation marker vanished between discovery and activation.
    #[error("Virtual environment not found at {path}")]
    ActivationMarkerMissing { path: PathBuf },

    /// A prompt was needed but no answer source is available.
    #[error("Cannot prompt for '{key}' in non-interactive mode (set {env_var})")]
    PromptUnavailable { key: String, env_var: String },

    /// An external command could not be run or exited nonzero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for nodeprep operations.
pub type Result<T> = std::result::Result<T, NodeprepError>;
