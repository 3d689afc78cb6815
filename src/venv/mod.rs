//! Virtual environment discovery, creation, and activation.
//!
//! - [`layout`] - Platform-specific marker and executables directory
//! - [`finder`] - Candidate search, prompt fallback, and creation
//! - [`activation`] - The [`ProcessEnv`] handed to child processes

pub mod activation;
pub mod finder;
pub mod layout;

pub use activation::{activate, ProcessEnv, PATH_VAR, VIRTUAL_ENV_VAR};
pub use finder::{
    candidate_paths, find_existing, resolve_candidate, FoundVenv, VenvFinder, VenvOrigin,
    VENV_PATH_PROMPT_KEY,
};
pub use layout::VenvLayout;
