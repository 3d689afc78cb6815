//! nodeprep - Python environment setup for plugin-based applications.
//!
//! nodeprep finds an application's install directory, finds (or creates)
//! its Python virtual environment, activates it, and installs the
//! requirements of every plugin found under the application's plugins
//! directory.
//!
//! # Modules
//!
//! - [`app_root`] - Application root discovery
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`package`] - Environment creation and package installation
//! - [`plugins`] - Plugin scanning, installation and reporting
//! - [`setup`] - The end-to-end pipeline
//! - [`shell`] - Subprocess execution
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//! - [`venv`] - Virtual environment discovery and activation
//!
//! # Example
//!
//! ```
//! use nodeprep::venv::{activate, ProcessEnv, VenvLayout};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let venv = temp.path().join("venv");
//! let marker = VenvLayout::current().marker_path(&venv);
//! fs::create_dir_all(marker.parent().unwrap()).unwrap();
//! fs::write(&marker, "").unwrap();
//!
//! let mut env = ProcessEnv::new(vec![]);
//! activate(&mut env, &venv, VenvLayout::current()).unwrap();
//! assert_eq!(env.virtual_env(), Some(venv.as_path()));
//! ```

pub mod app_root;
pub mod cli;
pub mod config;
pub mod error;
pub mod package;
pub mod plugins;
pub mod setup;
pub mod shell;
pub mod ui;
pub mod venv;

pub use error::{NodeprepError, Result};
