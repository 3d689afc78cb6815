//! Settings loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File loading and override layering in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use nodeprep::config::{load_settings, SettingsOverrides};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("nodeprep.yml");
//! fs::write(&path, "plugins_dir: extensions").unwrap();
//!
//! let settings = load_settings(Some(&path), &SettingsOverrides::default()).unwrap();
//! assert_eq!(settings.plugins_dir, std::path::PathBuf::from("extensions"));
//! assert_eq!(settings.manifest, "requirements.txt");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{load_settings, load_settings_file, parse_settings, SettingsOverrides};
pub use schema::Settings;
pub use validator::validate;
