//! External command execution and executable lookup.

pub mod command;
pub mod path;
pub mod platform;

pub use command::{display_command, execute, CommandOptions, CommandResult};
pub use path::{find_executable, is_bare_name};
pub use platform::{default_python, is_ci};
