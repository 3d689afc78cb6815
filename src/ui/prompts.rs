//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{NodeprepError, Result};

use super::Prompt;

/// Convert dialoguer errors to NodeprepError.
fn map_dialoguer_err(e: dialoguer::Error) -> NodeprepError {
    NodeprepError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for a line of text on `term`.
///
/// Empty answers are accepted and returned as-is.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<String> {
    let theme = prompt_theme();
    let answer = Input::<String>::with_theme(&theme)
        .with_prompt(&prompt.question)
        .allow_empty(true)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    tracing::debug!("Prompt '{}' answered", prompt.key);
    Ok(answer)
}
