//! Shared helpers for command handlers.

use std::io::{self, IsTerminal};

use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed. Without a
/// terminal to ask on, the action is refused instead of assumed.
pub fn confirm(message: &str, action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()?;
    Ok(confirmed)
}

/// Read one line of input, trimmed. An empty answer is returned as-is so
/// the session can reject it with a proper validation error.
pub fn prompt(message: &str) -> Result<String, CliError> {
    let answer: String = dialoguer::Input::new()
        .with_prompt(message)
        .allow_empty(true)
        .interact_text()?;
    Ok(answer.trim().to_owned())
}

/// Join trailing free-form words, e.g. `rename tv Living Room TV`.
pub fn join_words(words: &[String]) -> String {
    words.join(" ").trim().to_owned()
}

/// Empty-cell placeholder for optional table values.
pub fn or_dash(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .map_or_else(|| "-".into(), ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_flag_skips_prompt() {
        assert!(matches!(confirm("Reboot?", "reboot", true), Ok(true)));
    }

    #[test]
    fn words_are_joined_with_spaces() {
        let words = vec!["Living".to_owned(), "Room".to_owned(), "TV".to_owned()];
        assert_eq!(join_words(&words), "Living Room TV");
        assert_eq!(join_words(&[]), "");
    }

    #[test]
    fn missing_values_render_as_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(Some("eero Pro 6")), "eero Pro 6");
    }
}
