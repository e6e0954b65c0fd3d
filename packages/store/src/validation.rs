//! Client-side checks run on a proposed user name before it is submitted.
//!
//! The server only rejects a missing or empty name; everything else here is
//! enforced by the add form.

use std::sync::LazyLock;

use regex::Regex;

static VALID_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9 ]+$").expect("valid name pattern"));

/// Why a proposed name was rejected. The display text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("Please enter a user name")]
    Empty,
    #[error("Please enter a valid user name")]
    Blank,
    #[error("Please enter a name without special characters")]
    InvalidCharacters,
}

/// Validate a name typed into the add form.
///
/// Returns the trimmed name, which is what gets sent to the server.
pub fn validate_new_name(input: &str) -> Result<String, NameError> {
    if input.is_empty() {
        return Err(NameError::Empty);
    }
    if input.trim().is_empty() {
        return Err(NameError::Blank);
    }
    // ASCII letters, digits and spaces only
    if !VALID_NAME.is_match(input) {
        return Err(NameError::InvalidCharacters);
    }
    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_letters_digits_and_spaces() {
        assert_eq!(validate_new_name("Alice").unwrap(), "Alice");
        assert_eq!(validate_new_name("Agent 007").unwrap(), "Agent 007");
    }

    #[test]
    fn test_trims_surrounding_spaces() {
        assert_eq!(validate_new_name("  John Doe ").unwrap(), "John Doe");
    }

    #[test]
    fn test_rejects_empty_and_blank() {
        assert_eq!(validate_new_name(""), Err(NameError::Empty));
        assert_eq!(validate_new_name("   "), Err(NameError::Blank));
    }

    #[test]
    fn test_rejects_punctuation_and_unicode() {
        for name in ["John!", "o'brien", "a-b", "Zoë", "名前", "tab\tname"] {
            assert_eq!(
                validate_new_name(name),
                Err(NameError::InvalidCharacters),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(NameError::Empty.to_string(), "Please enter a user name");
        assert_eq!(NameError::Blank.to_string(), "Please enter a valid user name");
        assert_eq!(
            NameError::InvalidCharacters.to_string(),
            "Please enter a name without special characters"
        );
    }
}
