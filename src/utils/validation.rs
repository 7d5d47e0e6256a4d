//! Input validation utilities

use validator::ValidationError;

/// Character-set check for Codeforces handles, used with
/// `#[validate(custom(...))]`; length is checked separately.
pub fn handle_charset(handle: &str) -> Result<(), ValidationError> {
    let valid = handle
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        let mut err = ValidationError::new("handle_charset");
        err.message =
            Some("Handle can only contain letters, digits, underscores, hyphens, and dots".into());
        Err(err)
    }
}
