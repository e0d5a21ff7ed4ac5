//! Deck domain rules.
//!
//! The deck payload is opaque to this layer; only the name carries
//! constraints.

use crate::error::CoreError;

/// Maximum deck name length in bytes.
pub const MAX_DECK_NAME_LEN: usize = 255;

/// Validate that a deck name is non-blank and within the length limit.
pub fn validate_deck_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Deck name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_DECK_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Deck name exceeds maximum length of {MAX_DECK_NAME_LEN} bytes"
        )));
    }
    Ok(())
}
