//! Toy color palette validation.

use crate::error::CoreError;

/// Colors a toy may be created or updated with.
pub const TOY_COLORS: &[&str] = &[
    "red", "orange", "yellow", "green", "blue", "purple", "pink", "black", "white", "gray",
    "brown",
];

/// Validate that `color` is one of the palette values.
pub fn validate_color(color: &str) -> Result<(), CoreError> {
    if TOY_COLORS.contains(&color) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid color '{color}'. Must be one of: {TOY_COLORS:?}"
        )))
    }
}
