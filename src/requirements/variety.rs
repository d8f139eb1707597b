//! Character variety requirements - uppercase, lowercase, digits, special chars.
//!
//! All classes are ASCII. Non-ASCII letters and digits never satisfy them.

/// Characters accepted by [`has_special`].
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Checks for at least one character from [`SPECIAL_CHARACTERS`].
///
/// Whitespace, `` ` `` and `~` are not in the set.
pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}
