//! Length requirement - checks password minimum length.

pub const MIN_LENGTH: usize = 8;

/// Checks if the password has at least [`MIN_LENGTH`] characters.
///
/// Length is measured in UTF-16 code units, the way browser form fields
/// report it: a character outside the Basic Multilingual Plane (emoji,
/// CJK extensions) counts twice, any other character once.
pub fn has_min_length(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_LENGTH
}
