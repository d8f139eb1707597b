//! Password requirements
//!
//! Each requirement is a label paired with a pure predicate. The list is a
//! process-wide constant; evaluation never mutates it.

mod length;
mod variety;

pub use length::{has_min_length, MIN_LENGTH};
pub use variety::{has_digit, has_lowercase, has_special, has_uppercase, SPECIAL_CHARACTERS};

use crate::types::RequirementStatus;

/// Predicate signature shared by every requirement.
pub type Predicate = fn(&str) -> bool;

/// A named rule a password may or may not satisfy.
#[derive(Debug, Clone, Copy)]
pub struct PasswordRequirement {
    pub label: &'static str,
    pub predicate: Predicate,
}

impl PasswordRequirement {
    pub const fn new(label: &'static str, predicate: Predicate) -> Self {
        Self { label, predicate }
    }

    pub fn is_satisfied_by(&self, password: &str) -> bool {
        (self.predicate)(password)
    }

    pub fn check(&self, password: &str) -> RequirementStatus {
        RequirementStatus {
            label: self.label,
            satisfied: self.is_satisfied_by(password),
        }
    }
}

/// The fixed rule set, in display order.
pub static REQUIREMENTS: [PasswordRequirement; 5] = [
    PasswordRequirement::new("At least 8 characters long", has_min_length),
    PasswordRequirement::new("Contains at least one uppercase letter", has_uppercase),
    PasswordRequirement::new("Contains at least one lowercase letter", has_lowercase),
    PasswordRequirement::new("Contains at least one number", has_digit),
    PasswordRequirement::new("Contains at least one special character", has_special),
];
