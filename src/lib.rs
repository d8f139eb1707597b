//! Password requirements checklist
//!
//! Evaluates a candidate password against a fixed, ordered set of
//! requirements and reports which are satisfied, a coarse strength band
//! and whether the password is valid (every requirement met).
//!
//! # Features
//!
//! - `async` (default): Enables the channel-driven [`watch_password_changes`] loop
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_requirements::{evaluate_password_strength, PasswordStrength, PasswordValidator};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefgh1".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! // 4 of 5 requirements: strong band, but not valid
//! assert_eq!(evaluation.strength(), PasswordStrength::Strong);
//! assert!(!evaluation.is_valid());
//! println!("{}", evaluation);
//!
//! // Host form binding: one callback per change
//! let mut submit_enabled = false;
//! let mut validator = PasswordValidator::new(|valid: bool| submit_enabled = valid);
//! validator.update(&SecretString::new("Abcdefg1!".to_string().into()));
//! drop(validator);
//! assert!(submit_enabled);
//! ```

mod evaluator;
mod requirements;
mod types;
mod validator;

#[cfg(feature = "async")]
mod watch;

// Public API
pub use evaluator::{evaluate, evaluate_password_strength};
pub use requirements::{
    has_digit, has_lowercase, has_min_length, has_special, has_uppercase, PasswordRequirement,
    Predicate, MIN_LENGTH, REQUIREMENTS, SPECIAL_CHARACTERS,
};
pub use types::{PasswordEvaluation, PasswordStrength, RequirementStatus};
pub use validator::{PasswordValidator, ValidationObserver};

#[cfg(feature = "async")]
pub use watch::{watch_password_changes, WatchError};
