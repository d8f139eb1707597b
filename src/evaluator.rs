//! Password requirements evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::requirements::REQUIREMENTS;
use crate::types::PasswordEvaluation;

/// Evaluates a password against every requirement, in canonical order.
///
/// Total over all inputs: the empty string and arbitrary Unicode produce a
/// well-defined result. Calling it twice with the same input yields equal
/// results.
pub fn evaluate(password: &str) -> PasswordEvaluation {
    let requirements = REQUIREMENTS.iter().map(|req| req.check(password)).collect();
    let evaluation = PasswordEvaluation { requirements };

    #[cfg(feature = "tracing")]
    tracing::trace!(
        satisfied = evaluation.satisfied_count(),
        total = evaluation.total(),
        valid = evaluation.is_valid(),
        "password evaluated"
    );

    evaluation
}

/// Evaluates a secret password and returns its requirements checklist.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `PasswordEvaluation` with one row per requirement. The password itself
/// is not retained.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    evaluate(password.expose_secret())
}
