//! Host-facing validator that re-evaluates on every password change and
//! reports validity to an observer.

use secrecy::{ExposeSecret, SecretString};

use crate::evaluator::evaluate;
use crate::types::PasswordEvaluation;

/// Receives the validity of each fresh evaluation.
pub trait ValidationObserver {
    fn on_validation_change(&mut self, is_valid: bool);
}

impl<F> ValidationObserver for F
where
    F: FnMut(bool),
{
    fn on_validation_change(&mut self, is_valid: bool) {
        self(is_valid)
    }
}

/// Binds the evaluator to a host observer.
///
/// Every [`update`](Self::update) evaluates the supplied password, replaces
/// the displayed result and notifies the observer exactly once. Repeated
/// values are evaluated and notified again.
#[derive(Debug)]
pub struct PasswordValidator<O> {
    observer: O,
    current: Option<PasswordEvaluation>,
}

impl<O: ValidationObserver> PasswordValidator<O> {
    pub fn new(observer: O) -> Self {
        Self {
            observer,
            current: None,
        }
    }

    /// Evaluates `password`, stores the result and notifies the observer.
    pub fn update(&mut self, password: &SecretString) -> &PasswordEvaluation {
        let evaluation = evaluate(password.expose_secret());
        let is_valid = evaluation.is_valid();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            satisfied = evaluation.satisfied_count(),
            valid = is_valid,
            "password changed"
        );

        let evaluation = self.current.insert(evaluation);
        self.observer.on_validation_change(is_valid);
        evaluation
    }

    /// Last evaluation, or `None` before the first update.
    pub fn current(&self) -> Option<&PasswordEvaluation> {
        self.current.as_ref()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }
}
