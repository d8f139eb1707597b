//! Evaluation result types.

use std::fmt;

/// Coarse strength band derived from the percentage of satisfied requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Lower bound (inclusive) of the `Medium` band.
    pub const MEDIUM_THRESHOLD: f64 = 60.0;
    /// Lower bound (inclusive) of the `Strong` band.
    pub const STRONG_THRESHOLD: f64 = 80.0;

    /// Maps a strength percentage onto its band.
    ///
    /// Boundary values belong to the higher band. `NaN` compares false
    /// against both thresholds and lands in `Weak`.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= Self::STRONG_THRESHOLD {
            PasswordStrength::Strong
        } else if percentage >= Self::MEDIUM_THRESHOLD {
            PasswordStrength::Medium
        } else {
            PasswordStrength::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One checklist row: a requirement label and whether the evaluated
/// password met it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementStatus {
    pub label: &'static str,
    pub satisfied: bool,
}

impl RequirementStatus {
    pub fn marker(&self) -> char {
        if self.satisfied { '✓' } else { '○' }
    }
}

impl fmt::Display for RequirementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.marker(), self.label)
    }
}

/// Result of evaluating one password against the requirement list.
///
/// Only the per-requirement flags are stored. Counts, percentage, band and
/// validity are recomputed from them on every call, so they cannot drift
/// from the checklist.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordEvaluation {
    /// Checklist rows in canonical (display) order.
    pub requirements: Vec<RequirementStatus>,
}

impl PasswordEvaluation {
    pub fn satisfied_count(&self) -> usize {
        self.requirements.iter().filter(|r| r.satisfied).count()
    }

    pub fn total(&self) -> usize {
        self.requirements.len()
    }

    /// Percentage of satisfied requirements, in `[0, 100]`.
    pub fn strength_percentage(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        // Multiply first so 3/5 lands exactly on 60.0.
        (self.satisfied_count() * 100) as f64 / total as f64
    }

    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_percentage(self.strength_percentage())
    }

    /// `true` only when every requirement is satisfied.
    ///
    /// This is stricter than the `Strong` band: four out of five rules
    /// reads as `Strong` but is still invalid.
    pub fn is_valid(&self) -> bool {
        !self.requirements.is_empty() && self.requirements.iter().all(|r| r.satisfied)
    }

    /// Unsatisfied rows, in canonical order.
    pub fn unmet(&self) -> impl Iterator<Item = &RequirementStatus> {
        self.requirements.iter().filter(|r| !r.satisfied)
    }
}

impl fmt::Display for PasswordEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password strength: {}", self.strength())?;
        for req in &self.requirements {
            write!(f, "\n{}", req)?;
        }
        Ok(())
    }
}
