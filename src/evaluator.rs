//! Password strength evaluator - runs every section and sums the points.

use secrecy::SecretString;

use crate::blacklist::CommonPasswords;
use crate::sections::{
    commonality_section, length_section, lowercase_section, numbers_section, special_section,
    uppercase_section,
};
use crate::types::{CriterionResult, PasswordEvaluation};

type Section = fn(&SecretString) -> CriterionResult;

/// Character-level sections in feedback order. Commonality runs last.
const SECTIONS: [(&str, Section); 5] = [
    ("length", length_section),
    ("lowercase", lowercase_section),
    ("uppercase", uppercase_section),
    ("numbers", numbers_section),
    ("special", special_section),
];

/// Evaluates passwords against a fixed common password set.
#[derive(Debug, Clone, Default)]
pub struct PasswordAnalyzer {
    common: CommonPasswords,
}

impl PasswordAnalyzer {
    pub fn new(common: CommonPasswords) -> Self {
        Self { common }
    }

    pub fn common_passwords(&self) -> &CommonPasswords {
        &self.common
    }

    /// Evaluates password strength and returns a detailed evaluation.
    pub fn evaluate(&self, password: &SecretString) -> PasswordEvaluation {
        run_sections(password, &self.common)
    }
}

fn run_sections(password: &SecretString, common: &CommonPasswords) -> PasswordEvaluation {
    let mut criteria = Vec::with_capacity(SECTIONS.len() + 1);

    for (_section_name, section_fn) in SECTIONS {
        let result = section_fn(password);
        #[cfg(feature = "tracing")]
        tracing::trace!(section = _section_name, points = result.points, "section evaluated");
        criteria.push(result);
    }
    criteria.push(commonality_section(password, common));

    let evaluation = PasswordEvaluation::from_results(criteria);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = evaluation.score.value(),
        strength = %evaluation.strength(),
        "password evaluated"
    );

    evaluation
}

/// Evaluates password strength against the built-in common password set.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `PasswordEvaluation` with the score and six feedback lines.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    run_sections(password, CommonPasswords::builtin())
}

/// Convenience wrapper over [`evaluate_password_strength`] for plain strings.
pub fn evaluate(password: &str) -> PasswordEvaluation {
    evaluate_password_strength(&SecretString::new(password.into()))
}
