//! Value types produced by the evaluator and the classifier.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Upper bound of the aggregate score.
pub const MAX_SCORE: u8 = 100;

/// Aggregate password score in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Creates a score, saturating at [`MAX_SCORE`].
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_SCORE))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_SCORE)
    }
}

/// One independently scored password property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum Criterion {
    Length,
    Lowercase,
    Uppercase,
    Numbers,
    Special,
    Commonality,
}

impl Criterion {
    /// Evaluation order. Feedback is reported in this order.
    pub const ALL: [Criterion; 6] = [
        Criterion::Length,
        Criterion::Lowercase,
        Criterion::Uppercase,
        Criterion::Numbers,
        Criterion::Special,
        Criterion::Commonality,
    ];

    /// Most points this criterion can contribute.
    pub fn max_points(&self) -> u8 {
        match self {
            Criterion::Length => 25,
            _ => 15,
        }
    }
}

/// Outcome of a single criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CriterionResult {
    pub criterion: Criterion,
    pub points: u8,
    pub feedback: &'static str,
}

impl CriterionResult {
    pub fn passed(&self) -> bool {
        self.points > 0
    }
}

/// Ordinal strength band derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "UPPERCASE"))]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "WEAK",
            StrengthLevel::Fair => "FAIR",
            StrengthLevel::Good => "GOOD",
            StrengthLevel::Strong => "STRONG",
        }
    }

    /// Advisory sentence shown alongside the level.
    pub fn message(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak password, needs significant improvements.",
            StrengthLevel::Fair => "Moderate password, consider improvements.",
            StrengthLevel::Good => "Good password but could be stronger.",
            StrengthLevel::Strong => "Excellent! This is a secure password.",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of evaluating one password.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    /// One line per criterion, in [`Criterion::ALL`] order.
    pub feedback: Vec<String>,
    pub criteria: Vec<CriterionResult>,
}

impl PasswordEvaluation {
    pub(crate) fn from_results(criteria: Vec<CriterionResult>) -> Self {
        let total: u32 = criteria.iter().map(|r| u32::from(r.points)).sum();
        let score = PasswordScore::new(total.min(u32::from(MAX_SCORE)) as u8);
        let feedback = criteria.iter().map(|r| r.feedback.to_string()).collect();
        Self {
            score,
            feedback,
            criteria,
        }
    }

    pub fn strength(&self) -> StrengthLevel {
        StrengthLevel::from_score(i64::from(self.score.value()))
    }

    /// Points awarded for `criterion`, or 0 if it was not evaluated.
    pub fn points_for(&self, criterion: Criterion) -> u8 {
        self.criteria
            .iter()
            .find(|r| r.criterion == criterion)
            .map(|r| r.points)
            .unwrap_or(0)
    }
}
