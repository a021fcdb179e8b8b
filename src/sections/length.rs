//! Length section - three-tier length scoring.

use secrecy::{ExposeSecret, SecretString};
use crate::types::{Criterion, CriterionResult};

pub const MIN_LENGTH: usize = 8;
pub const EXCELLENT_LENGTH: usize = 12;

/// Scores the password length in characters (not bytes).
///
/// # Returns
/// - 25 points for 12+ characters
/// - 20 points for 8 to 11 characters
/// - 0 points otherwise
pub fn length_section(password: &SecretString) -> CriterionResult {
    let len = password.expose_secret().chars().count();
    let (points, feedback) = if len >= EXCELLENT_LENGTH {
        (25, "Password Length: 12+ characters (Excellent)")
    } else if len >= MIN_LENGTH {
        (20, "Password Length: 8+ characters (Good)")
    } else {
        (0, "Password Length: Too short (minimum 8 characters)")
    };
    CriterionResult {
        criterion: Criterion::Length,
        points,
        feedback,
    }
}
