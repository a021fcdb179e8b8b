//! Commonality section - checks if password is in the common password set.

use crate::blacklist::CommonPasswords;
use crate::types::{Criterion, CriterionResult};
use secrecy::{ExposeSecret, SecretString};

/// Awards 15 points when the lower-cased password is not in `common`.
pub fn commonality_section(
    password: &SecretString,
    common: &CommonPasswords,
) -> CriterionResult {
    let is_common = common.contains(password.expose_secret());
    CriterionResult {
        criterion: Criterion::Commonality,
        points: if is_common { 0 } else { 15 },
        feedback: if is_common {
            "Avoid common passwords"
        } else {
            "Not a common password"
        },
    }
}
