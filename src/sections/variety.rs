//! Character class sections - lowercase, uppercase, numbers, special chars.

use secrecy::{ExposeSecret, SecretString};
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};
use crate::types::{Criterion, CriterionResult};

/// Characters counted as special. The hyphen is a literal member.
pub const SPECIAL_CHARS: &str = "!@#$%^&*_(),.?\":{}|<>-";

const CLASS_POINTS: u8 = 15;

fn class_section(
    password: &SecretString,
    criterion: Criterion,
    matches: impl Fn(char) -> bool,
    pass: &'static str,
    fail: &'static str,
) -> CriterionResult {
    let found = password.expose_secret().chars().any(matches);
    CriterionResult {
        criterion,
        points: if found { CLASS_POINTS } else { 0 },
        feedback: if found { pass } else { fail },
    }
}

/// Checks for at least one ASCII lowercase letter.
pub fn lowercase_section(password: &SecretString) -> CriterionResult {
    class_section(
        password,
        Criterion::Lowercase,
        |c| c.is_ascii_lowercase(),
        "Password contains lowercase letters",
        "Add lowercase letters to password",
    )
}

/// Checks for at least one ASCII uppercase letter.
pub fn uppercase_section(password: &SecretString) -> CriterionResult {
    class_section(
        password,
        Criterion::Uppercase,
        |c| c.is_ascii_uppercase(),
        "Password contains uppercase letters",
        "Add uppercase letters to password",
    )
}

/// Checks for at least one decimal digit in any script (category `Nd`).
pub fn numbers_section(password: &SecretString) -> CriterionResult {
    class_section(
        password,
        Criterion::Numbers,
        |c| c.general_category() == GeneralCategory::DecimalNumber,
        "Password contains numbers",
        "Add numbers to password",
    )
}

/// Checks for at least one character from [`SPECIAL_CHARS`].
pub fn special_section(password: &SecretString) -> CriterionResult {
    class_section(
        password,
        Criterion::Special,
        |c| SPECIAL_CHARS.contains(c),
        "Password contains special characters",
        "Add special characters to password",
    )
}
