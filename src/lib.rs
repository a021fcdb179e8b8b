//! Password strength analysis library
//!
//! Scores a password against six fixed composition rules (length, lowercase,
//! uppercase, numbers, special characters, commonality), producing a score in
//! `[0, 100]`, one feedback line per rule and a strength level.
//!
//! # Features
//!
//! - `cli` (default): Builds the `pwd-analyzer` binary and the interactive session
//! - `serde`: Derives `Serialize` for the public result types
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: File of extra common passwords, read by
//!   [`CommonPasswords::from_env`]
//!
//! # Example
//!
//! ```rust
//! use pwd_analyzer::{classify, evaluate_password_strength, StrengthLevel};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Passw0rd!".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! assert_eq!(evaluation.score.value(), 95);
//! assert_eq!(evaluation.feedback.len(), 6);
//!
//! let (level, message) = classify(evaluation.score.value().into());
//! assert_eq!(level, StrengthLevel::Strong);
//! println!("{level}: {message}");
//! ```

// Internal modules
mod blacklist;
mod classifier;
mod evaluator;
mod sections;
mod types;

#[cfg(feature = "cli")]
pub mod session;

// Public API
pub use blacklist::{
    blacklist_path_from_env, is_common_password, BlacklistError, CommonPasswords,
    BLACKLIST_PATH_ENV,
};
pub use classifier::classify;
pub use evaluator::{evaluate, evaluate_password_strength, PasswordAnalyzer};
pub use sections::SPECIAL_CHARS;
pub use types::{
    Criterion, CriterionResult, PasswordEvaluation, PasswordScore, StrengthLevel, MAX_SCORE,
};
