//! Common password set
//!
//! Holds the built-in list of widely known weak passwords and optionally
//! extends it with entries loaded from a file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Environment variable naming an extra blacklist file.
pub const BLACKLIST_PATH_ENV: &str = "PWD_BLACKLIST_PATH";

const BUILTIN_ENTRIES: [&str; 14] = [
    "password",
    "123456",
    "12345678",
    "1234",
    "qwerty",
    "letmein",
    "football",
    "iloveyou",
    "admin",
    "welcome",
    "abc123",
    "123123",
    "monkey",
    "password1",
];

static BUILTIN: LazyLock<CommonPasswords> =
    LazyLock::new(|| CommonPasswords::from_entries(BUILTIN_ENTRIES));

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Case-insensitive set of passwords that lose the commonality points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonPasswords {
    entries: HashSet<String>,
}

impl CommonPasswords {
    /// The built-in set, initialized once per process.
    pub fn builtin() -> &'static CommonPasswords {
        &BUILTIN
    }

    fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Returns the built-in set extended with `extra` entries.
    ///
    /// Entries are trimmed and lower-cased; blank entries are skipped.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::builtin().clone();
        set.entries.extend(Self::from_entries(extra).entries);
        set
    }

    /// Loads newline-separated entries from `path` on top of the built-in set.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no non-blank lines
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: FileNotFound {}", path.display());
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: Empty file {}", path.display());
            return Err(BlacklistError::EmptyFile);
        }

        let set = Self::with_extra(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist loaded: {} passwords from {:?}", set.len(), path);

        Ok(set)
    }

    /// Reads `PWD_BLACKLIST_PATH` and loads that file, or falls back to the
    /// built-in set when the variable is unset.
    pub fn from_env() -> Result<Self, BlacklistError> {
        match blacklist_path_from_env() {
            Some(path) => Self::from_path(path),
            None => Ok(Self::builtin().clone()),
        }
    }

    /// Checks membership of the lower-cased `password`.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommonPasswords {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Returns the blacklist file path from `PWD_BLACKLIST_PATH`, if set.
pub fn blacklist_path_from_env() -> Option<PathBuf> {
    std::env::var_os(BLACKLIST_PATH_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Checks if a password is in the built-in set (case-insensitive).
pub fn is_common_password(password: &str) -> bool {
    CommonPasswords::builtin().contains(password)
}
