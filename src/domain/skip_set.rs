// SPDX-License-Identifier: MIT OR Apache-2.0

//! The set of variable names that are never written to the YAML output.

use std::collections::BTreeSet;

/// Keys excluded from the deployment file by default.
///
/// `NEXTAUTH_URL` is set by the platform itself and the credentials file path
/// points at a local file that does not exist in the deployed container.
pub const DEFAULT_SKIPPED_KEYS: [&str; 2] = ["NEXTAUTH_URL", "GOOGLE_APPLICATION_CREDENTIALS"];

/// A fixed set of key names excluded from conversion.
///
/// Membership is an exact, case-sensitive match on the trimmed key.
///
/// # Examples
///
/// ```
/// use envyaml::domain::SkipSet;
///
/// let skip = SkipSet::default();
/// assert!(skip.contains("NEXTAUTH_URL"));
/// assert!(!skip.contains("DATABASE_URL"));
///
/// let custom = SkipSet::from_keys(["SECRET"]);
/// assert!(custom.contains("SECRET"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkipSet(BTreeSet<String>);

impl SkipSet {
    /// Creates a skip set that excludes nothing.
    pub fn empty() -> Self {
        SkipSet(BTreeSet::new())
    }

    /// Creates a skip set from the given key names.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SkipSet(keys.into_iter().map(Into::into).collect())
    }

    /// Returns `true` if `key` must be excluded.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    /// Returns the number of excluded keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the excluded keys in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for SkipSet {
    fn default() -> Self {
        Self::from_keys(DEFAULT_SKIPPED_KEYS)
    }
}

impl<S: Into<String>> FromIterator<S> for SkipSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}
