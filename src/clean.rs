//! Cleaners for the free-text fields that come in with a registrant record.
//!
//! These don't fail: missing or empty input comes back as `None`, so calls
//! can be chained on optional fields.

use super::utils::{collapse_whitespace, trim_non_alpha_from_sides};

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn trim(s: &str) -> String {
    collapse_whitespace(s).into_owned()
}

/// A license number, whitespace-collapsed.
pub fn license(s: &str) -> String {
    trim(s)
}

/// A licet (license type or credential code), whitespace-collapsed.
pub fn licet(s: &str) -> String {
    trim(s)
}

/// An email address with surrounding whitespace removed.
pub fn email(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.is_empty()).map(|s| s.trim().to_string())
}

/// A display name with whitespace collapsed and any junk before the first
/// letter or after the last word removed.
pub fn name(s: Option<&str>) -> Option<String> {
    let s = s.filter(|s| !s.is_empty())?;
    Some(trim_non_alpha_from_sides(&collapse_whitespace(s)).to_string())
}

/// Passes dates through as-is.
pub fn date<T>(date: T) -> T {
    date
}
