//! A library for cleaning the free-text fields of registrant records, and in
//! particular for splitting human names into leading titles, the base name,
//! and trailing suffixes or credentials, so that records can be compared on
//! the base name alone.
//!
//! ```
//! let parsed = name_clean::name_parse(Some("Dr Bob Kelso-M.D."));
//! assert_eq!(parsed.prefix, "Dr");
//! assert_eq!(parsed.base, "Bob Kelso");
//! assert_eq!(parsed.suffix, "M.D.");
//!
//! assert!(name_clean::matches("Bob Kelso", "BOB KELSO JR"));
//! ```

mod clean;
mod comparison;
mod date;
mod error;
mod parse;
mod phone;
mod segment;
mod suffix;
mod title;
mod transliterate;
mod utils;

#[cfg(feature = "serialization")]
pub mod serialization;

use compact_str::CompactString;
use tracing::debug;

pub use clean::{date, email, licet, license, name, trim};
pub use comparison::matches;
pub use date::is_same_date;
pub use error::{Error, Result};
pub use phone::{phone, phone_with, PhoneFormat, E164};
pub use transliterate::utf8_to_ascii;

/// A name split into its parts. Each part is a space-separated run of the
/// words of the cleaned input, in their original order, so the prefix, base
/// and suffix together account for every word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ParsedName {
    pub original: Option<String>,
    pub prefix: CompactString,
    pub base: CompactString,
    pub suffix: CompactString,
}

impl ParsedName {
    /// Parses a name. Never fails: missing or empty input gives empty parts,
    /// and any other input gives a non-empty base.
    pub fn parse(name: Option<&str>) -> ParsedName {
        let mut parsed = ParsedName {
            original: name.map(str::to_string),
            ..ParsedName::default()
        };

        let name = match name {
            Some(name) if !name.is_empty() => name,
            _ => return parsed,
        };

        let cleaned = utils::normalize_name(name);
        let words = parse::parse(&cleaned);

        parsed.prefix = join(&words.prefixes);
        parsed.base = join(&words.bases);
        parsed.suffix = join(&words.suffixes);

        debug!(
            prefix = %parsed.prefix,
            base = %parsed.base,
            suffix = %parsed.suffix,
            "parsed name"
        );

        parsed
    }

    /// All the parts, space-separated: the cleaned name, except that a
    /// suffix attached by a hyphen is now separated by a space.
    pub fn display_full(&self) -> String {
        [&self.prefix, &self.base, &self.suffix]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn join(words: &[&str]) -> CompactString {
    let mut joined = CompactString::default();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            joined.push(' ');
        }
        joined.push_str(word);
    }
    joined
}

/// Split a name into prefix, base and suffix; see [`ParsedName::parse`].
pub fn name_parse(name: Option<&str>) -> ParsedName {
    ParsedName::parse(name)
}

/// Just the base of the name, or `None` for missing or empty input.
pub fn name_base(name: Option<&str>) -> Option<CompactString> {
    let name = name.filter(|name| !name.is_empty())?;
    Some(ParsedName::parse(Some(name)).base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str, prefix: &str, base: &str, suffix: &str) {
        let parsed = name_parse(Some(name));
        assert_eq!(Some(name), parsed.original.as_deref(), "[{}] original", name);
        assert_eq!(parsed.prefix, prefix, "[{}] prefix", name);
        assert_eq!(parsed.base, base, "[{}] base", name);
        assert_eq!(parsed.suffix, suffix, "[{}] suffix", name);
    }

    #[test]
    fn multiple_prefixes_and_suffixes() {
        check(
            "REV Dr. Matthew Mark Luke John jr. M.D.",
            "REV Dr.",
            "Matthew Mark Luke John",
            "jr. M.D.",
        );
    }

    #[test]
    fn suffix_after_hyphen() {
        check("Dr Bob Kelso-M.D.", "Dr", "Bob Kelso", "M.D.");
    }

    #[test]
    fn suffix_after_comma() {
        check("Doctor Perry Cox,PhD", "Doctor", "Perry Cox", "PhD");
    }

    #[test]
    fn suffixes_only_at_end() {
        check("J.D. Turk RN", "", "J.D. Turk", "RN");
    }

    #[test]
    fn trailing_non_letters() {
        check("J.D. Turk RN .", "", "J.D. Turk", "RN");
    }

    #[test]
    fn base_even_if_prefix() {
        check("Dr.", "", "Dr.", "");
    }

    #[test]
    fn base_even_if_suffix() {
        check("J.D.", "", "J.D.", "");
    }

    #[test]
    fn regex_lookalikes() {
        check("J.D. JaDe", "", "J.D. JaDe", "");
    }

    #[test]
    fn leading_non_letters() {
        check("-Dr Professor Farnsworth - Ph.D.", "Dr Professor", "Farnsworth", "Ph.D.");
    }

    #[test]
    fn maiden_name() {
        check("Jane Smith - Carpenter", "", "Jane Smith-Carpenter", "");
    }

    #[test]
    fn missing() {
        let parsed = name_parse(None);
        assert_eq!(ParsedName::default(), parsed);
        assert_eq!(parsed.base, "");
    }

    #[test]
    fn empty() {
        check("", "", "", "");
    }

    #[test]
    fn whitespace_only() {
        check("   ", "", "", "");
    }

    #[test]
    fn base_only() {
        assert_eq!(None, name_base(None));
        assert_eq!(None, name_base(Some("")));
        assert_eq!(Some("Bob Kelso".into()), name_base(Some("Dr Bob Kelso-M.D.")));
    }

    #[test]
    fn display() {
        let parsed = name_parse(Some(" Dr  Bob Kelso-M.D. "));
        assert_eq!("Dr Bob Kelso M.D.", parsed.display_full());
        assert_eq!("", name_parse(None).display_full());
    }
}
