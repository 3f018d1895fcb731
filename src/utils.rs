use compact_str::CompactString;
use std::borrow::Cow;

/// Collapse runs of whitespace to a single space and trim both ends.
/// Never touches case or letters.
pub fn collapse_whitespace(s: &str) -> Cow<str> {
    let already_clean = !s.starts_with(char::is_whitespace)
        && !s.ends_with(char::is_whitespace)
        && !s
            .chars()
            .zip(s.chars().skip(1))
            .any(|(a, b)| a.is_whitespace() && (b.is_whitespace() || a != ' '));

    if already_clean {
        Cow::Borrowed(s)
    } else {
        let mut result = String::with_capacity(s.len());
        for word in s.split_whitespace() {
            if !result.is_empty() {
                result.push(' ');
            }
            result.push_str(word);
        }
        Cow::Owned(result)
    }
}

// " . -Dr." to "Dr."; "M.D . " to "M.D"
//
// Only ASCII letters count. Anything before the first letter goes, and if
// there's whitespace after the last letter, everything from the first such
// whitespace goes too.
pub fn trim_non_alpha_from_sides(s: &str) -> &str {
    let start = match s.find(|c: char| c.is_ascii_alphabetic()) {
        Some(i) => i,
        None => return s,
    };
    let s = &s[start..];

    let last_letter = s.rfind(|c: char| c.is_ascii_alphabetic()).unwrap_or(0);
    match s[last_letter..].find(char::is_whitespace) {
        Some(i) => &s[..last_letter + i],
        None => s,
    }
}

// "Smith - Carpenter" to "Smith-Carpenter"; a lone hyphen glues its
// neighbors together, however many there are in a row
pub fn collapse_spaced_hyphens(s: &str) -> Cow<str> {
    if !s.contains(" - ") {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut glue = true;
    for word in s.split(' ').filter(|w| !w.is_empty()) {
        if word == "-" {
            result.push('-');
            glue = true;
        } else {
            if !glue {
                result.push(' ');
            }
            result.push_str(word);
            glue = false;
        }
    }
    Cow::Owned(result)
}

/// Collapse whitespace, trim junk from the sides, and join spaced hyphens,
/// leaving a name ready to split into words.
pub fn normalize_name(s: &str) -> Cow<str> {
    match collapse_whitespace(s) {
        Cow::Borrowed(s) => collapse_spaced_hyphens(trim_non_alpha_from_sides(s)),
        Cow::Owned(s) => Cow::Owned(
            collapse_spaced_hyphens(trim_non_alpha_from_sides(&s)).into_owned(),
        ),
    }
}

/// Letters-only, uppercased form of a word, as used for word list lookups
/// ("M.D." to "MD"). Short keys stay inline, so this doesn't allocate for
/// anything name-sized.
pub fn loose_key(word: &str) -> CompactString {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse() {
        assert_eq!("John Smith", collapse_whitespace("  John \t Smith\n"));
        assert_eq!("John Smith", collapse_whitespace("John\u{a0}Smith"));
        assert!(matches!(collapse_whitespace("John Smith"), Cow::Borrowed(_)));
        assert_eq!("", collapse_whitespace("   "));
    }

    #[test]
    fn trim_sides() {
        assert_eq!("Dr.", trim_non_alpha_from_sides(" . -Dr."));
        assert_eq!("M.D", trim_non_alpha_from_sides("M.D . "));
        assert_eq!("J.D. Turk RN", trim_non_alpha_from_sides("J.D. Turk RN ."));
        assert_eq!("Smith-", trim_non_alpha_from_sides("Smith-"));
        assert_eq!("O'Neil", trim_non_alpha_from_sides("'O'Neil"));
    }

    #[test]
    fn trim_sides_without_letters() {
        assert_eq!("123", trim_non_alpha_from_sides("123"));
        assert_eq!("", trim_non_alpha_from_sides(""));
    }

    #[test]
    fn spaced_hyphens() {
        assert_eq!("Smith-Carpenter", collapse_spaced_hyphens("Smith - Carpenter"));
        assert_eq!("A-B-C", collapse_spaced_hyphens("A - B - C"));
        assert_eq!("Smith -Carpenter", collapse_spaced_hyphens("Smith -Carpenter"));
        assert_eq!("Bob--Smith", collapse_spaced_hyphens("Bob - - Smith"));
        assert_eq!("Bob--Smith Jr", collapse_spaced_hyphens("Bob - -Smith Jr"));
    }

    #[test]
    fn normalize() {
        assert_eq!(
            "Dr Professor Farnsworth-Ph.D.",
            normalize_name("-Dr  Professor Farnsworth - Ph.D.")
        );
        assert_eq!("Jane Smith-Carpenter", normalize_name(" Jane Smith -  Carpenter . "));
        assert!(matches!(normalize_name("Bob Kelso"), Cow::Borrowed(_)));
    }

    #[test]
    fn loose() {
        assert_eq!(loose_key("Dr."), "DR");
        assert_eq!(loose_key("dr.."), "DR");
        assert_eq!(loose_key("M.D."), "MD");
        assert_eq!(loose_key("..."), "");
        assert!(!loose_key("Dr.").is_heap_allocated());
    }
}
