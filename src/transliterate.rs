use std::borrow::Cow;

#[inline]
fn ascii_replacement(c: char) -> Option<&'static str> {
    match c {
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' => Some("'"),
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' => Some("\""),
        '\u{2026}' => Some("..."),
        '\u{2013}' | '\u{2014}' => Some("-"),
        '\u{02C6}' => Some("^"),
        '\u{202F}' => Some(" "),
        _ => None,
    }
}

/// Replace typographic punctuation (smart quotes, ellipsis, dashes and the
/// like) with plain ASCII. Everything else passes through untouched.
pub fn utf8_to_ascii(s: &str) -> Cow<str> {
    if s.is_ascii() || !s.chars().any(|c| ascii_replacement(c).is_some()) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match ascii_replacement(c) {
            Some(replacement) => result.push_str(replacement),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}
