#[inline]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

/// Splits cleaned name text into words on runs of whitespace and commas.
///
/// Hyphens are not boundaries here: "Smith-Carpenter" and
/// "Kelso-M.D." come out as single words, and it's up to the classifier to
/// decide whether the part after the hyphen is a suffix.
pub struct Segments<'a> {
    text: &'a str,
}

impl<'a> Segments<'a> {
    pub fn from_text(text: &'a str) -> Segments<'a> {
        Segments { text }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        // Skip any leading separators
        self.text = self.text.trim_start_matches(is_separator);

        if self.text.is_empty() {
            return None;
        }

        let next_separator = self.text.find(is_separator).unwrap_or(self.text.len());
        let word = &self.text[..next_separator];
        self.text = &self.text[next_separator..];

        Some(word)
    }
}

/// The pieces of a single word between hyphens, skipping empty pieces
/// ("Smith-" gives just "Smith").
pub fn hyphen_parts(word: &str) -> impl Iterator<Item = &str> {
    word.split('-').filter(|part| !part.is_empty())
}

/// The start of `word` through the end of its `count`th non-empty hyphen
/// piece, hyphens included ("Dr-Smith-Jr" with 2 gives "Dr-Smith").
pub fn leading_hyphen_parts(word: &str, count: usize) -> &str {
    if count == 0 {
        return "";
    }

    let mut start = 0;
    let mut end = 0;
    let mut seen = 0;

    for piece in word.split('-') {
        let piece_end = start + piece.len();
        if !piece.is_empty() {
            seen += 1;
            end = piece_end;
            if seen == count {
                break;
            }
        }
        start = piece_end + 1;
    }

    &word[..end]
}
