use super::segment::{hyphen_parts, leading_hyphen_parts, Segments};
use super::suffix;
use super::title;
use smallvec::SmallVec;
use tracing::trace;

/// Words of a name sorted into prefix titles, base name words and suffixes,
/// each in the order they appeared.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Categorized<'a> {
    pub prefixes: SmallVec<[&'a str; 2]>,
    pub bases: SmallVec<[&'a str; 4]>,
    pub suffixes: SmallVec<[&'a str; 2]>,
    // Set when categorizing the pieces of a hyphenated word that follows
    // a base word, so its leading pieces can already be suffixes
    after_base: bool,
}

/// Categorize the words of an already-normalized name.
pub fn parse(cleaned: &str) -> Categorized {
    let words: SmallVec<[&str; 7]> = Segments::from_text(cleaned).collect();
    categorize(&words)
}

// Classification is positional: titles can only come before the first base
// word and suffixes only after the last one. That's why hyphenated words need
// a recursive look inside, rather than a lookup of the whole word.
pub fn categorize<'a>(words: &[&'a str]) -> Categorized<'a> {
    categorize_in_context(words, false)
}

fn categorize_in_context<'a>(words: &[&'a str], after_base: bool) -> Categorized<'a> {
    let mut op = Categorized {
        after_base,
        ..Categorized::default()
    };

    match words {
        [] => {}
        // Never strip a lone word, even if it looks like a title ("Dr.") or a
        // credential ("J.D."); it's all the name we have
        [word] => op.bases.push(*word),
        _ => {
            for &word in words {
                op.handle_word(word);
            }
            op.promote_last_prefix();
        }
    }

    op
}

impl<'a> Categorized<'a> {
    fn found_base(&self) -> bool {
        self.after_base || !self.bases.is_empty()
    }

    fn handle_word(&mut self, word: &'a str) {
        if !self.found_base() && title::is_prefix(word) {
            self.prefixes.push(word);
        } else if self.found_base() && suffix::is_suffix(word) {
            self.suffixes.push(word);
        } else {
            self.handle_base_candidate(word);
        }
    }

    fn handle_base_candidate(&mut self, word: &'a str) {
        let parts: SmallVec<[&'a str; 4]> = hyphen_parts(word).collect();
        let inner = categorize_in_context(&parts, self.found_base());

        // "Smith Jr.-M.D." ends in a run of suffixes joined by a hyphen
        if inner.bases.is_empty() && !inner.suffixes.is_empty() {
            self.suffixes.extend(inner.suffixes);
            return;
        }

        // If we found any suffixes before reaching the end, they were false
        // positives, e.g. "Ann Jr Smith"
        if !self.suffixes.is_empty() {
            trace!(
                demoted = self.suffixes.len(),
                word,
                "suffixes followed by a base word"
            );
            self.bases.extend(self.suffixes.drain(..));
        }

        // "Kelso-M.D." is a base word with a suffix attached, but
        // "Smith-Carpenter" is a single compound or maiden name
        if inner.suffixes.is_empty() {
            self.bases.push(word);
        } else {
            trace!(word, suffixes = inner.suffixes.len(), "split suffix from hyphenated word");
            // Everything before the suffixes stays one hyphenated word, titles
            // included ("Dr-Smith-Jr" gives "Dr-Smith")
            let leading = inner.prefixes.len() + inner.bases.len();
            self.bases.push(leading_hyphen_parts(word, leading));
            self.suffixes.extend(inner.suffixes);
        }
    }

    // Something has to be the name: if every word looked like a title
    // ("Rev. Dr."), take the last of them as the base
    fn promote_last_prefix(&mut self) {
        if !self.found_base() {
            if let Some(prefix) = self.prefixes.pop() {
                self.bases.push(prefix);
            }
        }
    }
}
