use super::utils::loose_key;

static HONORIFIC_PREFIXES: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/honorific_prefixes.rs"));

/// Whether the word looks like an honorific or title, ignoring case and
/// punctuation ("Dr.", "DR" and "dr.." all qualify).
pub fn is_prefix(word: &str) -> bool {
    HONORIFIC_PREFIXES.contains(&*loose_key(word))
}
