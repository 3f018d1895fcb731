use super::utils::loose_key;

static CREDENTIAL_SUFFIXES: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/credential_suffixes.rs"));

/// Whether the word looks like a generational suffix or a credential,
/// ignoring case and punctuation ("M.D.", "md" and "Ph.D." all qualify).
pub fn is_suffix(word: &str) -> bool {
    CREDENTIAL_SUFFIXES.contains(&*loose_key(word))
}
