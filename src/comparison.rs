use super::utils::loose_key;

// Below this many characters, containment is too likely to be a coincidence
const MIN_CONTAINMENT_CHARS: usize = 5;

/// Loose, case-insensitive comparison of two name strings.
///
/// If either string is shorter than five characters, they must be equal
/// once everything but letters is dropped. Otherwise it's enough for
/// either one to occur literally inside the other, so "Jonathan Smith"
/// matches "jonathan".
///
/// The containment check doesn't care how different the lengths are, so
/// "de la Rosa Hernandez" matches "Hernandez". That makes false positives
/// more likely for short strings that clear the length threshold, which
/// matters when one registrant signs up many others under a shared
/// address.
pub fn matches(a: &str, b: &str) -> bool {
    let a = a.to_uppercase();
    let b = b.to_uppercase();

    if a.chars().count() < MIN_CONTAINMENT_CHARS || b.chars().count() < MIN_CONTAINMENT_CHARS {
        return loose_key(&a) == loose_key(&b);
    }

    b.contains(a.as_str()) || a.contains(b.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_equal() {
        assert!(matches("Bob", "bob"));
        assert!(matches("J.D.", "jd"));
        assert!(matches("", ""));
    }

    #[test]
    fn short_not_contained() {
        assert!(!matches("Jonathan", "Jon"));
        assert!(!matches("Jon", "Jonathan"));
        assert!(!matches("Ki", "O"));
    }

    #[test]
    fn containment_either_direction() {
        assert!(matches("Jonathan Smith", "jonathan"));
        assert!(matches("jonathan", "Jonathan Smith"));
        assert!(matches("de la Rosa Hernandez", "HERNANDEZ"));
    }

    #[test]
    fn long_different() {
        assert!(!matches("Jonathan", "Johnathan"));
        assert!(!matches("Smith-Carpenter", "Smith Carpenter"));
    }

    #[test]
    fn special_characters() {
        assert!(matches("(Bob)+", "x(bob)+y"));
        assert!(!matches("A.*Z..", "abcdefz"));
        assert!(!matches("[a-z]+", "hello"));
        assert!(matches("Smith\\Jones", "smith\\jones"));
    }
}
