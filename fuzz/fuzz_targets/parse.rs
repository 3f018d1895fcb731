#![no_main]
use libfuzzer_sys::fuzz_target;
use name_clean::{name, name_parse};

fn words(s: &str) -> Vec<&str> {
    s.split(|c: char| c.is_whitespace() || c == ',' || c == '-')
        .filter(|w| !w.is_empty())
        .collect()
}

fuzz_target!(|data: &str| {
    let parsed = name_parse(Some(data));
    let cleaned = name(Some(data)).unwrap_or_default();

    // Every word of the cleaned name lands in exactly one part, in order
    let full = parsed.display_full();
    assert_eq!(words(&cleaned), words(&full));

    if !words(&cleaned).is_empty() {
        assert!(!parsed.base.is_empty());
    }
});
