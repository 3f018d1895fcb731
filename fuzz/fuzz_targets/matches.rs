#![no_main]
use libfuzzer_sys::fuzz_target;
use name_clean::matches;

fuzz_target!(|data: [String; 2]| {
    let [a, b] = data;
    assert_eq!(matches(&a, &b), matches(&b, &a));
});
