#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary streams must frame without panicking
    let (text, patterns) = stx::utils::parse_input(data);
    assert_eq!(text.last(), Some(&b'\n'));

    let tree = stx::build(&text);
    for pattern in patterns {
        assert!(!pattern.is_empty());
        let _ = stx::query(&tree, &pattern);
    }
});
