#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    text: Vec<u8>,
    patterns: Vec<Vec<u8>>,
}

fuzz_target!(|input: Input| {
    // Every answer must agree with a plain scan of the text
    let tree = stx::build(&input.text);

    for pattern in &input.patterns {
        let expected = stx::query::naive_occurrences(&input.text, pattern);
        assert_eq!(stx::query(&tree, pattern), expected);
    }
});
