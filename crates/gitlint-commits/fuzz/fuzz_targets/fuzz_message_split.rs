#![no_main]

use gitlint_commits::{Commit, PARAGRAPH_SEPARATOR};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|message: &str| {
    let commit = Commit::new("0000000000000000000000000000000000000000", message);
    let subject = commit.subject();
    let body = commit.body();

    assert!(!subject.contains(PARAGRAPH_SEPARATOR));
    assert!(message.starts_with(subject));
    assert!(body.len() <= message.len() - subject.len());
    if !message.contains(PARAGRAPH_SEPARATOR) {
        assert!(body.is_empty());
    }
    let _ = commit.pretty().to_string();
});
