// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Printing decorator for commit enumerators

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::commit::Commit;
use crate::error::CommitsError;
use crate::log::Commits;

/// An enumerator that prints every commit it passes through
///
/// Each invocation calls the wrapped enumerator once, writes
/// `hash: <hash> subject=<subject> body=<body>` followed by the separator for
/// every commit in order, and returns the commits unchanged. Each record is
/// handed to the writer in a single `write_all` call.
///
/// A write failure aborts the invocation; bytes already accepted by the
/// writer stay there. Pass `&mut writer` to keep ownership of the sink.
///
/// The writer sits behind a `Mutex` held for a whole invocation, so a shared
/// `Printed` can be invoked from several threads and each invocation's
/// records stay contiguous.
#[derive(Debug)]
pub struct Printed<C, W> {
    commits: C,
    writer: Mutex<W>,
    separator: String,
}

impl<C, W> Printed<C, W> {
    /// Wrap `commits`, printing to `writer` with `separator` after each record
    #[must_use]
    pub fn new(commits: C, writer: W, separator: impl Into<String>) -> Self {
        Self {
            commits,
            writer: Mutex::new(writer),
            separator: separator.into(),
        }
    }

    /// The separator written after each record
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Unwrap the decorator, returning the writer
    pub fn into_writer(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: Commits, W: Write> Commits for Printed<C, W> {
    fn commits(&self) -> Result<Vec<Commit>, CommitsError> {
        let input = self.commits.commits()?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| CommitsError::SinkPoisoned)?;
        for commit in &input {
            let record = format!("{}{}", commit.pretty(), self.separator);
            writer.write_all(record.as_bytes())?;
        }
        debug!(count = input.len(), "Printed commits");
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;
    use std::io;
    use std::thread;

    fn fixed(commits: Vec<Commit>) -> impl Fn() -> Result<Vec<Commit>, CommitsError> {
        move || Ok(commits.clone())
    }

    /// Records every write call as its own chunk
    #[derive(Default)]
    struct Chunks(Vec<Vec<u8>>);

    impl Write for Chunks {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.push(buf.to_vec());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Accepts a fixed number of writes, then fails
    struct FailAfter {
        accepted: Vec<u8>,
        remaining: usize,
    }

    impl Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            self.remaining -= 1;
            self.accepted.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_print_single_commit() {
        let mut sink = Vec::new();
        let printed = Printed::new(fixed(vec![Commit::new("abc123", "t\n\nb")]), &mut sink, "\n");
        let commits = printed.commits().expect("print");
        drop(printed);

        assert_eq!(commits.len(), 1);
        assert_eq!(
            String::from_utf8(sink).expect("utf8"),
            "hash: abc123 subject=t body=b\n"
        );
    }

    #[test]
    fn test_print_sequence_with_trailing_separator() {
        let printed = Printed::new(
            fixed(vec![Commit::new("h1", "m1"), Commit::new("h2", "m2")]),
            Vec::new(),
            ";",
        );
        printed.commits().expect("print");

        assert_eq!(
            String::from_utf8(printed.into_writer()).expect("utf8"),
            "hash: h1 subject=m1 body=;hash: h2 subject=m2 body=;"
        );
    }

    #[test]
    fn test_returns_commits_unchanged() {
        let input = vec![
            Commit::new("h1", "Subject\n\nBody\n\nMore"),
            Commit::new("h2", ""),
        ];
        let printed = Printed::new(fixed(input.clone()), io::sink(), "\n");
        assert_eq!(printed.commits().expect("print"), input);
    }

    #[test]
    fn test_empty_sequence_writes_nothing() {
        let printed = Printed::new(fixed(Vec::new()), Vec::new(), "\n");
        assert!(printed.commits().expect("print").is_empty());
        assert!(printed.into_writer().is_empty());
    }

    #[test]
    fn test_one_write_per_commit() {
        let printed = Printed::new(
            fixed(vec![
                Commit::new("h1", "a\n\nb"),
                Commit::new("h2", "c"),
                Commit::new("h3", "d\n\ne\n\nf"),
            ]),
            Chunks::default(),
            "\n",
        );
        printed.commits().expect("print");

        let chunks = printed.into_writer().0;
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2], b"hash: h3 subject=d body=ef\n".to_vec());
    }

    #[test]
    fn test_each_invocation_prints_again() {
        let printed = Printed::new(fixed(vec![Commit::new("h1", "m1")]), Vec::new(), "|");
        printed.commits().expect("first");
        printed.commits().expect("second");

        assert_eq!(
            String::from_utf8(printed.into_writer()).expect("utf8"),
            "hash: h1 subject=m1 body=|hash: h1 subject=m1 body=|"
        );
    }

    #[test]
    fn test_write_failure_aborts_with_partial_output() {
        let mut sink = FailAfter {
            accepted: Vec::new(),
            remaining: 1,
        };
        let printed = Printed::new(
            fixed(vec![Commit::new("h1", "m1"), Commit::new("h2", "m2")]),
            &mut sink,
            "\n",
        );
        let result = printed.commits();
        drop(printed);

        assert!(matches!(result, Err(CommitsError::Write(_))));
        assert_eq!(
            String::from_utf8(sink.accepted).expect("utf8"),
            "hash: h1 subject=m1 body=\n"
        );
    }

    #[test]
    fn test_inner_failure_writes_nothing() {
        let failing = || -> Result<Vec<Commit>, CommitsError> {
            Err(CommitsError::RepositoryNotFound {
                path: "/nowhere".to_string(),
                source: git2::Error::from_str("could not find repository"),
            })
        };
        let printed = Printed::new(failing, Vec::new(), "\n");
        assert!(printed.commits().is_err());
        assert!(printed.into_writer().is_empty());
    }

    /// Panics on every write
    struct Exploding;

    impl Write for Exploding {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            panic!("sink exploded");
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn assert_sync<T: Sync>(_: &T) {}

    #[test]
    fn test_printed_is_sync() {
        let printed = Printed::new(fixed(vec![Commit::new("h1", "m1")]), io::sink(), "\n");
        assert_sync(&printed);
    }

    #[test]
    fn test_shared_across_threads() {
        let printed = Printed::new(
            fixed(vec![Commit::new("h1", "m1"), Commit::new("h2", "m2\n\nb")]),
            Vec::new(),
            "\n",
        );

        thread::scope(|s| {
            let handles: Vec<_> = (0..2).map(|_| s.spawn(|| printed.commits())).collect();
            for handle in handles {
                let commits = handle.join().expect("thread").expect("print");
                assert_eq!(commits.len(), 2);
            }
        });

        let group = "hash: h1 subject=m1 body=\nhash: h2 subject=m2 body=b\n";
        assert_eq!(
            String::from_utf8(printed.into_writer()).expect("utf8"),
            group.repeat(2)
        );
    }

    #[test]
    fn test_poisoned_sink_is_an_error() {
        let printed = Printed::new(fixed(vec![Commit::new("h1", "m1")]), Exploding, "\n");

        thread::scope(|s| {
            let panicked = s.spawn(|| printed.commits()).join();
            assert!(panicked.is_err());
        });

        assert!(matches!(printed.commits(), Err(CommitsError::SinkPoisoned)));
    }

    #[test]
    fn test_stacked_decorators() {
        let mut outer_sink = Vec::new();
        let mut inner_sink = Vec::new();
        let stacked = fixed(vec![Commit::new("h1", "m1")])
            .printed(&mut inner_sink, "\n")
            .printed(&mut outer_sink, ";");
        assert_eq!(stacked.separator(), ";");
        let commits = stacked.commits().expect("print");
        drop(stacked);

        assert_eq!(commits, vec![Commit::new("h1", "m1")]);
        assert_eq!(
            String::from_utf8(inner_sink).expect("utf8"),
            "hash: h1 subject=m1 body=\n"
        );
        assert_eq!(
            String::from_utf8(outer_sink).expect("utf8"),
            "hash: h1 subject=m1 body=;"
        );
    }
}
