// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit value type and its textual rendering

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separates paragraphs of a commit message
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// A single commit: its identifier and full message
///
/// Values are immutable once constructed. The subject is the first paragraph
/// of the message and the body is every following paragraph, concatenated
/// without a joiner, so a message with three or more paragraphs loses its
/// inner paragraph breaks in [`Commit::body`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commit {
    hash: String,
    message: String,
}

impl Commit {
    /// Create a commit from its identifier and raw message
    #[must_use]
    pub fn new(hash: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            message: message.into(),
        }
    }

    /// The commit's ID, verbatim
    #[must_use]
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// The full message as stored by git, trailing newlines included
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Text before the first paragraph separator, or the whole message
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message
            .split_once(PARAGRAPH_SEPARATOR)
            .map_or(self.message.as_str(), |(subject, _)| subject)
    }

    /// Every paragraph after the subject, joined with no separator
    #[must_use]
    pub fn body(&self) -> String {
        self.message.split(PARAGRAPH_SEPARATOR).skip(1).collect()
    }

    /// Human-readable one-record rendering: `hash: <h> subject=<s> body=<b>`
    #[must_use]
    pub fn pretty(&self) -> Pretty<'_> {
        Pretty(self)
    }
}

/// `Display` adapter returned by [`Commit::pretty`]
///
/// Fields are written verbatim with no escaping, so the output is meant for
/// people rather than parsers.
#[derive(Debug, Clone, Copy)]
pub struct Pretty<'a>(&'a Commit);

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hash: {} subject={} body={}",
            self.0.hash(),
            self.0.subject(),
            self.0.body()
        )
    }
}
