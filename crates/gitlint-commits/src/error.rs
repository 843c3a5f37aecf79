// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gitlint-commits

use thiserror::Error;

/// Errors that can occur while enumerating or printing commits
#[derive(Debug, Error)]
pub enum CommitsError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// Repository not found at the specified path
    #[error("Repository not found: {path}")]
    RepositoryNotFound {
        /// The path that was searched for a repository
        path: String,
        /// Underlying libgit2 failure
        #[source]
        source: git2::Error,
    },

    /// The head or start reference could not be resolved to a commit
    #[error("Invalid commit reference: {reference}")]
    InvalidReference {
        /// The reference string that could not be resolved
        reference: String,
        /// Underlying libgit2 failure
        #[source]
        source: git2::Error,
    },

    /// The commit log could not be opened at the resolved commit
    #[error("Cannot open commit log at {from}: {source}")]
    Log {
        /// The commit SHA the log was anchored at
        from: String,
        /// Underlying libgit2 failure
        #[source]
        source: git2::Error,
    },

    /// A single commit could not be delivered by the log (strict mode only)
    #[error("Commit delivery failed: {0}")]
    Delivery(#[source] git2::Error),

    /// Another invocation panicked while holding the output sink
    #[error("Output sink lock poisoned")]
    SinkPoisoned,

    /// The output sink rejected a write
    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),
}
