// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit enumeration
//!
//! This module defines the [`Commits`] enumerator trait and [`InRepo`], the
//! enumerator that walks a repository's log using the `git2` crate.

use std::io::Write;

use git2::{Oid, Repository, Revwalk, Sort};
use tracing::{debug, warn};

use crate::commit::Commit;
use crate::error::CommitsError;
use crate::printed::Printed;
use crate::repo::Repo;

/// A deferred producer of commits
///
/// Every call to [`Commits::commits`] materializes the full sequence afresh;
/// nothing is cached between calls. Closures returning
/// `Result<Vec<Commit>, CommitsError>` are enumerators too.
pub trait Commits {
    /// Produce the ordered sequence of commits
    ///
    /// # Errors
    ///
    /// Returns `CommitsError` if the sequence cannot be produced. A failure is
    /// never reported as an empty sequence.
    fn commits(&self) -> Result<Vec<Commit>, CommitsError>;

    /// Wrap this enumerator so each invocation also prints every commit
    /// to `writer`, each rendering followed by `separator`
    fn printed<W: Write>(self, writer: W, separator: impl Into<String>) -> Printed<Self, W>
    where
        Self: Sized,
    {
        Printed::new(self, writer, separator)
    }
}

impl<F> Commits for F
where
    F: Fn() -> Result<Vec<Commit>, CommitsError>,
{
    fn commits(&self) -> Result<Vec<Commit>, CommitsError> {
        self()
    }
}

/// Configuration for walking a repository's log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Start from this reference (defaults to HEAD)
    pub from_ref: Option<String>,
    /// Fail on the first commit the log cannot deliver instead of stopping quietly
    pub strict: bool,
}

impl LogOptions {
    /// Set the starting reference (branch, tag, or SHA)
    #[must_use]
    pub fn from_ref(mut self, reference: &str) -> Self {
        self.from_ref = Some(reference.to_string());
        self
    }

    /// Surface per-commit delivery errors as [`CommitsError::Delivery`]
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    fn reference(&self) -> &str {
        self.from_ref.as_deref().unwrap_or("HEAD")
    }
}

/// The commits reachable from a repository's head
///
/// Construction stores the collaborator only; the repository is opened and
/// walked each time [`Commits::commits`] is called. The order is whatever the
/// log yields in git's default walk order, newest first from the start commit.
///
/// If the log fails to deliver a commit part-way through, the walk stops and
/// the commits gathered so far are returned, unless [`LogOptions::strict`] is
/// set.
#[derive(Debug, Clone)]
pub struct InRepo<R> {
    repo: R,
    options: LogOptions,
}

impl<R: Repo> InRepo<R> {
    /// Enumerate commits from the head of `repo`
    #[must_use]
    pub fn new(repo: R) -> Self {
        Self::with_options(repo, LogOptions::default())
    }

    /// Enumerate commits with explicit options
    #[must_use]
    pub fn with_options(repo: R, options: LogOptions) -> Self {
        Self { repo, options }
    }

    /// The options this enumerator walks with
    #[must_use]
    pub fn options(&self) -> &LogOptions {
        &self.options
    }

    fn resolve(&self, repo: &Repository) -> Result<Oid, CommitsError> {
        let reference = self.options.reference();
        repo.revparse_single(reference)
            .and_then(|object| object.peel_to_commit())
            .map(|commit| commit.id())
            .map_err(|source| CommitsError::InvalidReference {
                reference: reference.to_string(),
                source,
            })
    }
}

fn open_log(repo: &Repository, start: Oid) -> Result<Revwalk<'_>, CommitsError> {
    let log_error = |source| CommitsError::Log {
        from: start.to_string(),
        source,
    };
    let mut revwalk = repo.revwalk().map_err(log_error)?;
    // Unsorted walks deliver commits as they are read; sorted ones read the
    // whole history before yielding anything.
    revwalk.set_sorting(Sort::NONE).map_err(log_error)?;
    revwalk.push(start).map_err(log_error)?;
    Ok(revwalk)
}

impl<R: Repo> Commits for InRepo<R> {
    fn commits(&self) -> Result<Vec<Commit>, CommitsError> {
        let repo = self.repo.open()?;
        let start = self.resolve(&repo)?;
        debug!(reference = self.options.reference(), %start, "Walking commits");

        let mut commits = Vec::new();
        for oid_result in open_log(&repo, start)? {
            let git_commit = match oid_result.and_then(|oid| repo.find_commit(oid)) {
                Ok(git_commit) => git_commit,
                Err(e) if self.options.strict => return Err(CommitsError::Delivery(e)),
                Err(e) => {
                    warn!(error = %e, delivered = commits.len(), "Commit delivery failed, stopping walk");
                    break;
                }
            };

            commits.push(Commit::new(
                git_commit.id().to_string(),
                String::from_utf8_lossy(git_commit.message_bytes()),
            ));
        }

        debug!(count = commits.len(), "Walked commits");
        Ok(commits)
    }
}
