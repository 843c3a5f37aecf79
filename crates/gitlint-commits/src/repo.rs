// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Repository collaborators
//!
//! A [`Repo`] hands out a fresh `git2::Repository` each time it is asked.
//! Enumerators hold a `Repo` and only call it when they are invoked, so
//! building one never touches the filesystem.

use std::path::{Path, PathBuf};

use git2::Repository;

use crate::error::CommitsError;

/// Supplier of a repository handle
pub trait Repo {
    /// Open the repository
    ///
    /// # Errors
    ///
    /// Returns `CommitsError` if no repository can be opened.
    fn open(&self) -> Result<Repository, CommitsError>;
}

impl<F> Repo for F
where
    F: Fn() -> Result<Repository, CommitsError>,
{
    fn open(&self) -> Result<Repository, CommitsError> {
        self()
    }
}

/// A repository at an exact path on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filesystem {
    path: PathBuf,
}

impl Filesystem {
    /// Create a collaborator for the repository at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path that will be opened
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Repo for Filesystem {
    fn open(&self) -> Result<Repository, CommitsError> {
        Repository::open(&self.path).map_err(|source| CommitsError::RepositoryNotFound {
            path: self.path.display().to_string(),
            source,
        })
    }
}

/// The repository containing a path, found by walking up the directory tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovered {
    start: PathBuf,
}

impl Discovered {
    /// Create a collaborator that searches upward from `start`
    #[must_use]
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self {
            start: start.into(),
        }
    }
}

impl Repo for Discovered {
    fn open(&self) -> Result<Repository, CommitsError> {
        Repository::discover(&self.start).map_err(|source| CommitsError::RepositoryNotFound {
            path: self.start.display().to_string(),
            source,
        })
    }
}
