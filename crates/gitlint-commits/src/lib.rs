// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gitlint-commits: Commit enumeration for gitlint
//!
//! This library crate walks a repository's log and exposes each commit's
//! hash, subject and body for lint rules and reports. Enumerators are
//! deferred: the repository is only opened when [`Commits::commits`] is
//! called, and decorators such as [`Printed`] wrap them without changing
//! their output.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use gitlint_commits::{Commits, Filesystem, InRepo};
//!
//! let commits = InRepo::new(Filesystem::new("."))
//!     .printed(std::io::stdout(), "\n")
//!     .commits()
//!     .expect("walk commits");
//!
//! for c in &commits {
//!     assert!(!c.subject().contains("\n\n"));
//! }
//! ```

pub mod commit;
pub mod error;
pub mod log;
pub mod printed;
pub mod repo;

pub use commit::{Commit, PARAGRAPH_SEPARATOR, Pretty};
pub use error::CommitsError;
pub use log::{Commits, InRepo, LogOptions};
pub use printed::Printed;
pub use repo::{Discovered, Filesystem, Repo};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::Commit;
    pub use crate::error::CommitsError;
    pub use crate::log::{Commits, InRepo, LogOptions};
    pub use crate::printed::Printed;
    pub use crate::repo::{Filesystem, Repo};
}
