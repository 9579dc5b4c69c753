//! # manifest-diff - Repo Manifest Revision Diff
//!
//! `manifest-diff` compares two git-repo style XML manifests and reports, for
//! every project, how its target revision changed between them. Projects that
//! were added or removed are reported too.
//!
//! ## Quick Start
//!
//! ```bash
//! manifest-diff old/default.xml new/default.xml
//! ```
//!
//! One line is printed per changed project, sorted by project name:
//!
//! ```text
//! rev1 -> rev1b [A]
//! rev2 -> nil                                      [B]
//! nil                                      -> rev3 [C]
//! ```
//!
//! `nil` marks a project missing from one side. It is padded so the arrows
//! line up with 40-character commit hashes.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! - [`domain`]: Manifest entities, the revision index and the diff itself
//! - [`application`]: The use case tying loading, indexing and diffing together
//! - [`infrastructure`]: File system access and XML parsing
//! - [`presentation`]: CLI interface and report rendering
//! - [`common`]: Shared error handling and logging
//!
//! ## Examples
//!
//! ### Using the Library
//!
//! ```rust,no_run
//! use manifest_diff::application::use_cases::diff_manifests::{
//!     DiffManifestsConfig, DiffManifestsUseCase,
//! };
//! use manifest_diff::presentation::cli::report::{DiffReport, ReportOptions};
//!
//! # fn example() -> manifest_diff::Result<()> {
//! let config = DiffManifestsConfig::new("old.xml", "new.xml");
//! let diff = DiffManifestsUseCase::new(config).execute()?;
//!
//! for line in DiffReport::new(&diff, ReportOptions::default()).lines() {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Working with Parsed Manifests
//!
//! ```rust
//! use manifest_diff::domain::entities::{ManifestDiff, RevisionIndex};
//! use manifest_diff::infrastructure::xml::manifest_parser::ManifestParser;
//!
//! # fn example() -> manifest_diff::Result<()> {
//! let old = ManifestParser::parse_str(r#"<manifest><project name="a" revision="v1"/></manifest>"#)?;
//! let new = ManifestParser::parse_str(r#"<manifest><project name="a" revision="v2"/></manifest>"#)?;
//!
//! let diff = ManifestDiff::compute(
//!     &RevisionIndex::from_projects(&old.projects),
//!     &RevisionIndex::from_projects(&new.projects),
//! );
//! assert_eq!(diff.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::DiffError;
pub use crate::common::result::DiffResult as Result;
