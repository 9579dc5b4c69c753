pub mod manifest;
pub mod manifest_diff;
pub mod revision_index;

pub use manifest::{LinkFile, Manifest, ManifestDefault, Project, Remote};
pub use manifest_diff::{ChangeKind, DiffEntry, DiffSummary, ManifestDiff};
pub use revision_index::RevisionIndex;
