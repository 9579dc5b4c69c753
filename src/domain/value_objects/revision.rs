use std::fmt;

/// Token used when rendering a revision that does not exist on one side of a diff
pub const ABSENT_TOKEN: &str = "nil";

/// One side of a revision change
///
/// `Absent` is its own variant, so no revision string read from a manifest
/// can ever be mistaken for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Revision {
    /// The project declares this revision
    Present(String),
    /// The project is not in this manifest
    Absent,
}

impl Revision {
    /// Create a present revision
    pub fn present(revision: impl Into<String>) -> Self {
        Self::Present(revision.into())
    }

    /// Borrow the revision string, if there is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Revision::Present(revision) => Some(revision),
            Revision::Absent => None,
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Revision::Present(revision) => f.pad(revision),
            Revision::Absent => f.pad(ABSENT_TOKEN),
        }
    }
}
