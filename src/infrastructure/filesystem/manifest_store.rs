use std::path::Path;

use tracing::debug;

use crate::common::error::DiffError;
use crate::common::result::{DiffResult, ResultExt};
use crate::domain::entities::manifest::Manifest;
use crate::infrastructure::xml::manifest_parser::ManifestParser;

/// Source of parsed manifests
///
/// The diff use case only needs a way to turn a path into a [`Manifest`];
/// tests substitute an in-memory implementation.
pub trait ManifestLoader {
    /// Read and parse the manifest at `path`
    fn load(&self, path: &Path) -> DiffResult<Manifest>;
}

/// Manifest store backed by the local file system
#[derive(Debug, Clone, Default)]
pub struct ManifestStore;

impl ManifestStore {
    /// Create a new manifest store
    pub fn new() -> Self {
        Self
    }

    /// Read a manifest file fully into memory
    pub fn read_manifest_content(&self, path: &Path) -> DiffResult<String> {
        if !path.exists() {
            return Err(DiffError::filesystem_error(
                format!("Manifest file not found: {}", path.display()),
                Some(path.to_path_buf()),
            ));
        }

        let bytes = std::fs::read(path).with_filesystem_error(
            format!("Failed to read manifest file: {}", path.display()),
            Some(path.to_path_buf()),
        )?;

        // Undecodable content is a malformed document, not an I/O failure
        String::from_utf8(bytes).map_err(|e| {
            let position = e.utf8_error().valid_up_to() as u64;
            DiffError::parse_error_with_source("Invalid UTF-8", Some(position), e).in_file(path)
        })
    }
}

impl ManifestLoader for ManifestStore {
    fn load(&self, path: &Path) -> DiffResult<Manifest> {
        let content = self.read_manifest_content(path)?;
        debug!(path = %path.display(), bytes = content.len(), "read manifest");

        let manifest = ManifestParser::parse_str(&content).map_err(|e| e.in_file(path))?;
        debug!(
            path = %path.display(),
            projects = manifest.projects.len(),
            "parsed manifest"
        );

        Ok(manifest)
    }
}
