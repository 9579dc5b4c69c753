/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - File system access for manifest files
/// - XML parsing of manifest documents
pub mod filesystem;
pub mod xml;

// Re-export commonly used types
pub use filesystem::manifest_store::{ManifestLoader, ManifestStore};
pub use xml::manifest_parser::ManifestParser;
