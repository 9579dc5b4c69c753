//! Test fixtures for creating manifest files

use std::path::PathBuf;
use tempfile::TempDir;

/// Builder for git-repo style XML manifests
#[derive(Default)]
pub struct ManifestFixture {
    projects: Vec<String>,
}

impl ManifestFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a project pinned to `revision`
    pub fn project(mut self, name: &str, revision: &str) -> Self {
        self.projects.push(format!(
            r#"  <project name="{name}" path="{name}" revision="{revision}" remote="origin" groups="default" />"#
        ));
        self
    }

    /// Add a project carrying link-file children
    pub fn project_with_linkfiles(mut self, name: &str, revision: &str) -> Self {
        self.projects.push(format!(
            r#"  <project name="{name}" path="{name}" revision="{revision}" upstream="main">
    <linkfile dest="{name}.sh" src="tools/{name}.sh" />
  </project>"#
        ));
        self
    }

    /// Render the full manifest document
    pub fn to_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest>
  <remote fetch="https://example.com/git" name="origin" />
  <default remote="origin" revision="main" sync-c="true" sync-tags="false" />
{}
</manifest>
"#,
            self.projects.join("\n")
        )
    }

    /// Write the manifest into `dir` as `file_name`
    pub fn write(&self, dir: &TempDir, file_name: &str) -> PathBuf {
        let path = dir.path().join(file_name);
        std::fs::write(&path, self.to_xml()).expect("Failed to write manifest fixture");
        path
    }
}

/// Absent marker as it appears in the report with default padding
pub fn nil() -> String {
    format!("nil{}", " ".repeat(37))
}
