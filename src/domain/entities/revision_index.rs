use std::collections::{HashMap, HashSet};

use super::manifest::Project;

/// プロジェクト名からリビジョンへの対応表
///
/// 同名のプロジェクトが複数ある場合は後に宣言されたものが優先される。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevisionIndex {
    revisions: HashMap<String, String>,
    duplicates: Vec<String>,
}

impl RevisionIndex {
    /// プロジェクト一覧から対応表を構築
    pub fn from_projects(projects: &[Project]) -> Self {
        let mut revisions = HashMap::with_capacity(projects.len());
        let mut duplicates = Vec::new();
        let mut reported = HashSet::new();

        for project in projects {
            let previous = revisions.insert(
                project.name.clone(),
                project.declared_revision().to_string(),
            );
            if previous.is_some() && reported.insert(project.name.as_str()) {
                duplicates.push(project.name.clone());
            }
        }

        Self {
            revisions,
            duplicates,
        }
    }

    /// プロジェクトのリビジョンを取得
    pub fn get(&self, name: &str) -> Option<&str> {
        self.revisions.get(name).map(String::as_str)
    }

    /// プロジェクトが含まれるか
    pub fn contains(&self, name: &str) -> bool {
        self.revisions.contains_key(name)
    }

    /// (名前, リビジョン) の組を順不同で走査
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.revisions
            .iter()
            .map(|(name, revision)| (name.as_str(), revision.as_str()))
    }

    /// 複数回宣言されたプロジェクト名（最初に重複を検出した順）
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.revisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_index_maps_name_to_revision() {
        let projects = vec![
            Project::new("kernel").with_revision("v6.1"),
            Project::new("bionic").with_revision("main"),
        ];

        let index = RevisionIndex::from_projects(&projects);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("kernel"), Some("v6.1"));
        assert_eq!(index.get("bionic"), Some("main"));
        assert!(index.duplicates().is_empty());
    }

    #[test]
    fn test_last_declaration_wins() {
        let projects = vec![
            Project::new("kernel").with_revision("first"),
            Project::new("bionic").with_revision("main"),
            Project::new("kernel").with_revision("second"),
            Project::new("kernel").with_revision("third"),
        ];

        let index = RevisionIndex::from_projects(&projects);

        assert_eq!(index.get("kernel"), Some("third"));
        assert_eq!(index.duplicates(), &["kernel".to_string()]);
    }

    #[test]
    fn test_missing_revision_indexes_as_empty() {
        let index = RevisionIndex::from_projects(&[Project::new("tools")]);
        assert_eq!(index.get("tools"), Some(""));
        assert!(index.contains("tools"));
        assert!(!index.contains("other"));
    }

    #[test]
    fn test_empty_project_list() {
        let index = RevisionIndex::from_projects(&[]);
        assert!(index.is_empty());
        assert_eq!(index.iter().count(), 0);
    }
}
