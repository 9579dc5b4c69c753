use std::collections::HashMap;

use super::revision_index::RevisionIndex;
use crate::domain::value_objects::revision::Revision;

/// 差分の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// 新しいマニフェストにのみ存在
    Added,
    /// 古いマニフェストにのみ存在
    Removed,
    /// 両方に存在し、リビジョンが異なる
    Changed,
}

/// 1プロジェクト分の差分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    /// 古いマニフェストでのリビジョン
    pub old: Revision,

    /// 新しいマニフェストでのリビジョン
    pub new: Revision,
}

impl DiffEntry {
    pub fn new(old: Revision, new: Revision) -> Self {
        Self { old, new }
    }

    /// 差分の種類を判定
    pub fn kind(&self) -> ChangeKind {
        match (&self.old, &self.new) {
            (Revision::Absent, _) => ChangeKind::Added,
            (_, Revision::Absent) => ChangeKind::Removed,
            _ => ChangeKind::Changed,
        }
    }
}

/// 差分の件数集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
}

impl DiffSummary {
    pub fn total(&self) -> usize {
        self.added + self.removed + self.changed
    }
}

/// 2つのマニフェスト間の差分
///
/// プロジェクト名をキーとする。順序は保証しない（並び替えは出力側で行う）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestDiff {
    entries: HashMap<String, DiffEntry>,
}

impl ManifestDiff {
    /// 2つの対応表の差分を計算
    ///
    /// - 両方に存在しリビジョンが異なる: `(old, new)`
    /// - 古い側にのみ存在: `(old, Absent)`
    /// - 新しい側にのみ存在: `(Absent, new)`
    ///
    /// リビジョンが同一のプロジェクトは含まれない。
    pub fn compute(old: &RevisionIndex, new: &RevisionIndex) -> Self {
        let mut entries = HashMap::new();

        for (name, old_revision) in old.iter() {
            match new.get(name) {
                Some(new_revision) if new_revision == old_revision => {}
                new_revision => {
                    entries.insert(
                        name.to_string(),
                        DiffEntry::new(
                            Revision::present(old_revision),
                            new_revision.map_or(Revision::Absent, Revision::present),
                        ),
                    );
                }
            }
        }

        for (name, new_revision) in new.iter() {
            if !old.contains(name) {
                entries.insert(
                    name.to_string(),
                    DiffEntry::new(Revision::Absent, Revision::present(new_revision)),
                );
            }
        }

        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&DiffEntry> {
        self.entries.get(name)
    }

    /// (名前, 差分) の組を順不同で走査
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DiffEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 種類ごとの件数を集計
    pub fn summary(&self) -> DiffSummary {
        self.entries
            .values()
            .fold(DiffSummary::default(), |mut summary, entry| {
                match entry.kind() {
                    ChangeKind::Added => summary.added += 1,
                    ChangeKind::Removed => summary.removed += 1,
                    ChangeKind::Changed => summary.changed += 1,
                }
                summary
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::manifest::Project;
    use pretty_assertions::assert_eq;

    fn index(projects: &[(&str, &str)]) -> RevisionIndex {
        let projects: Vec<Project> = projects
            .iter()
            .map(|(name, revision)| Project::new(*name).with_revision(*revision))
            .collect();
        RevisionIndex::from_projects(&projects)
    }

    #[test]
    fn test_identical_indexes_produce_empty_diff() {
        let old = index(&[("a", "rev1"), ("b", "rev2")]);
        let new = index(&[("b", "rev2"), ("a", "rev1")]);

        let diff = ManifestDiff::compute(&old, &new);

        assert!(diff.is_empty());
        assert_eq!(diff.summary().total(), 0);
    }

    #[test]
    fn test_changed_added_and_removed() {
        let old = index(&[("A", "rev1"), ("B", "rev2"), ("D", "same")]);
        let new = index(&[("A", "rev1b"), ("C", "rev3"), ("D", "same")]);

        let diff = ManifestDiff::compute(&old, &new);

        assert_eq!(diff.len(), 3);
        assert_eq!(
            diff.get("A"),
            Some(&DiffEntry::new(
                Revision::present("rev1"),
                Revision::present("rev1b")
            ))
        );
        assert_eq!(
            diff.get("B"),
            Some(&DiffEntry::new(Revision::present("rev2"), Revision::Absent))
        );
        assert_eq!(
            diff.get("C"),
            Some(&DiffEntry::new(Revision::Absent, Revision::present("rev3")))
        );
        assert!(diff.get("D").is_none());
    }

    #[test]
    fn test_entry_kind_and_summary() {
        let old = index(&[("keep", "1"), ("drop", "1"), ("bump", "1")]);
        let new = index(&[("keep", "1"), ("bump", "2"), ("add", "1"), ("add2", "1")]);

        let diff = ManifestDiff::compute(&old, &new);

        assert_eq!(diff.get("drop").map(DiffEntry::kind), Some(ChangeKind::Removed));
        assert_eq!(diff.get("bump").map(DiffEntry::kind), Some(ChangeKind::Changed));
        assert_eq!(diff.get("add").map(DiffEntry::kind), Some(ChangeKind::Added));
        assert_eq!(
            diff.summary(),
            DiffSummary {
                added: 2,
                removed: 1,
                changed: 1,
            }
        );
    }

    #[test]
    fn test_empty_revision_differs_from_declared_revision() {
        let old = index(&[("tools", "")]);
        let new = index(&[("tools", "main")]);

        let diff = ManifestDiff::compute(&old, &new);

        assert_eq!(
            diff.get("tools"),
            Some(&DiffEntry::new(
                Revision::present(""),
                Revision::present("main")
            ))
        );
    }

    #[test]
    fn test_one_side_empty() {
        let old = index(&[]);
        let new = index(&[("x", "1"), ("y", "2")]);

        let diff = ManifestDiff::compute(&old, &new);
        assert_eq!(diff.summary().added, 2);

        let reversed = ManifestDiff::compute(&new, &old);
        assert_eq!(reversed.summary().removed, 2);
    }
}
