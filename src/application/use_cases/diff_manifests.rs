use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::common::result::DiffResult;
use crate::domain::entities::{manifest_diff::ManifestDiff, revision_index::RevisionIndex};
use crate::infrastructure::filesystem::manifest_store::{ManifestLoader, ManifestStore};

/// マニフェスト差分の設定
#[derive(Debug, Clone)]
pub struct DiffManifestsConfig {
    /// 比較元（古い）マニフェストのパス
    pub old_manifest: PathBuf,

    /// 比較先（新しい）マニフェストのパス
    pub new_manifest: PathBuf,

    /// 同名プロジェクトの重複を警告するか（結果には影響しない）
    pub warn_on_duplicates: bool,
}

impl DiffManifestsConfig {
    /// 新しい設定を作成
    pub fn new(old_manifest: impl Into<PathBuf>, new_manifest: impl Into<PathBuf>) -> Self {
        Self {
            old_manifest: old_manifest.into(),
            new_manifest: new_manifest.into(),
            warn_on_duplicates: true,
        }
    }

    /// 重複警告の有無を設定
    pub fn with_warn_on_duplicates(mut self, warn_on_duplicates: bool) -> Self {
        self.warn_on_duplicates = warn_on_duplicates;
        self
    }
}

/// 2つのマニフェストを読み込み、リビジョンの差分を計算するユースケース
pub struct DiffManifestsUseCase<L = ManifestStore> {
    config: DiffManifestsConfig,
    loader: L,
}

impl DiffManifestsUseCase<ManifestStore> {
    /// ファイルシステムから読み込むユースケースを作成
    pub fn new(config: DiffManifestsConfig) -> Self {
        Self::with_loader(config, ManifestStore::new())
    }
}

impl<L: ManifestLoader> DiffManifestsUseCase<L> {
    /// 任意のローダーでユースケースを作成
    pub fn with_loader(config: DiffManifestsConfig, loader: L) -> Self {
        Self { config, loader }
    }

    /// 差分を計算
    ///
    /// どちらかのマニフェストの読み込みに失敗した場合は即座にエラーを返す。
    pub fn execute(&self) -> DiffResult<ManifestDiff> {
        let old_index = self.load_index(&self.config.old_manifest)?;
        let new_index = self.load_index(&self.config.new_manifest)?;

        let diff = ManifestDiff::compute(&old_index, &new_index);
        let summary = diff.summary();
        info!(
            added = summary.added,
            removed = summary.removed,
            changed = summary.changed,
            total = summary.total(),
            "computed manifest diff"
        );

        Ok(diff)
    }

    fn load_index(&self, path: &Path) -> DiffResult<RevisionIndex> {
        let manifest = self.loader.load(path)?;
        let index = RevisionIndex::from_projects(&manifest.projects);
        debug!(path = %path.display(), projects = index.len(), "indexed manifest");

        if self.config.warn_on_duplicates {
            for name in index.duplicates() {
                warn!(
                    path = %path.display(),
                    project = %name,
                    "project declared more than once; the last declaration wins"
                );
            }
        }

        Ok(index)
    }
}
