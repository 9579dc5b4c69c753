/// リモート定義（差分計算では使用しない）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Remote {
    /// フェッチ元のベースURL
    pub fetch: String,

    /// リモート名
    pub name: String,
}

impl Remote {
    /// 新しいRemoteインスタンスを作成
    pub fn new(name: impl Into<String>, fetch: impl Into<String>) -> Self {
        Self {
            fetch: fetch.into(),
            name: name.into(),
        }
    }
}

/// `<default>` 要素の設定（差分計算では使用しない）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestDefault {
    /// デフォルトのリモート名
    pub remote: Option<String>,

    /// デフォルトのリビジョン
    pub revision: Option<String>,

    /// `sync-c` 属性
    pub sync_c: Option<String>,

    /// `sync-tags` 属性
    pub sync_tags: Option<String>,
}

/// `<linkfile>` によるリンク定義
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFile {
    /// リンクの作成先（ワークスペースルートからの相対パス）
    pub dest: String,

    /// リンク元（プロジェクト内の相対パス）
    pub src: String,
}

impl LinkFile {
    /// 新しいLinkFileインスタンスを作成
    pub fn new(dest: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            dest: dest.into(),
            src: src.into(),
        }
    }
}

/// マニフェスト内のプロジェクト定義
///
/// `name` が唯一の識別キー。その他の属性はすべて省略可能。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// プロジェクト名（識別キー）
    pub name: String,

    /// ワークスペース内のパス
    pub path: Option<String>,

    /// チェックアウト対象のリビジョン（ブランチ、タグ、コミット）
    pub revision: Option<String>,

    /// リモート名
    pub remote: Option<String>,

    /// 上流ブランチ
    pub upstream: Option<String>,

    /// カンマ区切りのグループ名
    pub groups: Option<String>,

    /// リンク定義
    pub link_files: Vec<LinkFile>,
}

impl Project {
    /// 新しいProjectインスタンスを作成
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            revision: None,
            remote: None,
            upstream: None,
            groups: None,
            link_files: Vec::new(),
        }
    }

    /// リビジョンを設定
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    /// 宣言されたリビジョンを取得
    ///
    /// 属性が省略されている場合は空文字列を返す。
    pub fn declared_revision(&self) -> &str {
        self.revision.as_deref().unwrap_or_default()
    }

    /// `groups` 属性をグループ名のリストとして取得
    pub fn group_list(&self) -> Vec<&str> {
        self.groups
            .as_deref()
            .map(|groups| {
                groups
                    .split(',')
                    .map(str::trim)
                    .filter(|g| !g.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// マニフェスト文書の構造
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// リモート定義（文書順）
    pub remotes: Vec<Remote>,

    /// デフォルト設定
    pub default: Option<ManifestDefault>,

    /// プロジェクト定義（文書順）
    pub projects: Vec<Project>,
}

impl Manifest {
    /// 空のマニフェストを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// プロジェクトを追加
    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }
}
