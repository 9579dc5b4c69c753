use crate::common::error::DiffError;

/// manifest-diff全体で使用するResult型のエイリアス
///
/// # Examples
///
/// ```
/// use manifest_diff::common::result::DiffResult;
/// use manifest_diff::common::error::DiffError;
///
/// fn example_function() -> DiffResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> DiffResult<()> {
///     Err(DiffError::internal_error("Something went wrong"))
/// }
/// ```
pub type DiffResult<T> = Result<T, DiffError>;

/// Optionのエラー変換ヘルパー
pub trait OptionExt<T> {
    /// OptionをParseErrorに変換する
    ///
    /// # Arguments
    ///
    /// * `message` - Noneの場合に使用するエラーメッセージ
    /// * `position` - 解析位置（バイトオフセット）
    ///
    /// # Examples
    ///
    /// ```
    /// use manifest_diff::common::result::{DiffResult, OptionExt};
    ///
    /// let none_value: Option<String> = None;
    /// let result: DiffResult<String> = none_value.ok_or_parse_error("name is required", Some(10));
    /// assert!(result.is_err());
    /// ```
    fn ok_or_parse_error(self, message: impl Into<String>, position: Option<u64>)
        -> DiffResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_parse_error(
        self,
        message: impl Into<String>,
        position: Option<u64>,
    ) -> DiffResult<T> {
        self.ok_or_else(|| DiffError::parse_error(message, position))
    }
}

/// Resultのエラー変換ヘルパー
pub trait ResultExt<T, E> {
    /// InternalErrorとしてDiffResultに変換
    ///
    /// # Examples
    ///
    /// ```
    /// use manifest_diff::common::result::{DiffResult, ResultExt};
    ///
    /// let result: Result<(), std::io::Error> = Err(std::io::Error::new(
    ///     std::io::ErrorKind::BrokenPipe, "closed"
    /// ));
    /// let diff_result: DiffResult<()> = result.with_internal_error("Failed to write report");
    /// assert!(diff_result.is_err());
    /// ```
    fn with_internal_error(self, message: impl Into<String>) -> DiffResult<T>
    where
        E: std::error::Error + Send + Sync + 'static;

    /// ファイルシステムエラーとしてDiffResultに変換
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> DiffResult<T>
    where
        E: Into<std::io::Error>;

    /// ParseErrorとしてDiffResultに変換（元のエラーを保持）
    fn with_parse_error(self, message: impl Into<String>, position: Option<u64>) -> DiffResult<T>
    where
        E: std::error::Error + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn with_internal_error(self, message: impl Into<String>) -> DiffResult<T>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.map_err(|e| DiffError::internal_error_with_source(message, e))
    }

    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> DiffResult<T>
    where
        E: Into<std::io::Error>,
    {
        self.map_err(|e| {
            let io_error = e.into();
            DiffError::filesystem_error_with_source(message, path, io_error)
        })
    }

    fn with_parse_error(self, message: impl Into<String>, position: Option<u64>) -> DiffResult<T>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.map_err(|e| DiffError::parse_error_with_source(message, position, e))
    }
}
