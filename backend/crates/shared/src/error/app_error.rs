//! Application Error - Unified error type at the outer boundary
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use super::kind::ErrorKind;
use crate::validation::Error;

/// アプリケーション統一エラー型
///
/// ユースケースの失敗を外側のアダプタへ渡すための標準エラー型です。
/// ビルダーパターンで構築します。
///
/// ## Fields
/// * `kind` - エラーの分類（ステータスコードにマッピング）
/// * `message` - ユーザー向けのエラーメッセージ
/// * `errors` - 検証エラーの一覧（追加順、バッチ失敗時のみ）
/// * `action` - ユーザーが取るべきアクション（オプション）
/// * `source` - 元のエラー（オプション、デバッグ用）
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
/// use kernel::validation::Error;
///
/// let err = AppError::unprocessable("Could not create Aggregate Category")
///     .with_errors(vec![Error::new("'name' should not be empty")]);
/// assert_eq!(err.kind(), ErrorKind::UnprocessableEntity);
/// assert_eq!(err.errors().len(), 1);
/// ```
pub struct AppError {
    /// エラー種別
    kind: ErrorKind,
    /// ユーザー向けメッセージ
    message: Cow<'static, str>,
    /// 検証エラー一覧
    errors: Vec<Error>,
    /// ユーザーが取るべきアクション
    action: Option<Cow<'static, str>>,
    /// 元のエラー（デバッグ用）
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

/// アプリケーション結果型エイリアス
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// 新しいエラーを作成
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            errors: Vec::new(),
            action: None,
            source: None,
        }
    }

    // ========================================================================
    // Convenience constructors
    // ========================================================================

    /// 400 Bad Request エラー
    #[inline]
    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    /// 404 Not Found エラー
    #[inline]
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// 422 Unprocessable Entity エラー
    #[inline]
    pub fn unprocessable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::UnprocessableEntity, message)
    }

    /// 500 Internal Server Error
    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// 503 Service Unavailable エラー
    #[inline]
    pub fn service_unavailable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::ServiceUnavailable, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// 検証エラー一覧を設定
    ///
    /// 順序はそのまま保持されます。
    #[inline]
    pub fn with_errors(mut self, errors: Vec<Error>) -> Self {
        self.errors = errors;
        self
    }

    /// ユーザー向けアクションを設定
    #[inline]
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// 元のエラーを設定（デバッグ用）
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::app_error::{AppError, AppResult};
    ///
    /// fn per_page(raw: &str) -> AppResult<u32> {
    ///     raw.parse()
    ///         .map_err(|e| AppError::bad_request("Invalid page size").with_source(e))
    /// }
    /// assert!(per_page("ten").is_err());
    /// ```
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// エラー種別を取得
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// ステータスコードを取得
    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// メッセージを取得
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 検証エラー一覧を取得（なければ空）
    #[inline]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// アクションを取得
    #[inline]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// サーバーエラーかどうか
    #[inline]
    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if !self.errors.is_empty() {
            builder.field("errors", &self.errors);
        }
        if let Some(action) = &self.action {
            builder.field("action", action);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if !self.errors.is_empty() {
            let messages: Vec<&str> = self.errors.iter().map(Error::message).collect();
            write!(f, ": {}", messages.join("; "))?;
        }
        if let Some(action) = &self.action {
            write!(f, " (Action: {})", action)?;
        }
        Ok(())
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::NotFound, "Category with ID 1 was not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "Category with ID 1 was not found");
        assert!(err.errors().is_empty());
        assert!(err.action().is_none());
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(AppError::bad_request("test").status_code(), 400);
        assert_eq!(AppError::not_found("test").status_code(), 404);
        assert_eq!(AppError::unprocessable("test").status_code(), 422);
        assert_eq!(AppError::internal("test").status_code(), 500);
        assert_eq!(AppError::service_unavailable("test").status_code(), 503);
    }

    #[test]
    fn test_with_errors_keeps_order() {
        let err = AppError::unprocessable("Could not create Aggregate Video").with_errors(vec![
            Error::new("'title' should not be empty"),
            Error::new("'rating' should not be null"),
        ]);
        let messages: Vec<&str> = err.errors().iter().map(Error::message).collect();
        assert_eq!(
            messages,
            vec!["'title' should not be empty", "'rating' should not be null"]
        );
    }

    #[test]
    fn test_with_source() {
        let parse_err = "abc".parse::<u32>().unwrap_err();
        let err = AppError::bad_request("Invalid page").with_source(parse_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display() {
        let err = AppError::not_found("Genre with ID x was not found");
        assert_eq!(err.to_string(), "[Not Found] Genre with ID x was not found");

        let err = AppError::unprocessable("Could not create Aggregate Category")
            .with_errors(vec![Error::new("'name' should not be empty")]);
        assert_eq!(
            err.to_string(),
            "[Unprocessable Entity] Could not create Aggregate Category: 'name' should not be empty"
        );

        let err = AppError::bad_request("Invalid sort").with_action("Use name or createdAt");
        assert!(err.to_string().contains("Action:"));
    }
}
