//! Validation Core
//!
//! 集約の検証結果を集めるための最小の契約。
//!
//! ## 設計方針
//! - 検証エラーは例外で中断せず [`Notification`] に蓄積する
//! - 1つの検証ステップは明示的な `Result` を返す
//!   - [`StepError::Invalid`] - 想定内の検証失敗（蓄積される）
//!   - [`StepError::Fault`] - 想定外の失敗（蓄積せず、そのまま呼び出し元へ伝播）
//! - 蓄積戦略は [`ValidationHandler`] トレイトで差し替え可能
//!   - [`Notification`] - 全件蓄積
//!   - [`FailFast`] - 最初の1件のみ保持し、以降のステップは実行しない
//!
//! ## 不変条件
//! - 一度エラーが追加されたら `has_error()` は常に `true`
//! - 検証中にエラーが削除されることはない
//! - エラーの順序は追加順
//!
//! ## Examples
//! ```rust
//! use kernel::validation::{DomainError, Error, Notification, StepError, ValidationHandler};
//! use std::convert::Infallible;
//!
//! let mut notification = Notification::create();
//! notification.append(Error::new("'name' should not be empty"));
//!
//! let year: Option<u16> = notification
//!     .validate(|| -> Result<u16, StepError<Infallible>> {
//!         Err(DomainError::with(Error::new("'launchedAt' should not be null")).into())
//!     })
//!     .unwrap();
//!
//! assert!(year.is_none());
//! assert_eq!(notification.errors().len(), 2);
//! ```

mod error;
mod fail_fast;
mod handler;
mod notification;

pub use error::{DomainError, Error, StepError};
pub use fail_fast::FailFast;
pub use handler::ValidationHandler;
pub use notification::Notification;
