//! エラー型の定義
//!
//! このモジュールは、emotokライブラリで使用されるすべてのエラー型を定義します。

use std::error::Error;
use std::fmt;

/// emotok専用のResult型
///
/// エラー型としてデフォルトで[`EmotokError`]を使用します。
pub type Result<T, E = EmotokError> = std::result::Result<T, E>;

/// emotokのエラー型
///
/// このライブラリで発生する可能性のあるすべてのエラーを表現します。
/// 各バリアントは特定のエラー条件に対応しています。
#[derive(Debug, thiserror::Error)]
pub enum EmotokError {
    /// 不正なコードポイントエラー
    ///
    /// [`BadCodepointError`]のエラーバリアント。
    #[error(transparent)]
    BadCodepoint(#[from] BadCodepointError),

    /// リファレンス解析エラー
    ///
    /// [`ParserError`]のエラーバリアント。
    #[error(transparent)]
    Parser(#[from] ParserError),

    /// マッチャー構築エラー
    ///
    /// [`PatternBuildError`]のエラーバリアント。
    #[error(transparent)]
    PatternBuild(#[from] PatternBuildError),

    /// UTF-8エンコーディングエラー
    ///
    /// [`std::str::Utf8Error`]のエラーバリアント。
    #[error(transparent)]
    Utf8(#[from] std::str::Utf8Error),

    /// I/Oエラー
    ///
    /// [`std::io::Error`]のエラーバリアント。
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// ダウンロードエラー
    ///
    /// [`DownloadError`]のエラーバリアント。
    /// `fetch`フィーチャーが有効な場合のみ利用可能です。
    #[cfg(feature = "fetch")]
    #[error(transparent)]
    Download(#[from] DownloadError),
}

impl EmotokError {
    /// マッチャー構築エラーを生成します
    ///
    /// # 引数
    ///
    /// * `msg` - エラーメッセージ
    pub(crate) fn pattern_build<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::PatternBuild(PatternBuildError { msg: msg.into() })
    }
}

/// コードポイントフィールドのトークンが16進数として解析できない場合のエラー
///
/// リファレンス文書中の位置情報（行番号、フィールド全文、問題のトークン）を
/// 構造化されたフィールドとして保持します。呼び出し側はメッセージ整形に
/// 頼らずに各フィールドを検査できます。
#[derive(Debug)]
pub struct BadCodepointError {
    /// リファレンス文書中の行番号（1始まり）
    pub(crate) line: usize,

    /// 元のコードポイントフィールド全文
    pub(crate) field: String,

    /// 解析に失敗したトークン
    pub(crate) token: String,

    /// 数値解析失敗の内容
    pub(crate) cause: String,
}

impl BadCodepointError {
    pub(crate) fn new<S, T, C>(line: usize, field: S, token: T, cause: C) -> Self
    where
        S: Into<String>,
        T: Into<String>,
        C: Into<String>,
    {
        Self {
            line,
            field: field.into(),
            token: token.into(),
            cause: cause.into(),
        }
    }

    /// 行番号（1始まり）を返します
    #[inline(always)]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 元のフィールド全文を返します
    #[inline(always)]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// 解析に失敗したトークンを返します
    #[inline(always)]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for BadCodepointError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "BadCodepointError: bad raw codepoints, line:{} -> ({}): parsing \"{}\": {}",
            self.line, self.field, self.token, self.cause
        )
    }
}

impl Error for BadCodepointError {}

/// リファレンス文書の解析が失敗した場合のエラー
///
/// 原因となった[`BadCodepointError`]を文書レベルの文脈とともに保持します。
#[derive(Debug)]
pub struct ParserError {
    /// 根本原因のコードポイントエラー
    pub(crate) cause: BadCodepointError,
}

impl ParserError {
    /// 行番号（1始まり）を返します
    #[inline(always)]
    pub fn line(&self) -> usize {
        self.cause.line()
    }

    /// 元のフィールド全文を返します
    #[inline(always)]
    pub fn field(&self) -> &str {
        self.cause.field()
    }

    /// 根本原因のコードポイントエラーへの参照を返します
    #[inline(always)]
    pub fn cause(&self) -> &BadCodepointError {
        &self.cause
    }
}

impl From<BadCodepointError> for ParserError {
    fn from(cause: BadCodepointError) -> Self {
        Self { cause }
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParserError: failed to parse reference, {}", self.cause)
    }
}

impl Error for ParserError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}

/// マッチャーの構築が失敗した場合のエラー
///
/// 絵文字集合が空の場合、またはトライの構築が失敗した場合に発生します。
#[derive(Debug)]
pub struct PatternBuildError {
    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for PatternBuildError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PatternBuildError: {}", self.msg)
    }
}

impl Error for PatternBuildError {}

/// ダウンロード関連のエラー
///
/// `fetch`フィーチャーが有効な場合のみ利用可能です。
/// リファレンス文書のダウンロード中に発生する可能性のあるエラーを表現します。
#[cfg(feature = "fetch")]
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// ネットワークリクエストの失敗
    #[error("Network request failed")]
    Request(#[from] reqwest::Error),

    /// I/Oエラー
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTPステータスエラー
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// パスの永続化エラー
    #[error(transparent)]
    PathPersist(#[from] tempfile::PersistError),
}
