//! リファレンス文書のダウンロード機能
//!
//! このモジュールは、Unicodeの公開サーバーから`emoji-test.txt`を
//! ダウンロードし、解析結果をコードポイントキャッシュとしてディスクに
//! 永続化する機能を提供します。キャッシュファイルが既に存在する場合は
//! ダウンロードを行わず、キャッシュから直接読み込みます。

#![cfg(feature = "fetch")]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::errors::{DownloadError, Result};
use crate::reference::ReferenceDocument;

/// 既定のリファレンスバージョン
///
/// Unicodeの公開サーバーが提供する最新版を指します。
pub const DEFAULT_REFERENCE_VERSION: &str = "latest";

/// キャッシュディレクトリ内のコードポイントファイル名
pub const CODEPOINTS_FILE_NAME: &str = "codepoints.txt";

const REFERENCE_URL_BASE: &str = "https://unicode.org/Public/emoji";

/// 指定されたバージョンのリファレンス文書のURLを返します。
fn reference_url(version: &str) -> String {
    format!("{REFERENCE_URL_BASE}/{version}/emoji-test.txt")
}

/// リファレンス文書をダウンロードして生のテキストを返します。
///
/// # 引数
///
/// * `version` - リファレンスのバージョン（例: `"15.1"`、`"latest"`）
///
/// # エラー
///
/// ネットワークリクエストが失敗した場合、またはHTTPステータスが成功で
/// なかった場合にエラーを返します。
pub(crate) fn download_reference(version: &str) -> Result<String, DownloadError> {
    let response = reqwest::blocking::get(reference_url(version))?;
    if !response.status().is_success() {
        return Err(DownloadError::HttpStatus(response.status()));
    }
    Ok(response.text()?)
}

/// キャッシュを利用してリファレンス文書を取得します。
///
/// `cache_dir`内のコードポイントファイルが存在すればそれを読み込み、
/// 16進数の再解析を行わずに[`ReferenceDocument`]を復元します。存在しない
/// 場合はリファレンス文書をダウンロードして解析し、正規の永続化形式を
/// 一時ファイル経由でアトミックに書き出したうえで結果を返します。
///
/// # 引数
///
/// * `version` - リファレンスのバージョン
/// * `cache_dir` - キャッシュディレクトリ
///
/// # 戻り値
///
/// 成功時は解析済みの[`ReferenceDocument`]を返します。
///
/// # エラー
///
/// ダウンロード、解析、またはキャッシュの書き出しに失敗した場合に
/// エラーを返します。
pub fn fetch_reference_document<P: AsRef<Path>>(
    version: &str,
    cache_dir: P,
) -> Result<ReferenceDocument> {
    let cache_dir = cache_dir.as_ref();
    let cache_path = codepoints_file_path(cache_dir);

    if cache_path.exists() {
        let text = fs::read_to_string(&cache_path)?;
        return Ok(ReferenceDocument::from_codepoints_text(&text));
    }

    fs::create_dir_all(cache_dir)?;

    let raw = download_reference(version)?;
    let doc = ReferenceDocument::from_reference_bytes(raw.as_bytes())?;

    let mut temp_file = NamedTempFile::new_in(cache_dir).map_err(DownloadError::Io)?;
    temp_file
        .write_all(doc.to_codepoints_text().as_bytes())
        .map_err(DownloadError::Io)?;
    temp_file
        .persist(&cache_path)
        .map_err(DownloadError::PathPersist)?;

    Ok(doc)
}

/// キャッシュディレクトリ内のコードポイントファイルのパスを返します。
#[inline(always)]
pub fn codepoints_file_path<P: AsRef<Path>>(cache_dir: P) -> PathBuf {
    cache_dir.as_ref().join(CODEPOINTS_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_url() {
        assert_eq!(
            "https://unicode.org/Public/emoji/latest/emoji-test.txt",
            reference_url(DEFAULT_REFERENCE_VERSION)
        );
        assert_eq!(
            "https://unicode.org/Public/emoji/15.1/emoji-test.txt",
            reference_url("15.1")
        );
    }

    #[test]
    fn test_existing_cache_skips_download() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(codepoints_file_path(dir.path()), "😀\n😃").unwrap();
        // 無効なバージョンを渡してもキャッシュが優先される。
        let doc = fetch_reference_document("no-such-version", dir.path()).unwrap();
        assert_eq!(["😀", "😃"], doc.emojis());
    }
}
