//! # emotok
//!
//! emotokは、Unicodeの`emoji-test.txt`リファレンス文書に基づいて
//! テキスト中の絵文字を認識し、パディング・分割・置換を行うライブラリです。
//!
//! ## 概要
//!
//! このライブラリは、国旗・肌の色修飾子・ZWJ結合などの複数コードポイント
//! からなるグラフェムシーケンスを含む絵文字を、任意のテキストの中から
//! 正しく認識します。認識にはリファレンス文書からコンパイルした
//! ダブル配列トライを使用し、各開始位置で常に最長の絵文字シーケンスが
//! 選ばれることを保証します。
//!
//! ## 主な機能
//!
//! - **リファレンス解析**: `emoji-test.txt`形式の文書を絵文字リストに変換
//! - **最長一致の認識**: 基底絵文字より修飾シーケンス付きの絵文字を優先
//! - **3つのテキスト変換**: パディング（`pad`）、単語分割（`words`）、
//!   置換（`replace`）
//! - **キャッシュ形式の直列化**: 解析結果を1行1絵文字のテキストとして
//!   保存・復元（`fetch`フィーチャー有効時はダウンロードと永続化も）
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use emotok::{ReferenceDocument, Tokenizer};
//!
//! let reference = "\
//! ## subgroup: face-smiling
//! 1F600 ; fully-qualified # 😀 E1.0 grinning face
//! 1F604 ; fully-qualified # 😄 E0.6 grinning face with smiling eyes
//! 1F60A ; fully-qualified # 😊 E0.6 smiling face with smiling eyes
//! ";
//!
//! let doc = ReferenceDocument::from_reference_bytes(reference.as_bytes())?;
//! let tokenizer = Tokenizer::new(&doc)?;
//!
//! assert_eq!("hello 😊 World! ", tokenizer.pad("hello😊World!", true));
//! assert_eq!(vec!["hello", "World!"], tokenizer.words("hello😊World!😄"));
//! assert_eq!("helloWorld!", tokenizer.replace("hello😊World!", ""));
//!
//! // 解析結果はキャッシュ用のテキスト形式に直列化できます。
//! assert_eq!("😀\n😄\n😊", doc.to_codepoints_text());
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

/// エラー型の定義
pub mod errors;

/// リファレンス文書の解析
pub mod reference;

/// テキスト変換処理
pub mod tokenizer;

/// リファレンス文書のダウンロードとキャッシュ
#[cfg(feature = "fetch")]
#[cfg_attr(docsrs, doc(cfg(feature = "fetch")))]
pub mod fetch;

/// 絵文字マッチング
mod matcher;

/// 入力テキストの内部表現
mod sentence;

pub use errors::{EmotokError, Result};

pub use reference::ReferenceDocument;

pub use tokenizer::Tokenizer;
