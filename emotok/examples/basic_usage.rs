//! # emotok 基本的な使い方のサンプル
//!
//! このサンプルでは、リファレンス文書の自動ダウンロードとキャッシング機能を
//! 使用した emotok の基本的な使い方を示します。
//!
//! ## 使用例
//!
//! ```bash
//! cargo run --example basic_usage --features fetch
//! ```
//!
//! 初回実行時はリファレンスのダウンロードが行われるため時間がかかりますが、
//! 2回目以降はキャッシュから高速に読み込まれます。

use std::error::Error;

use emotok::Tokenizer;

/// emotok の基本的な使い方を示すメイン関数
///
/// この関数では以下の処理を実行します：
/// 1. リファレンス文書のダウンロードとキャッシュの読み込み
/// 2. トークナイザーの構築
/// 3. パディング・単語分割・置換の実行
fn main() -> Result<(), Box<dyn Error>> {
    // リファレンスのダウンロードとキャッシュ
    // 初回はemoji-test.txtをダウンロードして解析し、コードポイントキャッシュを
    // 書き出します。2回目以降はキャッシュから即座に読み込みます。
    let doc = emotok::fetch::fetch_reference_document(
        emotok::fetch::DEFAULT_REFERENCE_VERSION,
        "emojidata",
    )?;
    println!("Loaded {} emoji sequences", doc.len());

    let tokenizer = Tokenizer::new(&doc)?;

    let text = "hello😊World!😄🌎🏳️‍🌈";
    println!("pad:     {:?}", tokenizer.pad(text, true));
    println!("words:   {:?}", tokenizer.words(text));
    println!("replace: {:?}", tokenizer.replace(text, "<emoji>"));

    Ok(())
}
