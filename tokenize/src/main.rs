//! 絵文字認識によるテキスト変換を実行するユーティリティ
//!
//! このバイナリは、標準入力から読み込んだテキストを行ごとに変換し、
//! 指定された出力形式（pad、words、replace）で結果を出力します。

use std::error::Error;
use std::fs;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use emotok::{ReferenceDocument, Tokenizer};

use clap::Parser;

/// 出力モード
#[derive(Clone, Debug)]
enum OutputMode {
    Pad,
    Words,
    Replace,
}

/// `OutputMode` の `FromStr` 実装
impl FromStr for OutputMode {
    type Err = &'static str;

    /// 文字列から出力モードをパースする
    ///
    /// # 引数
    ///
    /// * `mode` - パース対象の文字列（"pad"、"words"、"replace"のいずれか）
    ///
    /// # 戻り値
    ///
    /// パースに成功した場合は対応する `OutputMode`、失敗した場合はエラーメッセージ
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "pad" => Ok(Self::Pad),
            "words" => Ok(Self::Words),
            "replace" => Ok(Self::Replace),
            _ => Err("Could not parse a mode"),
        }
    }
}

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "tokenize", about = "Recognizes emoji and transforms text")]
struct Args {
    /// Codepoints cache file (one emoji per line). When omitted, the
    /// reference document is downloaded and cached in --cache-dir.
    #[clap(short = 'i', long)]
    codepoints: Option<PathBuf>,

    /// Output mode. Choices are pad, words, and replace.
    #[clap(short = 'O', long, default_value = "pad")]
    output_mode: OutputMode,

    /// Collapses runs of spaces produced by padding (pad mode only).
    #[clap(short = 'S', long)]
    remove_extra_whitespace: bool,

    /// Replacement string (replace mode only).
    #[clap(short = 'r', long, default_value = "")]
    replacement: String,

    /// Reference version to download when no codepoints file is given.
    #[clap(long, default_value = emotok::fetch::DEFAULT_REFERENCE_VERSION)]
    version: String,

    /// Cache directory for the downloaded reference.
    #[clap(long, default_value = "emojidata")]
    cache_dir: PathBuf,
}

/// メイン関数
///
/// リファレンスをロードし、標準入力から読み込んだテキストを変換して、
/// 指定された形式で結果を標準出力に出力します。
///
/// # 戻り値
///
/// 実行が成功した場合は `Ok(())`、エラーが発生した場合はエラー情報
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    eprintln!("Loading the emoji reference...");
    let doc = match &args.codepoints {
        Some(path) => ReferenceDocument::from_codepoints_text(&fs::read_to_string(path)?),
        None => emotok::fetch::fetch_reference_document(&args.version, &args.cache_dir)?,
    };
    let tokenizer = Tokenizer::new(&doc)?;

    eprintln!("Ready to tokenize");

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        match args.output_mode {
            OutputMode::Pad => {
                writeln!(out, "{}", tokenizer.pad(&line, args.remove_extra_whitespace))?;
            }
            OutputMode::Words => {
                writeln!(out, "{}", tokenizer.words(&line).join(" "))?;
            }
            OutputMode::Replace => {
                writeln!(out, "{}", tokenizer.replace(&line, &args.replacement))?;
            }
        }
    }
    Ok(())
}
