//! テキスト変換処理を提供するモジュール
//!
//! このモジュールは、コンパイル済みのマッチャーを用いて入力テキストを
//! 変換する3つの操作（パディング・分割・置換）を提供します。
//! すべての操作は`&self`を取る純粋関数であり、同じ[`Tokenizer`]を
//! 複数のスレッドから同時に使用できます。

use crate::errors::Result;
use crate::matcher::EmojiMatcher;
use crate::reference::ReferenceDocument;
use crate::sentence::Sentence;

/// 絵文字を認識してテキストを変換するトークナイザー
///
/// コンパイル済みのマッチャーを保持し、構築後は不変です。
///
/// # 例
///
/// ```
/// use emotok::{ReferenceDocument, Tokenizer};
///
/// let doc = ReferenceDocument::from_codepoints_text("😊\n😄");
/// let tokenizer = Tokenizer::new(&doc).unwrap();
///
/// assert_eq!("hello 😊 World! ", tokenizer.pad("hello😊World!", true));
/// assert_eq!(vec!["hello", "World!"], tokenizer.words("hello😊World!😄"));
/// assert_eq!("helloWorld!", tokenizer.replace("hello😊World!", ""));
/// ```
pub struct Tokenizer {
    matcher: EmojiMatcher,
}

impl Tokenizer {
    /// リファレンス文書から新しいインスタンスを作成します。
    ///
    /// # 引数
    ///
    /// * `doc` - 絵文字の順序付きリスト
    ///
    /// # エラー
    ///
    /// 絵文字集合が空の場合、またはマッチャーの構築が失敗した場合に
    /// エラーを返します。
    pub fn new(doc: &ReferenceDocument) -> Result<Self> {
        Ok(Self {
            matcher: EmojiMatcher::new(doc)?,
        })
    }

    /// 生のリファレンス文書から直接新しいインスタンスを作成します。
    ///
    /// [`ReferenceDocument::from_reference_bytes`]で解析した結果を
    /// そのままマッチャーの構築に渡す簡便メソッドです。
    ///
    /// # 引数
    ///
    /// * `data` - UTF-8エンコードされたリファレンス文書のバイト列
    ///
    /// # エラー
    ///
    /// 解析またはマッチャーの構築が失敗した場合にエラーを返します。
    pub fn from_reference_bytes(data: &[u8]) -> Result<Self> {
        let doc = ReferenceDocument::from_reference_bytes(data)?;
        Self::new(&doc)
    }

    /// テキスト中の各絵文字の前後に1つずつスペースを挿入します。
    ///
    /// マッチしなかった区間はそのままコピーされ、各マッチは
    /// スペース + 絵文字 + スペース に置き換えられます。挿入されるスペースは
    /// 隣接する既存の空白にかかわらず常に片側1つずつです。
    ///
    /// `remove_extra_whitespace`が`true`の場合、結果に対して2回目のパスを
    /// 行い、2つ以上連続するスペース（U+0020）の並びをそれぞれ1つに
    /// 圧縮します。他の空白文字には触れず、文字列の両端のトリムも行いません。
    ///
    /// # 引数
    ///
    /// * `text` - 入力テキスト
    /// * `remove_extra_whitespace` - 連続スペースを圧縮するかどうか
    pub fn pad(&self, text: &str, remove_extra_whitespace: bool) -> String {
        let sent = compile_sentence(text);
        let mut result = String::with_capacity(text.len() + text.len() / 2);
        let mut last_end = 0;
        for m in self.matcher.find_iter(&sent) {
            let range = m.range_byte();
            result.push_str(&text[last_end..range.start]);
            result.push(' ');
            result.push_str(&text[range.clone()]);
            result.push(' ');
            last_end = range.end;
        }
        result.push_str(&text[last_end..]);
        if remove_extra_whitespace {
            collapse_spaces(&result)
        } else {
            result
        }
    }

    /// テキストを絵文字の位置で分割し、空でない区間を返します。
    ///
    /// 絵文字は常に境界であり、トークンとして返されることはありません。
    /// 各区間は前後の空白（任意の空白クラス）をトリムされますが、区間内部の
    /// 空白はそのまま保持されます。トリム後に空になった区間は捨てられ、
    /// 残った区間が元の並び順で返されます。
    ///
    /// # 引数
    ///
    /// * `text` - 入力テキスト
    pub fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let sent = compile_sentence(text);
        let mut words = vec![];
        let mut last_end = 0;
        for m in self.matcher.find_iter(&sent) {
            let range = m.range_byte();
            push_trimmed(&mut words, &text[last_end..range.start]);
            last_end = range.end;
        }
        push_trimmed(&mut words, &text[last_end..]);
        words
    }

    /// テキスト中の各絵文字を置換文字列に置き換えます。
    ///
    /// 置換文字列はそのまま挿入され、周囲のスペースの追加や削除は
    /// 行われません。マッチしなかった区間は元の空白を含めて変更されません。
    ///
    /// # 引数
    ///
    /// * `text` - 入力テキスト
    /// * `replacement` - 各マッチを置き換える文字列
    pub fn replace(&self, text: &str, replacement: &str) -> String {
        let sent = compile_sentence(text);
        let mut result = String::with_capacity(text.len());
        let mut last_end = 0;
        for m in self.matcher.find_iter(&sent) {
            let range = m.range_byte();
            result.push_str(&text[last_end..range.start]);
            result.push_str(replacement);
            last_end = range.end;
        }
        result.push_str(&text[last_end..]);
        result
    }
}

/// 入力テキストから走査用の内部表現を構築します。
fn compile_sentence(text: &str) -> Sentence {
    let mut sent = Sentence::new();
    sent.set_sentence(text);
    sent.compile();
    sent
}

/// トリムした区間が空でなければ追加します。
#[inline(always)]
fn push_trimmed<'a>(words: &mut Vec<&'a str>, segment: &'a str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        words.push(trimmed);
    }
}

/// 2つ以上連続するスペース（U+0020）の並びをそれぞれ1つに圧縮します。
///
/// 他の空白クラスには触れず、両端のトリムも行いません。
fn collapse_spaces(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_is_space = false;
    for ch in text.chars() {
        if ch == ' ' {
            if !prev_is_space {
                result.push(ch);
            }
            prev_is_space = true;
        } else {
            result.push(ch);
            prev_is_space = false;
        }
    }
    result
}
