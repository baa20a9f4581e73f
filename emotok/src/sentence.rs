//! 入力テキストの内部表現を提供するモジュール
//!
//! このモジュールは、絵文字走査のために入力テキストを文字単位に分割し、
//! 各文字位置からバイト位置へのマッピングを計算・保持する内部データ構造を
//! 提供します。

/// 入力テキストの内部表現を保持する構造体
///
/// この構造体は、走査のために入力テキストを処理し、以下の情報を保持します:
/// - 元の入力文字列
/// - 文字配列
/// - 文字位置からバイト位置へのマッピング
#[derive(Default, Clone, Debug)]
pub(crate) struct Sentence {
    input: String,
    chars: Vec<char>,
    c2b: Vec<usize>,
}

impl Sentence {
    /// 新しい空の `Sentence` インスタンスを生成します
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// 内部状態をクリアします
    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.input.clear();
        self.chars.clear();
        self.c2b.clear();
    }

    /// 入力文字列を設定します
    ///
    /// 既存の内部状態をクリアした後、新しい入力文字列を設定します。
    /// この時点では文字列の解析は行われません。解析を行うには [`compile`] を
    /// 呼び出す必要があります。
    ///
    /// # 引数
    ///
    /// * `input` - 設定する入力文字列
    ///
    /// [`compile`]: Self::compile
    pub(crate) fn set_sentence<S>(&mut self, input: S)
    where
        S: AsRef<str>,
    {
        self.clear();
        self.input.push_str(input.as_ref());
    }

    /// 入力文字列を解析し、内部データ構造を構築します
    ///
    /// 入力文字列を文字単位に分割し、文字配列と文字位置からバイト位置への
    /// マッピング配列（末尾に番兵としてバイト長を含む）を構築します。
    pub(crate) fn compile(&mut self) {
        for (bi, ch) in self.input.char_indices() {
            self.chars.push(ch);
            self.c2b.push(bi);
        }
        self.c2b.push(self.input.len());
    }

    /// 文字配列への参照を返します
    #[inline(always)]
    pub(crate) fn chars(&self) -> &[char] {
        &self.chars
    }

    /// 文字位置に対応するバイト位置を返します
    ///
    /// 文字位置 `len_char()` には入力全体のバイト長が対応します。
    #[inline(always)]
    pub(crate) fn byte_position(&self, pos_char: usize) -> usize {
        self.c2b[pos_char]
    }
}
