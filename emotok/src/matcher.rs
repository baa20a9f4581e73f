//! トライ構造による絵文字マッチングを行うモジュール
//!
//! このモジュールは、リファレンス文書から抽出した絵文字集合をダブル配列
//! トライにコンパイルし、入力テキストを左から右へ走査して各開始位置で
//! 最長の絵文字シーケンスを検出する機能を提供します。
//!
//! 多くの絵文字は、より短い「基底」絵文字に修飾シーケンス（肌の色修飾子や
//! ZWJ結合など）を付加して構成されており、基底側もそれ自体が有効な絵文字
//! です。共通接頭辞検索の結果から常に最長のヒットを採用することで、
//! 接頭辞側が先にマッチして修飾シーケンスが分断される誤認識を防ぎます。

use std::ops::Range;

use crate::errors::{EmotokError, Result};
use crate::reference::ReferenceDocument;
use crate::sentence::Sentence;

/// 絵文字集合をコンパイルしたマッチャー
///
/// 構築後は不変であり、複数の呼び出し元から同時に走査に使用できます。
pub(crate) struct EmojiMatcher {
    trie: crawdad::Trie,
}

impl EmojiMatcher {
    /// リファレンス文書から新しいマッチャーを構築します。
    ///
    /// 絵文字集合を重複除去し、辞書順にソートした一意なキー列から
    /// トライを構築します。レコードグループをまたいだ重複はここで
    /// 吸収されます。
    ///
    /// # 引数
    ///
    /// * `doc` - 絵文字の順序付きリスト
    ///
    /// # エラー
    ///
    /// 絵文字集合が空の場合、またはトライの構築が失敗した場合に
    /// [`PatternBuildError`]を返します。
    ///
    /// [`PatternBuildError`]: crate::errors::PatternBuildError
    pub(crate) fn new(doc: &ReferenceDocument) -> Result<Self> {
        let mut keys: Vec<&str> = doc
            .emojis()
            .iter()
            .map(String::as_str)
            .filter(|emoji| !emoji.is_empty())
            .collect();
        keys.sort_unstable();
        keys.dedup();
        if keys.is_empty() {
            return Err(EmotokError::pattern_build(
                "the reference document contains no emoji",
            ));
        }
        let trie = crawdad::Trie::from_keys(&keys)
            .map_err(|e| EmotokError::pattern_build(e.to_string()))?;
        Ok(Self { trie })
    }

    /// 指定位置から始まる最長の絵文字シーケンスの文字数を返します。
    ///
    /// どの絵文字も始まらない位置では`None`を返します。
    #[inline(always)]
    fn longest_match_len(&self, suffix: &[char]) -> Option<usize> {
        self.trie
            .common_prefix_search(suffix.iter().cloned())
            .map(|(_, end_char)| end_char)
            .max()
    }

    /// 文を左から右へ走査し、重複しないマッチを返すイテレータを取得します。
    ///
    /// 各開始位置では最長のシーケンスが選ばれ、マッチを消費した直後の
    /// 位置から走査が再開されます。
    #[inline(always)]
    pub(crate) fn find_iter<'a>(&'a self, sent: &'a Sentence) -> MatchIter<'a> {
        MatchIter {
            matcher: self,
            sent,
            pos_char: 0,
        }
    }
}

/// マッチング結果
///
/// マッチした範囲を文字単位とバイト単位の両方で保持します。
#[derive(Debug, Eq, PartialEq, Clone)]
pub(crate) struct EmojiMatch {
    range_char: Range<usize>,
    range_byte: Range<usize>,
}

impl EmojiMatch {
    /// マッチした文字範囲を返します。
    #[inline(always)]
    pub(crate) fn range_char(&self) -> Range<usize> {
        self.range_char.clone()
    }

    /// マッチしたバイト範囲を返します。
    #[inline(always)]
    pub(crate) fn range_byte(&self) -> Range<usize> {
        self.range_byte.clone()
    }
}

/// マッチを左から右へ列挙するイテレータ
pub(crate) struct MatchIter<'a> {
    matcher: &'a EmojiMatcher,
    sent: &'a Sentence,
    pos_char: usize,
}

impl Iterator for MatchIter<'_> {
    type Item = EmojiMatch;

    fn next(&mut self) -> Option<Self::Item> {
        let chars = self.sent.chars();
        while self.pos_char < chars.len() {
            if let Some(len) = self.matcher.longest_match_len(&chars[self.pos_char..]) {
                let start_char = self.pos_char;
                self.pos_char += len;
                return Some(EmojiMatch {
                    range_char: start_char..self.pos_char,
                    range_byte: self.sent.byte_position(start_char)
                        ..self.sent.byte_position(self.pos_char),
                });
            }
            self.pos_char += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(input: &str) -> Sentence {
        let mut sent = Sentence::new();
        sent.set_sentence(input);
        sent.compile();
        sent
    }

    fn surfaces<'a>(matcher: &EmojiMatcher, input: &'a str, sent: &Sentence) -> Vec<&'a str> {
        matcher
            .find_iter(sent)
            .map(|m| &input[m.range_byte()])
            .collect()
    }

    #[test]
    fn test_longest_sequence_wins_over_prefix() {
        // 🏳️ (1F3F3 FE0F) は 🏳️‍🌈 (1F3F3 FE0F 200D 1F308) の真の接頭辞。
        let doc = ReferenceDocument::from_codepoints_text("🏳️\n🏳️‍🌈");
        let matcher = EmojiMatcher::new(&doc).unwrap();
        let input = "🏳️‍🌈";
        let sent = compile(input);
        assert_eq!(["🏳️‍🌈"], surfaces(&matcher, input, &sent).as_slice());
    }

    #[test]
    fn test_prefix_still_matches_alone() {
        let doc = ReferenceDocument::from_codepoints_text("🏳️\n🏳️‍🌈");
        let matcher = EmojiMatcher::new(&doc).unwrap();
        let input = "a🏳️b";
        let sent = compile(input);
        assert_eq!(["🏳️"], surfaces(&matcher, input, &sent).as_slice());
    }

    #[test]
    fn test_ascending_length_reference_order_is_irrelevant() {
        // 参照データが短い順に並んでいても、最長のシーケンスがマッチする。
        let doc = ReferenceDocument::from_reference_bytes(
            b"1F3F3 FE0F ; fully-qualified\n1F3F3 FE0F 200D 1F308 ; fully-qualified\n",
        )
        .unwrap();
        let matcher = EmojiMatcher::new(&doc).unwrap();
        let input = "x🏳️‍🌈y";
        let sent = compile(input);
        let matches: Vec<EmojiMatch> = matcher.find_iter(&sent).collect();
        assert_eq!(1, matches.len());
        assert_eq!(1..5, matches[0].range_char());
        assert_eq!("🏳️‍🌈", &input[matches[0].range_byte()]);
    }

    #[test]
    fn test_unextended_prefix_before_unrelated_char() {
        let doc = ReferenceDocument::from_codepoints_text("🏳️\n🏳️‍🌈");
        let matcher = EmojiMatcher::new(&doc).unwrap();
        // ZWJの後が🌈でないので、基底の🏳️のみがマッチする。
        let input = "🏳️\u{200D}X";
        let sent = compile(input);
        assert_eq!(["🏳️"], surfaces(&matcher, input, &sent).as_slice());
    }

    #[test]
    fn test_adjacent_matches_do_not_overlap() {
        let doc = ReferenceDocument::from_codepoints_text("😂");
        let matcher = EmojiMatcher::new(&doc).unwrap();
        let input = "😂😂😂";
        let sent = compile(input);
        assert_eq!(
            ["😂", "😂", "😂"],
            surfaces(&matcher, input, &sent).as_slice()
        );
    }

    #[test]
    fn test_duplicate_entries_are_deduplicated() {
        let doc = ReferenceDocument::from_codepoints_text("😀\n😀\n😀");
        let matcher = EmojiMatcher::new(&doc).unwrap();
        let input = "😀";
        let sent = compile(input);
        assert_eq!(["😀"], surfaces(&matcher, input, &sent).as_slice());
    }

    #[test]
    fn test_empty_reference_fails() {
        let doc = ReferenceDocument::from_codepoints_text("");
        let result = EmojiMatcher::new(&doc);
        assert!(matches!(
            result,
            Err(EmotokError::PatternBuild(_))
        ));
    }

    #[test]
    fn test_no_match_in_plain_text() {
        let doc = ReferenceDocument::from_codepoints_text("😀");
        let matcher = EmojiMatcher::new(&doc).unwrap();
        let sent = compile("hello world");
        assert_eq!(None, matcher.find_iter(&sent).next());
    }
}
