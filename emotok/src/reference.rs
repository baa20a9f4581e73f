//! リファレンス文書の解析を行うモジュール
//!
//! このモジュールは、Unicodeの`emoji-test.txt`形式のリファレンス文書を解析し、
//! 絵文字リテラルの順序付きリスト（[`ReferenceDocument`]）を構築する機能を
//! 提供します。また、解析結果をキャッシュ用のテキスト形式に直列化する機能も
//! 含まれています。

use crate::errors::{BadCodepointError, ParserError, Result};

/// リファレンス文書から抽出された絵文字の順序付きリスト
///
/// 文書中のコメント行・空行を除くすべての有効なレコードから復号された
/// 絵文字を、ファイル中の出現順で保持します。重複はそのまま保持されます。
/// 構築後は不変です。
///
/// # 例
///
/// ```
/// use emotok::ReferenceDocument;
///
/// let data = "1F600 ; fully-qualified # 😀 E1.0 grinning face";
/// let doc = ReferenceDocument::from_reference_bytes(data.as_bytes()).unwrap();
/// assert_eq!(doc.emojis(), ["😀"]);
/// ```
#[derive(Debug, Clone)]
pub struct ReferenceDocument {
    emojis: Vec<String>,
}

impl ReferenceDocument {
    /// 生のリファレンス文書を解析して新しいインスタンスを作成します。
    ///
    /// 行番号は1始まりで数えます。トリム後に空の行、および`#`で始まる行は
    /// スキップされます。それ以外の行では、最初の`;`より前の部分（前後の
    /// 空白を除去したもの）をコードポイントフィールドとして復号します。
    ///
    /// # 引数
    ///
    /// * `data` - UTF-8エンコードされたリファレンス文書のバイト列
    ///
    /// # エラー
    ///
    /// いずれかのフィールドの復号が失敗した場合、最初の失敗の時点で解析を
    /// 中断し、行番号とフィールド全文を保持した[`ParserError`]を返します。
    ///
    /// [`ParserError`]: crate::errors::ParserError
    pub fn from_reference_bytes(data: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(data)?;
        let mut emojis = vec![];
        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let field = match line.split_once(';') {
                Some((field, _)) => field,
                None => line,
            };
            let emoji = decode_codepoints(field, i + 1).map_err(ParserError::from)?;
            emojis.push(emoji);
        }
        Ok(Self { emojis })
    }

    /// 直列化済みのコードポイントキャッシュから新しいインスタンスを作成します。
    ///
    /// 入力は[`to_codepoints_text`]が出力する形式、すなわち1行につき1つの
    /// 絵文字リテラルを並べたテキストです。空行は無視されます。
    /// 16進数の再解析は行われません。
    ///
    /// # 引数
    ///
    /// * `text` - 1行1絵文字のキャッシュテキスト
    ///
    /// [`to_codepoints_text`]: Self::to_codepoints_text
    pub fn from_codepoints_text(text: &str) -> Self {
        let emojis = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect();
        Self { emojis }
    }

    /// 正規の永続化形式に直列化します。
    ///
    /// 絵文字リテラルをファイル中の出現順のまま、1行に1つずつ改行で
    /// 連結した文字列を返します。この文字列はそのまま
    /// [`from_codepoints_text`]に渡して復元できます。
    ///
    /// [`from_codepoints_text`]: Self::from_codepoints_text
    pub fn to_codepoints_text(&self) -> String {
        self.emojis.join("\n")
    }

    /// 絵文字リテラルのスライスへの参照を返します。
    #[inline(always)]
    pub fn emojis(&self) -> &[String] {
        &self.emojis
    }

    /// 保持している絵文字の個数を返します。
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    /// 絵文字を1つも保持していない場合に`true`を返します。
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }
}

/// 1つのコードポイントフィールドを絵文字文字列に復号します。
///
/// フィールドを任意の空白文字（スペース、タブ、改行、復帰）の並びで分割し、
/// 空でない各トークンを16進数の符号なし整数として解析します。解析された
/// 各値をUnicodeスカラ値として解釈し、トークン順に連結したUTF-8文字列を
/// 返します。フィールドの前後の空白は完全に無視されます。
///
/// # 引数
///
/// * `field` - コードポイントフィールドの文字列
/// * `line_number` - フィールドの由来する行番号（1始まり、エラー報告用）
///
/// # エラー
///
/// いずれかのトークンが16進数として解析できない場合、または解析された値が
/// 有効なUnicodeスカラ値でない場合、そのトークンを特定した
/// [`BadCodepointError`]を返します。以降のトークンは処理されません。
pub fn decode_codepoints(field: &str, line_number: usize) -> Result<String, BadCodepointError> {
    let mut emoji = String::new();
    for token in field.split_whitespace() {
        let value = u32::from_str_radix(token, 16)
            .map_err(|e| BadCodepointError::new(line_number, field, token, e.to_string()))?;
        let ch = char::from_u32(value).ok_or_else(|| {
            BadCodepointError::new(
                line_number,
                field,
                token,
                "not a valid Unicode scalar value",
            )
        })?;
        emoji.push(ch);
    }
    Ok(emoji)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_codepoint_with_surrounding_whitespace() {
        assert_eq!("😀", decode_codepoints("   \n1F600\n\r", 0).unwrap());
    }

    #[test]
    fn test_decode_skin_tone_zwj_sequence() {
        assert_eq!(
            "👱🏻‍♀️",
            decode_codepoints("1F471 1F3FB 200D 2640 FE0F", 0).unwrap()
        );
        assert_eq!(
            "🙍🏻‍♀️",
            decode_codepoints("\n\n           1F64D 1F3FB 200D 2640 FE0F\n\t\r", 0).unwrap()
        );
    }

    #[test]
    fn test_decode_kiss_sequence() {
        assert_eq!(
            "👩‍❤️‍💋‍👨",
            decode_codepoints("1F469 200D 2764 FE0F 200D 1F48B 200D 1F468", 0).unwrap()
        );
    }

    #[test]
    fn test_decode_flag_sequence() {
        assert_eq!("🇺🇦", decode_codepoints("1F1FA 1F1E6", 0).unwrap());
    }

    #[test]
    fn test_decode_bad_first_token() {
        let e = decode_codepoints("1F- f_34w5603", 2).unwrap_err();
        assert_eq!(2, e.line());
        assert_eq!("1F- f_34w5603", e.field());
        assert_eq!("1F-", e.token());
    }

    #[test]
    fn test_decode_bad_middle_token_is_reported_whole() {
        // 内部に非16進文字を含むトークンは、複数のトークンにではなく
        // 1つの不正トークンとして報告される。
        let e = decode_codepoints("1F471 1F3FB_f2640 FE0F", 5).unwrap_err();
        assert_eq!(5, e.line());
        assert_eq!("1F471 1F3FB_f2640 FE0F", e.field());
        assert_eq!("1F3FB_f2640", e.token());
    }

    #[test]
    fn test_decode_bad_literal_token() {
        let e = decode_codepoints("someLiteral", 100).unwrap_err();
        assert_eq!(100, e.line());
        assert_eq!("someLiteral", e.token());
    }

    #[test]
    fn test_decode_bad_trailing_underscore() {
        let e = decode_codepoints("1F1FA 1F1E6_", 5).unwrap_err();
        assert_eq!("1F1E6_", e.token());
    }

    #[test]
    fn test_decode_rejects_surrogate_value() {
        let e = decode_codepoints("D800", 1).unwrap_err();
        assert_eq!("D800", e.token());
    }

    #[test]
    fn test_decode_empty_field() {
        assert_eq!("", decode_codepoints("  \n ", 1).unwrap());
    }

    #[test]
    fn test_decode_round_trip() {
        let values = [0x1F471_u32, 0x1F3FB, 0x200D, 0x2640, 0xFE0F];
        let field = "1F471 1F3FB 200D 2640 FE0F";
        let emoji = decode_codepoints(field, 0).unwrap();
        let recovered: Vec<u32> = emoji.chars().map(u32::from).collect();
        assert_eq!(values.as_slice(), recovered.as_slice());
    }

    #[test]
    fn test_parse_reference_ok() {
        let data = "\
# emoji-test.txt
# Date: 2020-01-21, 13:40:25 GMT
# © 2020 Unicode®, Inc.
# Unicode and the Unicode Logo are registered trademarks of Unicode, Inc. in the U.S. and other countries.
# For terms of use, see http://www.unicode.org/terms_of_use.html
#
# Emoji Keyboard/Display Test Data for UTS #51
# Version: 13.0
#

# group: Smileys & Emotion

# subgroup: face-smiling
1F600                                      ; fully-qualified     # 😀 E1.0 grinning face
1F603                                      ; fully-qualified     # 😃 E0.6 grinning face with big eyes
1F604                                      ; fully-qualified     # 😄 E0.6 grinning face with smiling eyes
1F601                                      ; fully-qualified     # 😁 E0.6 beaming face with smiling eyes
1F606                                      ; fully-qualified     # 😆 E0.6 grinning squinting face
1F605                                      ; fully-qualified     # 😅 E0.6 grinning face with sweat
";
        let doc = ReferenceDocument::from_reference_bytes(data.as_bytes()).unwrap();
        assert_eq!(["😀", "😃", "😄", "😁", "😆", "😅"], doc.emojis());
        assert_eq!("😀\n😃\n😄\n😁\n😆\n😅", doc.to_codepoints_text());
    }

    #[test]
    fn test_parse_reference_err() {
        let data = "\
# emoji-test.txt
# Date: 2020-01-21, 13:40:25 GMT
# © 2020 Unicode®, Inc.
# Unicode and the Unicode Logo are registered trademarks of Unicode, Inc. in the U.S. and other countries.
# For terms of use, see http://www.unicode.org/terms_of_use.html
#
# Emoji Keyboard/Display Test Data for UTS #51
# Version: 13.0
#

# group: Smileys & Emotion

# subgroup: face-smiling
1F600                                      ; fully-qualified     # 😀 E1.0 grinning face
1F-9sd+_34w5603                                      ; fully-qualified     # 😃 E0.6 grinning face with big eyes
1F601                                      ; fully-qualified     # 😁 E0.6 beaming face with smiling eyes
";
        let e = match ReferenceDocument::from_reference_bytes(data.as_bytes()) {
            Err(crate::errors::EmotokError::Parser(e)) => e,
            r => panic!("unexpected result: {:?}", r.map(|d| d.emojis().to_vec())),
        };
        assert_eq!(15, e.line());
        assert_eq!("1F-9sd+_34w5603", e.field());
        assert_eq!("1F-9sd+_34w5603", e.cause().token());
    }

    #[test]
    fn test_parse_reference_line_without_separator() {
        // `;`を持たない行は行全体がフィールドとして扱われる。
        let e = ReferenceDocument::from_reference_bytes(b"someLiteral").unwrap_err();
        assert!(matches!(e, crate::errors::EmotokError::Parser(_)));
    }

    #[test]
    fn test_parse_reference_empty_document() {
        let doc = ReferenceDocument::from_reference_bytes(b"# only comments\n\n").unwrap();
        assert!(doc.is_empty());
        assert_eq!("", doc.to_codepoints_text());
    }

    #[test]
    fn test_codepoints_text_round_trip() {
        let doc = ReferenceDocument::from_codepoints_text("😀\n🏳️‍🌈\n🇺🇦");
        assert_eq!(["😀", "🏳️‍🌈", "🇺🇦"], doc.emojis());
        assert_eq!("😀\n🏳️‍🌈\n🇺🇦", doc.to_codepoints_text());
        let restored = ReferenceDocument::from_codepoints_text(&doc.to_codepoints_text());
        assert_eq!(doc.emojis(), restored.emojis());
    }
}
