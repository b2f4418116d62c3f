//! Static vocabulary of the Grongigo script
//!
//! Every table here is compiled in and never mutated. Exact-match lookups go
//! through lazily built [`FxHashMap`]s so that concurrent compilations in the
//! same process share one read-only copy.

use super::lexer::TokenKind;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Base-9 digit morphemes. `バギン` spells nine, the "ten" of base nine.
pub const DIGITS: &[(&str, i64)] = &[
    ("ゼゼソ", 0),
    ("パパン", 1),
    ("ドググ", 2),
    ("グシギ", 3),
    ("ズゴゴ", 4),
    ("ズガギ", 5),
    ("ギブグ", 6),
    ("ゲズン", 7),
    ("ゲギド", 8),
    ("バギン", 9),
];

/// In-numeral addition morpheme.
pub const NUMERAL_ADD: char = 'ド';

/// In-numeral multiplication morpheme.
pub const NUMERAL_MULTIPLY: char = 'グ';

pub const TYPE_KEYWORDS: &[(&str, &str)] = &[
    ("ゲギグウ", "int"),
    ("ロジ", "char"),
    ("ズゾウ", "float"),
    ("ザダダス", "double"),
    ("バサ", "void"),
    ("バゴ", "long"),
    ("ジジバギ", "short"),
    ("ブゾウ", "unsigned"),
];

pub const CONTROL_KEYWORDS: &[(&str, &str)] = &[
    ("ジョウベン", "if"),
    ("ゾバ", "else"),
    ("ガギザ", "while"),
    ("ブシバゲギ", "for"),
    ("ロゾス", "return"),
    ("ブゲス", "break"),
    ("ヅヅゲス", "continue"),
    ("ゲンダブ", "switch"),
    ("ダガギ", "case"),
    ("ビデギ", "default"),
    ("ジョウジ", "printf"),
    ("ジュウソブ", "scanf"),
];

/// Keywords that are neither types nor control flow. An empty mapping marks
/// a bare marker whose token value is the word itself.
pub const OTHER_KEYWORDS: &[(&str, &str)] = &[
    ("ボウゾウ", "struct"),
    ("バダデギギ", "typedef"),
    ("ゴゴビガ", "sizeof"),
    ("ル", "NULL"),
    ("ギン", "1"),
    ("ギ", "0"),
    ("ゴロ", "main"),
    ("パザ", ""),
    ("ザジレ", "{"),
    ("ゴパシ", "}"),
];

pub const OPERATORS: &[(&str, &str)] = &[
    ("ダグ", "+"),
    ("ジブ", "-"),
    ("バゲス", "*"),
    ("パス", "/"),
    ("ガラシ", "%"),
    ("ギセス", "="),
    ("ジドギギ", "=="),
    ("ジドギグバギ", "!="),
    ("ギョウバシ", "<"),
    ("ザギバシ", ">"),
    ("ギバ", "<="),
    ("ギジョウ", ">="),
    ("バヅ", "&&"),
    ("ラダパ", "||"),
    ("ジデギ", "!"),
    ("ガンド", "&"),
    ("ゴゴ", "|"),
    ("ダグダグ", "++"),
    ("ジブジブ", "--"),
];

/// Compound bracket words, ordered longest first. A scanned run that merely
/// starts with one of these still yields the bracket; the lexer hands the
/// excess characters back to the input.
pub const BRACKET_KEYWORDS: &[(&str, TokenKind, &str)] = &[
    ("ザジレジョヂザギ", TokenKind::OpenParen, "("),
    ("ゴパシジョヂザギ", TokenKind::CloseParen, ")"),
    ("ザジレパギセヅ", TokenKind::OpenBracket, "["),
    ("ゴパシザギセヅ", TokenKind::CloseBracket, "]"),
    ("ザジレ", TokenKind::OpenBrace, "{"),
    ("ゴパシ", TokenKind::CloseBrace, "}"),
];

/// Raw spelling of the function-definition marker.
pub const FUNCTION_MARKER: &str = "パザ";

pub const LINE_COMMENT: &str = "ゴゴ";
pub const BLOCK_COMMENT_OPEN: &str = "ゴビ";
pub const BLOCK_COMMENT_CLOSE: &str = "ビゴ";

pub const STRING_OPEN: char = '「';
pub const STRING_CLOSE: char = '」';
pub const CHAR_OPEN: char = '『';
pub const CHAR_CLOSE: char = '』';

/// Lengthening mark; may continue a katakana run but never starts one.
pub const PROLONGED_SOUND_MARK: char = 'ー';

/// Which keyword table a word was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordClass {
    Type,
    Control,
    Other,
}

impl KeywordClass {
    pub fn token_kind(self) -> TokenKind {
        match self {
            KeywordClass::Type => TokenKind::TypeKeyword,
            KeywordClass::Control => TokenKind::ControlKeyword,
            KeywordClass::Other => TokenKind::OtherKeyword,
        }
    }
}

static KEYWORDS: LazyLock<FxHashMap<&'static str, (KeywordClass, &'static str)>> =
    LazyLock::new(|| {
        let mut map = FxHashMap::default();
        let tables = [
            (KeywordClass::Type, TYPE_KEYWORDS),
            (KeywordClass::Control, CONTROL_KEYWORDS),
            (KeywordClass::Other, OTHER_KEYWORDS),
        ];
        for (class, table) in tables {
            for &(word, mapped) in table {
                map.insert(word, (class, mapped));
            }
        }
        map
    });

static OPERATOR_MAP: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| OPERATORS.iter().copied().collect());

static DIGITS_LONGEST_FIRST: LazyLock<Vec<(&'static str, i64)>> = LazyLock::new(|| {
    let mut digits = DIGITS.to_vec();
    digits.sort_by_key(|(word, _)| std::cmp::Reverse(word.chars().count()));
    digits
});

/// Exact keyword lookup across the type, control and other tables.
pub fn keyword(word: &str) -> Option<(KeywordClass, &'static str)> {
    KEYWORDS.get(word).copied()
}

/// Exact operator lookup.
pub fn operator(word: &str) -> Option<&'static str> {
    OPERATOR_MAP.get(word).copied()
}

/// First bracket word (longest first) that `word` starts with.
pub fn bracket_prefix(word: &str) -> Option<(&'static str, TokenKind, &'static str)> {
    BRACKET_KEYWORDS
        .iter()
        .find(|(keyword, _, _)| word.starts_with(keyword))
        .copied()
}

/// Digit morphemes ordered for longest-match segmentation.
pub fn digits_longest_first() -> &'static [(&'static str, i64)] {
    &DIGITS_LONGEST_FIRST
}

/// Whether `c` belongs to the Katakana script.
pub fn is_katakana(c: char) -> bool {
    matches!(
        c,
        '\u{30A1}'..='\u{30FA}'
            | '\u{30FD}'..='\u{30FF}'
            | '\u{31F0}'..='\u{31FF}'
            | '\u{32D0}'..='\u{32FE}'
            | '\u{3300}'..='\u{3357}'
            | '\u{FF66}'..='\u{FF6F}'
            | '\u{FF71}'..='\u{FF9D}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_tables_are_disjoint() {
        let mut seen = std::collections::HashSet::new();
        for (word, _) in TYPE_KEYWORDS
            .iter()
            .chain(CONTROL_KEYWORDS)
            .chain(OTHER_KEYWORDS)
            .chain(OPERATORS)
        {
            assert!(seen.insert(*word), "duplicate table entry {word}");
        }
    }

    #[test]
    fn test_bracket_words_checked_longest_first() {
        let lengths: Vec<usize> = BRACKET_KEYWORDS
            .iter()
            .map(|(word, _, _)| word.chars().count())
            .collect();
        let mut sorted = lengths.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
    }

    #[test]
    fn test_lookups() {
        assert_eq!(keyword("ゲギグウ"), Some((KeywordClass::Type, "int")));
        assert_eq!(keyword("ジョウジ"), Some((KeywordClass::Control, "printf")));
        assert_eq!(keyword("パザ"), Some((KeywordClass::Other, "")));
        assert_eq!(operator("ダグダグ"), Some("++"));
        assert_eq!(operator("ダグダ"), None);
        assert_eq!(
            bracket_prefix("ザジレジョヂザギゲギグウ").map(|(_, kind, _)| kind),
            Some(TokenKind::OpenParen)
        );
        assert_eq!(
            bracket_prefix("ザジレ").map(|(_, kind, _)| kind),
            Some(TokenKind::OpenBrace)
        );
    }

    #[test]
    fn test_katakana_class() {
        assert!(is_katakana('ガ'));
        assert!(is_katakana('ヴ'));
        assert!(!is_katakana(PROLONGED_SOUND_MARK));
        assert!(!is_katakana('が'));
        assert!(!is_katakana('「'));
        assert!(!is_katakana('a'));
    }
}
