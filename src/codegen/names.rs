//! Identifier and literal spelling for the generated C
//!
//! Katakana names are transliterated syllable by syllable into ASCII, and
//! literal text is escaped for C string and character syntax.

use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Names emitted verbatim regardless of their spelling.
pub const RESERVED_NAMES: &[&str] = &["main", "printf", "scanf", "NULL"];

/// Stand-in for a name that transliterates to nothing.
pub const PLACEHOLDER_NAME: &str = "var";

#[rustfmt::skip]
const ROMAJI: &[(&str, &str)] = &[
    ("ア", "a"), ("イ", "i"), ("ウ", "u"), ("エ", "e"), ("オ", "o"),
    ("カ", "ka"), ("キ", "ki"), ("ク", "ku"), ("ケ", "ke"), ("コ", "ko"),
    ("サ", "sa"), ("シ", "si"), ("ス", "su"), ("セ", "se"), ("ソ", "so"),
    ("タ", "ta"), ("チ", "ti"), ("ツ", "tu"), ("テ", "te"), ("ト", "to"),
    ("ナ", "na"), ("ニ", "ni"), ("ヌ", "nu"), ("ネ", "ne"), ("ノ", "no"),
    ("ハ", "ha"), ("ヒ", "hi"), ("フ", "hu"), ("ヘ", "he"), ("ホ", "ho"),
    ("マ", "ma"), ("ミ", "mi"), ("ム", "mu"), ("メ", "me"), ("モ", "mo"),
    ("ヤ", "ya"), ("ユ", "yu"), ("ヨ", "yo"),
    ("ラ", "ra"), ("リ", "ri"), ("ル", "ru"), ("レ", "re"), ("ロ", "ro"),
    ("ワ", "wa"), ("ヲ", "wo"), ("ン", "n"),
    ("ガ", "ga"), ("ギ", "gi"), ("グ", "gu"), ("ゲ", "ge"), ("ゴ", "go"),
    ("ザ", "za"), ("ジ", "zi"), ("ズ", "zu"), ("ゼ", "ze"), ("ゾ", "zo"),
    ("ダ", "da"), ("ヂ", "di"), ("ヅ", "du"), ("デ", "de"), ("ド", "do"),
    ("バ", "ba"), ("ビ", "bi"), ("ブ", "bu"), ("ベ", "be"), ("ボ", "bo"),
    ("パ", "pa"), ("ピ", "pi"), ("プ", "pu"), ("ペ", "pe"), ("ポ", "po"),
    ("ジャ", "ja"), ("ジュ", "ju"), ("ジョ", "jo"),
    ("ー", "_"),
];

static ROMAJI_MAP: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| ROMAJI.iter().copied().collect());

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Spell `name` as a C identifier. Valid identifiers and reserved names pass
/// through; anything else is transliterated.
pub fn sanitize_name(name: &str) -> String {
    if is_c_identifier(name) || RESERVED_NAMES.contains(&name) {
        return name.to_string();
    }
    katakana_to_roman(name)
}

/// Transliterate katakana to ASCII, two-character combinations first.
/// Unmapped characters become `_`.
pub fn katakana_to_roman(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::new();
    let mut i = 0;

    while i < chars.len() {
        if i + 1 < chars.len() {
            let pair: String = chars[i..i + 2].iter().collect();
            if let Some(roman) = ROMAJI_MAP.get(pair.as_str()) {
                result.push_str(roman);
                i += 2;
                continue;
            }
        }

        let single = chars[i].to_string();
        match ROMAJI_MAP.get(single.as_str()) {
            Some(roman) => result.push_str(roman),
            None => result.push('_'),
        }
        i += 1;
    }

    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    if result.is_empty() {
        result.push_str(PLACEHOLDER_NAME);
    }
    result
}

/// Escape text for a C string literal body. Backslashes go first so later
/// substitutions are not escaped twice.
pub fn escape_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\t', "\\t")
        .replace('\r', "\\r")
}

/// Escape the first character of `value` for a C character literal.
/// An empty value is NUL.
pub fn escape_char(value: &str) -> String {
    let Some(c) = value.chars().next() else {
        return "\\0".to_string();
    };

    match c {
        '\\' => "\\\\".to_string(),
        '\'' => "\\'".to_string(),
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        '\r' => "\\r".to_string(),
        c => c.to_string(),
    }
}
