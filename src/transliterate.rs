//! Japanese text to Grongigo
//!
//! Helpers for writing scripts: [`convert`] rewrites kana syllable by syllable
//! into the Grongigo alphabet, and [`number_to_numeral`] spells an integer as
//! the base-9 numeral word the lexer reads back.
//!
//! Neither function is used by the compiler pipeline itself.

use crate::parser::tables::{DIGITS, NUMERAL_ADD, NUMERAL_MULTIPLY};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Words copied through untouched.
pub const PROPER_NOUNS: &[&str] = &[
    "クウガ",
    "リント",
    "ゲゲル",
    "グロンギ",
    "グセパ",
    "バグンダダ",
    "ゲリザギバスゲゲル",
    "ザギバスゲゲル",
];

#[rustfmt::skip]
const CONVERSION_TABLE: &[(char, &str)] = &[
    // Seion
    ('あ', "ガ"), ('い', "ギ"), ('う', "グ"), ('え', "ゲ"), ('お', "ゴ"),
    ('か', "バ"), ('き', "ビ"), ('く', "ブ"), ('け', "ベ"), ('こ', "ボ"),
    ('さ', "ガ"), ('し', "ギ"), ('す', "グ"), ('せ', "ゲ"), ('そ', "ゴ"),
    ('た', "ダ"), ('ち', "ヂ"), ('つ', "ヅ"), ('て', "デ"), ('と', "ド"),
    ('な', "バ"), ('に', "ビ"), ('ぬ', "ブ"), ('ね', "ベ"), ('の', "ボ"),
    ('は', "ザ"), ('ひ', "ジ"), ('ふ', "ズ"), ('へ', "ゼ"), ('ほ', "ゾ"),
    ('ま', "ラ"), ('み', "リ"), ('む', "ル"), ('め', "レ"), ('も', "ロ"),
    ('や', "ジャ"), ('ゆ', "ジュ"), ('よ', "ジョ"),
    ('ら', "サ"), ('り', "シ"), ('る', "ス"), ('れ', "セ"), ('ろ', "ソ"),
    ('わ', "パ"), ('を', "ゾ"), ('ん', "ン"),
    // Dakuon and handakuon
    ('が', "ガ"), ('ぎ', "ギ"), ('ぐ', "グ"), ('げ', "ゲ"), ('ご', "ゴ"),
    ('ざ', "ザ"), ('じ', "ジ"), ('ず', "ズ"), ('ぜ', "ゼ"), ('ぞ', "ゾ"),
    ('だ', "ザ"), ('ぢ', "ジ"), ('づ', "ズ"), ('で', "ゼ"), ('ど', "ゾ"),
    ('ば', "ダ"), ('び', "ヂ"), ('ぶ', "ヅ"), ('べ', "デ"), ('ぼ', "ド"),
    ('ぱ', "マ"), ('ぴ', "ミ"), ('ぷ', "ム"), ('ぺ', "メ"), ('ぽ', "モ"),
    // Small kana
    ('ぁ', "ァ"), ('ぃ', "ィ"), ('ぅ', "ゥ"), ('ぇ', "ェ"), ('ぉ', "ォ"),
    ('ゃ', "ャ"), ('ゅ', "ュ"), ('ょ', "ョ"),
    ('っ', "ッ"),
    // Katakana
    ('ア', "ガ"), ('イ', "ギ"), ('ウ', "グ"), ('エ', "ゲ"), ('オ', "ゴ"),
    ('カ', "バ"), ('キ', "ビ"), ('ク', "ブ"), ('ケ', "ベ"), ('コ', "ボ"),
    ('サ', "ガ"), ('シ', "ギ"), ('ス', "グ"), ('セ', "ゲ"), ('ソ', "ゴ"),
    ('タ', "ダ"), ('チ', "ヂ"), ('ツ', "ヅ"), ('テ', "デ"), ('ト', "ド"),
    ('ナ', "バ"), ('ニ', "ビ"), ('ヌ', "ブ"), ('ネ', "ベ"), ('ノ', "ボ"),
    ('ハ', "ザ"), ('ヒ', "ジ"), ('フ', "ズ"), ('ヘ', "ゼ"), ('ホ', "ゾ"),
    ('マ', "ラ"), ('ミ', "リ"), ('ム', "ル"), ('メ', "レ"), ('モ', "ロ"),
    ('ヤ', "ジャ"), ('ユ', "ジュ"), ('ヨ', "ジョ"),
    ('ラ', "サ"), ('リ', "シ"), ('ル', "ス"), ('レ', "セ"), ('ロ', "ソ"),
    ('ワ', "パ"), ('ヲ', "ゾ"), ('ン', "ン"),
    ('ガ', "ガ"), ('ギ', "ギ"), ('グ', "グ"), ('ゲ', "ゲ"), ('ゴ', "ゴ"),
    ('ザ', "ザ"), ('ジ', "ジ"), ('ズ', "ズ"), ('ゼ', "ゼ"), ('ゾ', "ゾ"),
    ('ダ', "ザ"), ('ヂ', "ジ"), ('ヅ', "ズ"), ('デ', "ゼ"), ('ド', "ゾ"),
    ('バ', "ダ"), ('ビ', "ヂ"), ('ブ', "ヅ"), ('ベ', "デ"), ('ボ', "ド"),
    ('パ', "マ"), ('ピ', "ミ"), ('プ', "ム"), ('ペ', "メ"), ('ポ', "モ"),
];

static CONVERSION: LazyLock<FxHashMap<char, &'static str>> =
    LazyLock::new(|| CONVERSION_TABLE.iter().copied().collect());

static NOUNS_LONGEST_FIRST: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut nouns = PROPER_NOUNS.to_vec();
    nouns.sort_by_key(|noun| std::cmp::Reverse(noun.chars().count()));
    nouns
});

/// Rewrite Japanese text into Grongigo. Proper nouns and characters with no
/// mapping are copied unchanged.
pub fn convert(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if let Some(noun) = NOUNS_LONGEST_FIRST.iter().find(|noun| rest.starts_with(**noun)) {
            result.push_str(noun);
            rest = &rest[noun.len()..];
            continue;
        }

        match CONVERSION.get(&c) {
            Some(mapped) => result.push_str(mapped),
            None => result.push(c),
        }
        rest = &rest[c.len_utf8()..];
    }

    result
}

/// Spell a non-negative integer as a numeral word.
///
/// Each nonzero base-9 digit becomes a term: the digit itself in the units
/// place, otherwise a power of nine (`バギン` multiplied by itself) times the
/// digit. Terms are joined with the add morpheme, highest power first.
pub fn number_to_numeral(value: u64) -> String {
    let digit_word = |d: u64| DIGITS[d as usize].0;
    let nine = DIGITS[9].0;

    if value == 0 {
        return digit_word(0).to_string();
    }

    let mut base9 = Vec::new();
    let mut n = value;
    while n > 0 {
        base9.push(n % 9);
        n /= 9;
    }

    let mut terms = Vec::new();
    for (power, &digit) in base9.iter().enumerate().rev() {
        if digit == 0 {
            continue;
        }
        if power == 0 {
            terms.push(digit_word(digit).to_string());
            continue;
        }

        let mut term = nine.to_string();
        for _ in 1..power {
            term.push(NUMERAL_MULTIPLY);
            term.push_str(nine);
        }
        if digit != 1 {
            term.push(NUMERAL_MULTIPLY);
            term.push_str(digit_word(digit));
        }
        terms.push(term);
    }

    terms.join(&NUMERAL_ADD.to_string())
}
