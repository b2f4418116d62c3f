// Integration tests for tokenizing Grongigo source

use grongigo::parser::lexer::{TokenKind, TokenValue};
use grongigo::tokenize;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|t| t.kind).collect()
}

fn single_number(source: &str) -> TokenValue {
    let tokens = tokenize(source);
    assert_eq!(tokens.len(), 2, "expected one token plus eof: {:?}", tokens);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    tokens[0].value.clone()
}

#[test]
fn test_single_digit_numerals() {
    let digits = [
        "ゼゼソ", "パパン", "ドググ", "グシギ", "ズゴゴ", "ズガギ", "ギブグ", "ゲズン", "ゲギド",
    ];
    for (expected, word) in digits.iter().enumerate() {
        assert_eq!(single_number(word), TokenValue::Int(expected as i64), "{}", word);
    }
    assert_eq!(single_number("バギン"), TokenValue::Int(9));
}

#[test]
fn test_compound_numerals() {
    assert_eq!(single_number("バギンドパパン"), TokenValue::Int(10));
    assert_eq!(single_number("バギングバギンドパパン"), TokenValue::Int(82));
    assert_eq!(single_number("ドグググバギンドズガギ"), TokenValue::Int(23));
}

#[test]
fn test_add_only_numerals_are_zero() {
    assert_eq!(single_number("ド"), TokenValue::Int(0));
    assert_eq!(single_number("ドド"), TokenValue::Int(0));
    assert_eq!(kinds("グ"), vec![TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn test_decimal_numbers() {
    assert_eq!(single_number("42"), TokenValue::Int(42));
    assert_eq!(single_number("1.5"), TokenValue::Float(1.5));
    assert_eq!(
        single_number("99999999999999999999"),
        TokenValue::Float(1e20)
    );
}

#[test]
fn test_keyword_classes() {
    assert_eq!(
        kinds("ゲギグウ ジョウベン ゴロ ダグ ガ"),
        vec![
            TokenKind::TypeKeyword,
            TokenKind::ControlKeyword,
            TokenKind::OtherKeyword,
            TokenKind::Operator,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );

    let tokens = tokenize("ゲギグウ ジョウベン ゴロ ダグ");
    let values: Vec<Option<&str>> = tokens.iter().map(|t| t.text()).collect();
    assert_eq!(
        values,
        vec![Some("int"), Some("if"), Some("main"), Some("+"), None]
    );
}

#[test]
fn test_function_marker_keeps_raw_word() {
    let tokens = tokenize("パザ");
    assert_eq!(tokens[0].kind, TokenKind::OtherKeyword);
    assert_eq!(tokens[0].text(), Some("パザ"));
}

#[test]
fn test_bracket_prefix_rewinds() {
    let tokens = tokenize("ザジレジョヂザギガ");
    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].text(), Some("ガ"));
    assert_eq!((tokens[1].line, tokens[1].column), (1, 9));

    assert_eq!(
        kinds("ザジレゴパシ"),
        vec![TokenKind::OpenBrace, TokenKind::CloseBrace, TokenKind::Eof]
    );
}

#[test]
fn test_punctuation_aliases() {
    assert_eq!(
        kinds("（、。：）"),
        vec![
            TokenKind::OpenParen,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::CloseParen,
            TokenKind::Eof,
        ]
    );
    assert_eq!(kinds("(,;:)"), kinds("（、。：）"));
}

#[test]
fn test_literals_are_raw() {
    let tokens = tokenize("「ゲゲル\\n」『ガ』");
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].text(), Some("ゲゲル\\n"));
    assert_eq!(tokens[1].kind, TokenKind::CharLiteral);
    assert_eq!(tokens[1].text(), Some("ガ"));
}

#[test]
fn test_comments_are_skipped() {
    let source = "ガ ゴゴ ダグ パパン\nゴビ ジブ\nジブ ビゴ ダ";
    let tokens = tokenize(source);
    let texts: Vec<Option<&str>> = tokens.iter().map(|t| t.text()).collect();
    assert_eq!(texts, vec![Some("ガ"), Some("ダ"), None]);
    assert_eq!((tokens[1].line, tokens[1].column), (3, 7));
}

#[test]
fn test_unterminated_block_comment_runs_to_end() {
    assert_eq!(kinds("ガ ゴビ ダグ"), vec![TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn test_positions() {
    let tokens = tokenize("ガ\n  ダグ");
    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    assert_eq!((tokens[1].line, tokens[1].column), (2, 3));
}

#[test]
fn test_unknown_characters_do_not_stop_the_lexer() {
    assert_eq!(
        kinds("ガ ＠ ダ"),
        vec![
            TokenKind::Identifier,
            TokenKind::Unknown,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}
