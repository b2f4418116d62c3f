// Integration tests for C emission

use grongigo::codegen::names::sanitize_name;
use grongigo::codegen::CodeGenerator;
use grongigo::parser::ast::{Expr, SourceLocation};
use grongigo::{compile, parse, tokenize};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const BINARY_OPERATORS: &[(&str, &str)] = &[
    ("ダグ", "+"),
    ("ジブ", "-"),
    ("バゲス", "*"),
    ("パス", "/"),
    ("ガラシ", "%"),
    ("ジドギギ", "=="),
    ("ジドギグバギ", "!="),
    ("ギョウバシ", "<"),
    ("ザギバシ", ">"),
    ("ギバ", "<="),
    ("ギジョウ", ">="),
    ("バヅ", "&&"),
    ("ラダパ", "||"),
];

/// Generated text of a single top-level expression statement
fn statement_line(source: &str) -> String {
    let output = compile(source).expect("Compilation failed");
    output
        .lines()
        .find(|line| !line.is_empty() && !line.starts_with("#include"))
        .unwrap_or_default()
        .to_string()
}

fn print_literal(format: &str) -> String {
    let generator = CodeGenerator::new();
    let loc = SourceLocation::default();
    let call = Expr::Call {
        callee: Box::new(Expr::Identifier("printf".to_string(), loc)),
        args: vec![Expr::StringLiteral(format.to_string(), loc)],
        location: loc,
    };
    generator.generate_expr(&call)
}

proptest! {
    #[test]
    fn test_binary_expression_parenthesized_once(
        left in "[a-z][a-z0-9_]{0,6}",
        right in "[a-z][a-z0-9_]{0,6}",
        index in 0..BINARY_OPERATORS.len(),
    ) {
        let (word, op) = BINARY_OPERATORS[index];
        let line = statement_line(&format!("{} {} {}", left, word, right));
        prop_assert_eq!(line, format!("({} {} {});", left, op, right));
    }

    #[test]
    fn test_nested_binary_one_layer_per_node(
        a in 0u32..9,
        b in 0u32..9,
        c in 0u32..9,
    ) {
        let line = statement_line(&format!("{} ダグ {} バゲス {}", a, b, c));
        prop_assert_eq!(line, format!("({} + ({} * {}));", a, b, c));
    }

    #[test]
    fn test_sanitize_keeps_c_identifiers(name in "[A-Za-z_][A-Za-z0-9_]{0,12}") {
        prop_assert_eq!(sanitize_name(&name), name);
    }

    #[test]
    fn test_sanitize_is_idempotent(name in "[ァ-ヺー]{1,8}") {
        let once = sanitize_name(&name);
        prop_assert_eq!(sanitize_name(&once), once.clone());
        prop_assert!(once.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
    }
}

#[test]
fn test_print_suffix_added_once() {
    assert_eq!(print_literal("Hello"), "printf(\"Hello\\n\")");
    // A real trailing newline already present
    assert_eq!(print_literal("Hello\n"), "printf(\"Hello\\n\")");
    // Same for the two-character escape written in source
    assert_eq!(print_literal("Hello\\n"), "printf(\"Hello\\\\n\")");
}

#[test]
fn test_print_alias_and_later_arguments() {
    assert_eq!(
        statement_line("ジョウジ (「%d」、 「x」)"),
        "printf(\"%d\\n\", \"x\");"
    );
}

#[test]
fn test_identifiers_transliterated() {
    assert_eq!(statement_line("ゲゲル ギセス パパン"), "gegeru = 1;");
    assert_eq!(statement_line("ジョーカー ギセス パパン"), "jo_ka_ = 1;");
}

#[test]
fn test_escapes() {
    assert_eq!(
        statement_line("ガ ギセス 「say \"hi\"\t」"),
        "ga = \"say \\\"hi\\\"\\t\";"
    );
    assert_eq!(statement_line("ガ ギセス 『'』"), "ga = '\\'';");
}

#[test]
fn test_generator_is_reusable() {
    let program = parse(tokenize("ブゲス")).unwrap();
    let mut generator = CodeGenerator::new();
    let first = generator.generate(&program);
    let second = generator.generate(&program);
    assert_eq!(first, second);
}
