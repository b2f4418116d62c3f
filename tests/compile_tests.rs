// End-to-end tests: Grongigo source in, C source out

use grongigo::{compile, CompileError};
use pretty_assertions::assert_eq;

const PREAMBLE: &str = "#include <stdio.h>\n#include <stdlib.h>\n#include <string.h>\n\n";

fn compile_ok(source: &str) -> String {
    compile(source).expect("Compilation failed")
}

#[test]
fn test_minimal_main() {
    let output = compile_ok("パザ ゲギグウ ゴロ バサ ザジレ ロゾス ゼゼソ ゴパシ");

    let expected = format!("{}int main(void)\n{{\n    return 0;\n}}\n", PREAMBLE);
    assert_eq!(output, expected);
}

#[test]
fn test_hello_world() {
    let source = "\
ゴゴ ゲゲルを はじめる
パザ ゲギグウ ゴロ バサ ザジレ
    ジョウジ（「Hello, World!」）。
    ロゾス ゼゼソ。
ゴパシ
";
    let expected = format!(
        "{}int main(void)\n{{\n    printf(\"Hello, World!\\n\");\n    return 0;\n}}\n",
        PREAMBLE
    );
    assert_eq!(compile_ok(source), expected);
}

#[test]
fn test_if_with_single_return() {
    let output = compile_ok(
        "パザ ゲギグウ ゴロ バサ ザジレ ジョウベン ガ ロゾス ゼゼソ ロゾス パパン ゴパシ",
    );

    let body: Vec<&str> = output.lines().skip(4).collect();
    assert_eq!(
        body,
        vec![
            "int main(void)",
            "{",
            "    if (ga)",
            "        return 0;",
            "    return 1;",
            "}",
        ]
    );
}

#[test]
fn test_terminated_if_keeps_else_branch() {
    let output = compile_ok(
        "パザ ゲギグウ ゴロ バサ ザジレ ジョウベン ガ ロゾス パパン。 ゾバ ロゾス ゼゼソ。 ゴパシ。",
    );

    let body: Vec<&str> = output.lines().skip(4).collect();
    assert_eq!(
        body,
        vec![
            "int main(void)",
            "{",
            "    if (ga)",
            "        return 1;",
            "    else",
            "        return 0;",
            "}",
        ]
    );
}

#[test]
fn test_for_loop_three_clauses() {
    let source = "パザ ゲギグウ ゴロ バサ ザジレ \
        ブシバゲギ ( ゲギグウ i ギセス ゼゼソ 、 i ギョウバシ バギン 、 i ダグダグ ) ザジレ \
        ジョウジ(「%d」、i) \
        ゴパシ \
        ロゾス ゼゼソ \
        ゴパシ";

    let expected = format!(
        "{}int main(void)\n{{\n    for (int i = 0; (i < 9); i++)\n    {{\n        printf(\"%d\\n\", i);\n    }}\n    return 0;\n}}\n",
        PREAMBLE
    );
    assert_eq!(compile_ok(source), expected);
}

#[test]
fn test_while_and_switch() {
    let source = "パザ バサ ゲゲル (ゲギグウ ガ) ザジレ \
        ガギザ (ガ ザギバシ ゼゼソ) ザジレ \
        ゲンダブ (ガ) ザジレ \
        ダガギ パパン： ジョウジ(「one」) ブゲス \
        ビデギ： ガ ギセス ガ ジブ パパン \
        ゴパシ \
        ゴパシ \
        ゴパシ";

    let output = compile_ok(source);
    let body: Vec<&str> = output.lines().skip(4).collect();
    assert_eq!(
        body,
        vec![
            "void gegeru(int ga)",
            "{",
            "    while ((ga > 0))",
            "    {",
            "        switch (ga)",
            "        {",
            "        case 1:",
            "            printf(\"one\\n\");",
            "            break;",
            "        default:",
            "            ga = (ga - 1);",
            "        }",
            "    }",
            "}",
        ]
    );
}

#[test]
fn test_globals_and_functions_separated() {
    let source = "ゲギグウ ガ ギセス バギングバギンドパパン \
        パザ ゲギグウ ゴロ バサ ザジレ ロゾス ガ ゴパシ";

    let output = compile_ok(source);
    let body: Vec<&str> = output.lines().skip(4).collect();
    assert_eq!(
        body,
        vec![
            "int ga = 82;",
            "",
            "int main(void)",
            "{",
            "    return ga;",
            "}",
        ]
    );
}

#[test]
fn test_parse_error_is_reported() {
    let err = compile("パザ ゲギグウ ゴロ バサ ザジレ ロゾス").unwrap_err();
    let CompileError::Parse(parse_error) = &err;

    assert_eq!(err.to_string(), parse_error.to_string());
    assert!(err.to_string().starts_with("Parse error at line 1, column "));
}
