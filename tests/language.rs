use std::fs::{self};

use bodmas::{
    check::{CASES, CheckCase, run_checks},
    error::{ErrorCategory, ParseError, render},
    evaluate,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_bodmas_blocks(&content).into_iter().enumerate() {
            for line in code.lines().filter(|l| !l.trim().is_empty()) {
                count += 1;
                if let Err(e) = evaluate(line) {
                    panic!("Example {} in {:?} failed:\n{}\nError: {:?}", i + 1, path, line, e);
                }
            }
        }
    }

    assert!(count > 0, "No bodmas examples found in book/src");
}

fn extract_bodmas_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```bodmas") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "{src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, expected: &ParseError) {
    match evaluate(src) {
        Ok(value) => panic!("{src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "wrong error for {src:?}"),
    }
}

#[test]
fn precedence_and_parentheses() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("10 - 4 / 2", 8.0);
    assert_value("2 + 3 * (4 - 1)", 11.0);
    assert_value("2 * (3 + (4 - 1) * 2)", 18.0);
    assert_value("((7))", 7.0);
}

#[test]
fn unary_signs_bind_tightest() {
    assert_value("-5 + 3 * 2", 1.0);
    assert_value("(-5 + 3) * 2", -4.0);
    assert_value("--5", 5.0);
    assert_value("-+-5", 5.0);
    assert_value("+5", 5.0);
    assert_value("2 * -3", -6.0);
    assert_value("2 - -3", 5.0);
    assert_value("-(2 + 3)", -5.0);
    assert_value("- - - 1", -1.0);
}

#[test]
fn same_level_operators_are_left_associative() {
    assert_value("8 - 3 - 2", 3.0);
    assert_value("20 / 4 / 2", 2.5);
    assert_value("1 - 2 + 3", 2.0);
    assert_value("12 / 3 * 2", 8.0);
}

#[test]
fn decimals() {
    assert_value("2.5 * 4 + 1.5", 11.5);
    assert_value("0.1 + 0.2", 0.1 + 0.2);
    assert_value("007.250", 7.25);
}

#[test]
fn whitespace_is_ignored_everywhere() {
    assert_value("2+3*4", 14.0);
    assert_value("  2 +\t3 ", 5.0);
    assert_value("\t(\n1 + 1\r\n) * 2\n", 4.0);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("1 / 0", &ParseError::DivisionByZero { offset: 2 });
    assert_failure("1 / (2 - 2)", &ParseError::DivisionByZero { offset: 2 });
    assert_failure("4 + 1 / -0", &ParseError::DivisionByZero { offset: 6 });
    assert_failure("0 / 0", &ParseError::DivisionByZero { offset: 2 });
}

#[test]
fn unclosed_parenthesis_is_error() {
    assert_failure("(2 + 3", &ParseError::UnclosedParenthesis { offset: 0 });
    assert_failure("1 + ((2 + 3)", &ParseError::UnclosedParenthesis { offset: 4 });
}

#[test]
fn unexpected_character_is_error() {
    assert_failure("2 + )",
                   &ParseError::UnexpectedCharacter { character: ')',
                                                      offset:    4, });
    assert_failure("2 * * 3",
                   &ParseError::UnexpectedCharacter { character: '*',
                                                      offset:    4, });
    assert_failure("2 $ 3",
                   &ParseError::UnexpectedCharacter { character: '$',
                                                      offset:    2, });
    assert_failure("(2 3)",
                   &ParseError::UnexpectedCharacter { character: '3',
                                                      offset:    3, });
    assert_failure("()",
                   &ParseError::UnexpectedCharacter { character: ')',
                                                      offset:    1, });
}

#[test]
fn malformed_numbers_are_errors() {
    assert_failure(".5",
                   &ParseError::UnexpectedCharacter { character: '.',
                                                      offset:    0, });
    assert_failure("5.",
                   &ParseError::TrailingInput { offset: 1 });
    assert_failure("5. + 1",
                   &ParseError::TrailingInput { offset: 1 });
    assert_failure("1 + .",
                   &ParseError::UnexpectedCharacter { character: '.',
                                                      offset:    4, });
}

#[test]
fn oversized_literal_is_error() {
    let huge = "9".repeat(400);
    assert_failure(&huge, &ParseError::LiteralTooLarge { offset: 0 });
}

#[test]
fn arithmetic_overflow_is_error() {
    let big = "9".repeat(300);
    assert_failure(&format!("{big} * {big}"), &ParseError::Overflow { offset: 301 });
    assert_failure(&format!("{big} * {big} - {big} * {big}"),
                   &ParseError::Overflow { offset: 301 });
    assert_failure(&format!("2 * ({big} * {big})"), &ParseError::Overflow { offset: 306 });

    let largest = "9".repeat(308);
    assert_value(&format!("{largest} - {largest}"), 0.0);
    assert_failure(&format!("{largest} + {largest}"), &ParseError::Overflow { offset: 309 });

    let src = format!("{big} * {big}");
    assert_eq!(evaluate(&src), evaluate(&src));
    assert_eq!(evaluate(&src).unwrap_err().category(), ErrorCategory::Semantic);
}

#[test]
fn trailing_input_is_error() {
    assert_failure("2 3", &ParseError::TrailingInput { offset: 2 });
    assert_failure("(1 + 2) (3)", &ParseError::TrailingInput { offset: 8 });
    assert_failure("2 + 3)", &ParseError::TrailingInput { offset: 5 });
}

#[test]
fn empty_and_truncated_input() {
    assert_failure("", &ParseError::EmptyExpression);
    assert_failure("   \t", &ParseError::EmptyExpression);
    assert_failure("2 +", &ParseError::UnexpectedEndOfInput { offset: 3 });
    assert_failure("-", &ParseError::UnexpectedEndOfInput { offset: 1 });
    assert_failure("(", &ParseError::UnexpectedEndOfInput { offset: 1 });
}

#[test]
fn deep_nesting_is_bounded() {
    let depth = 100;
    let nested = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_value(&nested, 1.0);

    let hostile = "(".repeat(100_000);
    assert!(matches!(evaluate(&hostile), Err(ParseError::NestingTooDeep { .. })));

    let signs = format!("{}1", "-".repeat(100_000));
    assert!(matches!(evaluate(&signs), Err(ParseError::NestingTooDeep { .. })));
}

#[test]
fn error_categories() {
    assert_eq!(evaluate("1 / 0").unwrap_err().category(), ErrorCategory::Semantic);
    assert_eq!(evaluate("").unwrap_err().category(), ErrorCategory::Semantic);
    assert_eq!(evaluate("2 3").unwrap_err().category(), ErrorCategory::Syntax);
    assert_eq!(evaluate("(1").unwrap_err().category(), ErrorCategory::Syntax);
    assert_eq!(evaluate("2 + )").unwrap_err().category(), ErrorCategory::Syntax);
    assert_eq!(ParseError::NestingTooDeep { offset: 0 }.category(), ErrorCategory::Syntax);
    assert_eq!(ParseError::Overflow { offset: 0 }.category(), ErrorCategory::Semantic);
}

#[test]
fn reevaluation_is_stable() {
    for src in ["2 + 3 * 4", "1 / 0", "(2 + 3", "2 3", ""] {
        assert_eq!(evaluate(src), evaluate(src));
    }
}

#[test]
fn rendered_errors_point_at_the_offset() {
    let src = "10 / (5 - 5)";
    let err = evaluate(src).unwrap_err();
    assert_eq!(render(&err, src),
               "Error at offset 3: Division by zero.\n  10 / (5 - 5)\n     ^");

    let src = "(1 + 2";
    let err = evaluate(src).unwrap_err();
    assert_eq!(render(&err, src),
               "Error at offset 0: Parenthesis opened here is never closed.\n  (1 + 2\n  ^");

    assert_eq!(render(&ParseError::EmptyExpression, ""), "Error: Empty expression.");
}

#[test]
fn builtin_checks_pass() {
    let report = run_checks(CASES);
    assert_eq!(report.total(), 11);
    assert_eq!(report.passed(), 11);
    assert!(report.outcomes[0].to_string().starts_with("✓ 2 + 3 * 4 = 14.00"));
}

#[test]
fn failing_checks_are_reported() {
    let cases = [CheckCase { expression: "1 + 1",
                             expected:   3.0, },
                 CheckCase { expression: "1 / 0",
                             expected:   0.0, }];
    let report = run_checks(&cases);

    assert_eq!(report.passed(), 0);
    assert!(!report.all_passed());
    assert_eq!(report.outcomes[0].to_string(), "✗ 1 + 1 = 2.00 (expected 3.00)");
    assert_eq!(report.outcomes[1].to_string(),
               "✗ 1 / 0: Error at offset 2: Division by zero. (expected 0.00)");
}
