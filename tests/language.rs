use std::fs::{self};

use linecheck::{
    check_source,
    checker::driver::{LineReport, Verdict},
    error::CheckError,
    token::{Category, StatementKind, Terminator},
};
use walkdir::WalkDir;

#[test]
fn fixture_sources_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/fixtures").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "src"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read {expected_path:?}: {e}"));

        let actual: Vec<String> = check_source(&source).iter().map(ToString::to_string).collect();
        let expected: Vec<&str> = expected.lines().collect();

        count += 1;
        assert_eq!(actual, expected, "output of {path:?} differs");
    }

    assert!(count > 0, "No fixture sources found in tests/fixtures");
}

fn check(src: &str) -> LineReport {
    LineReport::check(1, src)
}

fn assert_accept(src: &str, kind: StatementKind) {
    let report = check(src);
    assert_eq!(report.verdict,
               Verdict::Accepted(kind),
               "Line was expected to be accepted: {src}");
    assert_eq!(report.to_string(), src);
}

fn assert_reject(src: &str, expected: &CheckError) {
    match check(src).verdict {
        Verdict::Rejected(err) => assert_eq!(&err, expected, "Wrong defect for: {src}"),
        other => panic!("Line was expected to be rejected, got {other:?}: {src}"),
    }
}

#[test]
fn declarations() {
    assert_accept("small x;", StatementKind::Declaration);
    assert_accept("tiny counter ;", StatementKind::Declaration);
    assert_accept("large a-b_9;", StatementKind::Declaration);
    assert_reject("small x y;", &CheckError::DeclarationArity { count: 4 });
    assert_reject("medium;", &CheckError::DeclarationArity { count: 2 });
    assert_reject("small x", &CheckError::TerminatorMismatch { expected: Terminator::Semicolon });
}

#[test]
fn declaration_keeps_leading_digit_leniency() {
    assert_accept("small 5x;", StatementKind::Declaration);
}

#[test]
fn assignments() {
    assert_accept("x = 5;", StatementKind::Assignment);
    assert_accept("x = y;", StatementKind::Assignment);
    assert_accept("x = 5 ADD y MUL 2;", StatementKind::Assignment);
    assert_accept("total = a MODULUS 3 ;", StatementKind::Assignment);
    assert_accept("x = OPENPAREN 17 MUL 7 ADD 5 CLOSEPAREN ;", StatementKind::Assignment);
    assert_accept("x = 2 MUL OPENPAREN a SUB OPENPAREN b DIV 4 CLOSEPAREN CLOSEPAREN;",
                  StatementKind::Assignment);
}

#[test]
fn assignment_defects() {
    assert_reject("5 = x;",
                  &CheckError::AssignmentFirstToken { found: Category::Number });
    assert_reject("small = 5;", &CheckError::DeclarationArity { count: 4 });
    assert_reject("x = OPENPAREN 5 ADD 3 ;",
                  &CheckError::ParenCountMismatch { open: 1, close: 0 });
    assert_reject("x = 5 ADD ;", &CheckError::SubexpressionSyntax);
    assert_reject("x = ;", &CheckError::SubexpressionSyntax);
    assert_reject("x = ADD ADD 5 ;", &CheckError::SubexpressionSyntax);
    assert_reject("x = OPENPAREN ADD 5 CLOSEPAREN 1;", &CheckError::SubexpressionSyntax);
    assert_reject("x = 5 ADD 3", &CheckError::TerminatorMismatch { expected: Terminator::Semicolon });
    assert_reject("x = 5 ADD 3 :", &CheckError::TerminatorMismatch { expected: Terminator::Semicolon });
}

#[test]
fn conditionals_and_loops() {
    assert_accept("COND A EQ 5 :", StatementKind::Conditional);
    assert_accept("COND A NEQU OPENPAREN b ADD 1 CLOSEPAREN:", StatementKind::Conditional);
    assert_accept("REPEAT i LST 10 :", StatementKind::Loop);
    assert_accept("REPEAT OPENPAREN i MUL 2 CLOSEPAREN GRTE limit:", StatementKind::Loop);
}

#[test]
fn conditional_and_loop_defects() {
    assert_reject("REPEAT A EQ 5 ;", &CheckError::TerminatorMismatch { expected: Terminator::Colon });
    assert_reject("COND A EQ 5", &CheckError::TerminatorMismatch { expected: Terminator::Colon });
    assert_reject("COND A B :", &CheckError::NoEquator);
    assert_reject("REPEAT :", &CheckError::NoEquator);
    assert_reject("COND A EQ B EQ 5 :", &CheckError::TooManyEquators { count: 2 });
    assert_reject("COND EQ 5 :", &CheckError::SubexpressionSyntax);
    assert_reject("COND a EQ 5 ADD :", &CheckError::SubexpressionSyntax);
    assert_reject("REPEAT OPENPAREN a LST 5 :", &CheckError::ParenCountMismatch { open: 1, close: 0 });
}

#[test]
fn left_operand_is_reported_before_right() {
    assert_reject("COND OPENPAREN a EQ 5 ADD :", &CheckError::ParenCountMismatch { open: 1, close: 0 });
}

#[test]
fn too_many_equators_short_circuits_operand_checks() {
    // The operands are malformed too, but only the equator count is reported.
    assert_reject("COND OPENPAREN EQ ADD GRT :", &CheckError::TooManyEquators { count: 2 });
}

#[test]
fn unknown_tokens() {
    assert_reject("x = 5 ADD y$;", &CheckError::UnknownToken { token: "y$".to_string(),
                                                                column: 11 });
    assert_reject("x = verylongname;", &CheckError::UnknownToken { token: "verylongname".to_string(),
                                                                    column: 5 });
}

#[test]
fn terminator_is_checked_before_unknown_tokens() {
    assert_reject("x = ## ", &CheckError::TerminatorMismatch { expected: Terminator::Semicolon });
}

#[test]
fn unrecognized_statements() {
    assert_reject("x;", &CheckError::UnrecognizedStatement);
    assert_reject("x 5;", &CheckError::UnrecognizedStatement);
    assert_reject(";", &CheckError::UnrecognizedStatement);
    assert_reject("ADD = 5;", &CheckError::AssignmentFirstToken { found: Category::Operator });
}

#[test]
fn single_word_block_keyword_needs_a_colon() {
    assert_reject("COND;", &CheckError::TerminatorMismatch { expected: Terminator::Colon });
    assert_reject("REPEAT", &CheckError::TerminatorMismatch { expected: Terminator::Colon });
    assert_reject("COND:", &CheckError::NoEquator);
}

#[test]
fn block_keyword_wins_over_assignment() {
    assert_reject("COND = 5 :", &CheckError::NoEquator);
}

#[test]
fn rejected_line_does_not_affect_next_line() {
    let reports = check_source("x = OPENPAREN 1;\nx = 1;\n\nCOND x EQ 1 EQ 2 :\nREPEAT x GRT 0 :");
    let verdicts: Vec<_> = reports.into_iter().map(|report| report.verdict).collect();

    assert_eq!(verdicts,
               vec![Verdict::Rejected(CheckError::ParenCountMismatch { open: 1, close: 0 }),
                    Verdict::Accepted(StatementKind::Assignment),
                    Verdict::Blank,
                    Verdict::Rejected(CheckError::TooManyEquators { count: 2 }),
                    Verdict::Accepted(StatementKind::Loop)]);
}

#[test]
fn rejected_lines_are_prefixed_with_the_message() {
    let output: Vec<String> = check_source("small x y;\nREPEAT A EQ 5 ;\nCOND A B :\nx = 1 ;;")
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(output,
               vec!["Error: Invalid Type Declaration in line small x y;",
                    "Error: Colon must end Conditional or Loop in line REPEAT A EQ 5 ;",
                    "Error: No Equators in line COND A B :",
                    "x = 1 ;;"]);
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.src").unwrap();
    assert!(check_source(&contents).iter().all(|report| !report.is_rejected()));
}
