//! # linecheck
//!
//! linecheck is a static syntax checker for a small line-oriented scripting
//! notation. Every line is one statement: a size declaration, an assignment, a
//! conditional or a loop. Each line is split into tokens, every token is
//! classified, and the resulting sequence is checked against the grammar. No
//! statement is ever executed.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::checker::driver::LineReport;

/// Runs source lines through the whole checking pipeline.
///
/// This module holds the classifier, the lexer, the statement and
/// subexpression validators, and the driver that ties them together over a
/// stream of lines.
///
/// # Responsibilities
/// - Splits and classifies each line.
/// - Validates statements and their subexpressions.
/// - Reports a verdict per line without ever stopping early.
pub mod checker;
/// Provides the error type for malformed lines.
///
/// Every defect the checker can find in a line is a variant of `CheckError`.
/// Errors never cross line boundaries.
///
/// # Responsibilities
/// - Defines one variant per kind of structural defect.
/// - Carries counts, categories and positions for diagnostics.
/// - Renders the fixed message used in the report line.
pub mod error;
/// Defines the tokens and statements the checker works on.
///
/// # Responsibilities
/// - Declares the closed set of token categories and terminators.
/// - Declares classified tokens and statements borrowed from a source line.
/// - Declares the statement kinds an accepted line can have.
pub mod token;

/// Checks every line of an in-memory source.
///
/// Line endings (`\n` or `\r\n`) are removed; each report keeps the rest of
/// its line untouched.
///
/// # Examples
/// ```
/// use linecheck::check_source;
///
/// let source = "small x;\nx = OPENPAREN 17 MUL 7 ADD 5 CLOSEPAREN ;\nCOND A EQ B EQ 5 :";
/// let output: Vec<String> = check_source(source).iter().map(ToString::to_string).collect();
///
/// assert_eq!(output,
///            vec!["small x;",
///                 "x = OPENPAREN 17 MUL 7 ADD 5 CLOSEPAREN ;",
///                 "Error: Too Many Equators in line COND A EQ B EQ 5 :"]);
/// ```
#[must_use]
pub fn check_source(source: &str) -> Vec<LineReport> {
    source.lines()
          .enumerate()
          .map(|(index, text)| LineReport::check(index + 1, text))
          .collect()
}
