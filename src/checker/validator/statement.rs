use tracing::debug;

use crate::{
    checker::validator::{CheckResult, subexpression::validate_subexpression},
    error::CheckError,
    token::{Category, Statement, StatementKind},
};

/// Number of tokens in a declaration: keyword, name and terminator.
const DECLARATION_LEN: usize = 3;

/// Validates one classified statement.
///
/// The first word decides the kind: a declaration keyword, `COND` or
/// `REPEAT` select their kind directly; otherwise a `=` in second position
/// makes the line an assignment. Checks are applied in this order and the
/// first failure is returned:
///
/// 1. The line ends with `:` for conditionals and loops, `;` otherwise.
/// 2. No token is unknown.
/// 3. The rules of the statement kind hold.
///
/// # Parameters
/// - `statement`: A statement produced by the lexer.
///
/// # Returns
/// The kind of statement the line was accepted as.
///
/// # Errors
/// - `TerminatorMismatch` if the terminator is missing or wrong.
/// - `UnknownToken` for the first token no classification rule accepted.
/// - `DeclarationArity` for declarations that are not exactly `keyword name;`.
/// - `AssignmentFirstToken` if an assignment does not start with a variable.
/// - `NoEquator` or `TooManyEquators` if a conditional or loop does not
///   compare exactly once.
/// - `UnrecognizedStatement` if no statement rule applies.
/// - Any error from [`validate_subexpression`] for the operands.
///
/// # Examples
/// ```
/// use linecheck::{
///     checker::{lexer::tokenize, validator::statement::validate},
///     error::CheckError,
///     token::StatementKind,
/// };
///
/// let statement = tokenize(1, "COND x LST 10 :").unwrap();
/// assert_eq!(validate(&statement), Ok(StatementKind::Conditional));
///
/// let statement = tokenize(2, "small x y;").unwrap();
/// assert_eq!(validate(&statement), Err(CheckError::DeclarationArity { count: 4 }));
/// ```
pub fn validate(statement: &Statement<'_>) -> CheckResult<StatementKind> {
    let head = statement.head;
    let expected = head.expected_terminator();
    if statement.terminator() != Some(expected) {
        return Err(CheckError::TerminatorMismatch { expected });
    }

    if let Some(token) = statement.tokens.iter().find(|token| token.category == Category::UnknownToken) {
        let column = statement.text[..token.span.start].chars().count() + 1;
        return Err(CheckError::UnknownToken { token: token.text.to_string(),
                                              column });
    }

    let categories = statement.categories();
    match head {
        Category::Declaration => validate_declaration(&categories),
        Category::Conditional => validate_guard(&categories).map(|()| StatementKind::Conditional),
        Category::Loop => validate_guard(&categories).map(|()| StatementKind::Loop),
        _ if categories.get(1) == Some(&Category::Assignment) => validate_assignment(&categories),
        _ => {
            debug!(line = statement.line, ?categories, "unrecognized statement");
            Err(CheckError::UnrecognizedStatement)
        },
    }
}

/// `small x;`
fn validate_declaration(categories: &[Category]) -> CheckResult<StatementKind> {
    if categories.len() == DECLARATION_LEN {
        Ok(StatementKind::Declaration)
    } else {
        Err(CheckError::DeclarationArity { count: categories.len() })
    }
}

/// `x = <subexpression> ;`
///
/// The caller guarantees a `=` in second position and a terminator last.
fn validate_assignment(categories: &[Category]) -> CheckResult<StatementKind> {
    match categories {
        [Category::Variable, Category::Assignment, operand @ .., _] => {
            validate_subexpression(operand)?;
            Ok(StatementKind::Assignment)
        },
        [found, ..] => Err(CheckError::AssignmentFirstToken { found: *found }),
        [] => Err(CheckError::UnrecognizedStatement),
    }
}

/// `COND <subexpression> <equator> <subexpression> :`, and the same for
/// `REPEAT`.
///
/// A guard with several comparisons is rejected without looking at its
/// operands.
fn validate_guard(categories: &[Category]) -> CheckResult<()> {
    let body = match categories {
        [_, body @ .., _] => body,
        _ => return Err(CheckError::NoEquator),
    };

    let mut equators = body.iter()
                           .enumerate()
                           .filter(|&(_, &category)| category == Category::Equator)
                           .map(|(index, _)| index);
    let Some(split) = equators.next() else {
        return Err(CheckError::NoEquator);
    };
    let extra = equators.count();
    if extra > 0 {
        return Err(CheckError::TooManyEquators { count: extra + 1 });
    }

    validate_subexpression(&body[..split])?;
    validate_subexpression(&body[split + 1..])
}
