use crate::error::CheckError;

/// Statement-level rules.
///
/// Decides what kind of statement a line is, checks its terminator and
/// applies the declaration, assignment, conditional and loop rules.
pub mod statement;

/// Subexpression rules.
///
/// Checks group balance, the final token and the allowed neighbours of every
/// token in an arithmetic operand.
pub mod subexpression;

/// The result of checking a statement or one of its subexpressions.
pub type CheckResult<T> = Result<T, CheckError>;
