/// Statement check errors.
///
/// Defines every structural defect the checker can report for a line:
/// terminator problems, malformed declarations and assignments, missing or
/// duplicated comparison keywords, unbalanced or malformed subexpressions, and
/// tokens no classification rule accepts.
pub mod check_error;

pub use check_error::CheckError;
