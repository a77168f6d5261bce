use crate::{checker::validator::CheckResult, error::CheckError, token::Category};

/// Validates an arithmetic subexpression.
///
/// A subexpression is the operand part of an assignment, or one side of the
/// comparison in a conditional or loop, given as token categories. It is
/// accepted when all of these hold:
///
/// 1. It is not empty.
/// 2. It has as many `OPENPAREN` as `CLOSEPAREN` tokens. Only the counts are
///    compared; crossed groups such as `CLOSEPAREN x OPENPAREN` still balance.
/// 3. It does not end on an operator or an `OPENPAREN`.
/// 4. Every token allows its successor (see [`may_follow`]). The final token
///    is governed by rule 3 alone and is never checked as a successor.
///
/// Checks run in that order and the first failure is returned.
///
/// # Errors
/// - `ParenCountMismatch` if the group markers do not balance.
/// - `SubexpressionSyntax` for an empty slice, a bad final token or a
///   forbidden neighbour.
///
/// # Examples
/// ```
/// use linecheck::{
///     checker::validator::subexpression::validate_subexpression,
///     error::CheckError,
///     token::Category::{CloseParen, Number, OpenParen, Operator, Variable},
/// };
///
/// assert!(validate_subexpression(&[OpenParen, Number, Operator, Variable, CloseParen]).is_ok());
/// assert_eq!(validate_subexpression(&[OpenParen, Number]),
///            Err(CheckError::ParenCountMismatch { open: 1, close: 0 }));
/// assert_eq!(validate_subexpression(&[Number, Operator]),
///            Err(CheckError::SubexpressionSyntax));
/// ```
pub fn validate_subexpression(categories: &[Category]) -> CheckResult<()> {
    let open = count(categories, Category::OpenParen);
    let close = count(categories, Category::CloseParen);
    if open != close {
        return Err(CheckError::ParenCountMismatch { open, close });
    }

    let Some((&last, leading)) = categories.split_last() else {
        return Err(CheckError::SubexpressionSyntax);
    };
    if matches!(last, Category::Operator | Category::OpenParen) {
        return Err(CheckError::SubexpressionSyntax);
    }

    if leading.windows(2).all(|pair| may_follow(pair[0], pair[1])) {
        Ok(())
    } else {
        Err(CheckError::SubexpressionSyntax)
    }
}

/// Whether `next` may directly follow `current` inside a subexpression.
///
/// Only grouping markers, numbers and operators constrain their successor.
/// Variables, and anything else, may be followed by any token.
#[must_use]
pub const fn may_follow(current: Category, next: Category) -> bool {
    match current {
        Category::OpenParen => matches!(next, Category::Number | Category::Variable),
        Category::CloseParen => matches!(next, Category::Operator | Category::Terminator(_)),
        Category::Number => {
            matches!(next, Category::Operator | Category::CloseParen | Category::Terminator(_))
        },
        Category::Operator => {
            matches!(next, Category::Number | Category::Variable | Category::OpenParen)
        },
        _ => true,
    }
}

fn count(categories: &[Category], wanted: Category) -> usize {
    categories.iter().filter(|&&category| category == wanted).count()
}
