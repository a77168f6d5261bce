use crate::token::Category;

/// Variable names must be strictly shorter than this many characters.
pub const MAX_VARIABLE_LEN: usize = 10;

/// Assigns a category to a raw token.
///
/// Rules are checked in priority order and the first match wins:
///
/// 1. `tiny`, `small`, `medium`, `large` are declarations.
/// 2. `LST`, `GRT`, `LSTE`, `GRTE`, `EQ`, `NEQU` are comparisons.
/// 3. `OPENPAREN` and `CLOSEPAREN` are grouping markers.
/// 4. `ADD`, `SUB`, `MUL`, `DIV`, `MODULUS` are arithmetic operators.
/// 5. `COND` opens a conditional, `REPEAT` opens a loop.
/// 6. `=` is an assignment.
/// 7. Anything starting with a digit is a number, even `5x`.
/// 8. Short names made of letters, digits, `_` and `-`, starting with a
///    letter, are variables.
/// 9. Everything else is an unknown token.
///
/// Keywords are case-sensitive.
///
/// # Examples
/// ```
/// use linecheck::{checker::classifier::classify, token::Category};
///
/// assert_eq!(classify("small"), Category::Declaration);
/// assert_eq!(classify("5x"), Category::Number);
/// assert_eq!(classify("add"), Category::Variable);
/// assert_eq!(classify("x+y"), Category::UnknownToken);
/// ```
#[must_use]
pub fn classify(text: &str) -> Category {
    match text {
        "tiny" | "small" | "medium" | "large" => Category::Declaration,
        "LST" | "GRT" | "LSTE" | "GRTE" | "EQ" | "NEQU" => Category::Equator,
        "OPENPAREN" => Category::OpenParen,
        "CLOSEPAREN" => Category::CloseParen,
        "ADD" | "SUB" | "MUL" | "DIV" | "MODULUS" => Category::Operator,
        "COND" => Category::Conditional,
        "REPEAT" => Category::Loop,
        "=" => Category::Assignment,
        _ if starts_with_digit(text) => Category::Number,
        _ if is_variable_name(text) => Category::Variable,
        _ => Category::UnknownToken,
    }
}

/// Only the first character is looked at; the rest of the token may be
/// anything.
fn starts_with_digit(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn is_variable_name(text: &str) -> bool {
    let mut chars = text.chars();

    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    && text.len() < MAX_VARIABLE_LEN
}
