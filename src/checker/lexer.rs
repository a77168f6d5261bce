use std::ops::Range;

use logos::Logos;
use tracing::trace;

use crate::{
    checker::classifier::classify,
    token::{Category, Statement, Token},
};

/// A raw whitespace-delimited word of a source line.
///
/// Words carry no meaning of their own; they are classified after the
/// terminator has been split off the final one.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawWord {
    /// Any run of non-whitespace characters.
    #[regex(r"\S+", allow_greedy = true)]
    Word,
    /// Spaces, tabs and other whitespace.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

/// Splits a line into the byte spans of its words.
///
/// # Examples
/// ```
/// use linecheck::checker::lexer::word_spans;
///
/// assert_eq!(word_spans("  x =\t5;"), vec![2..3, 4..5, 6..8]);
/// assert!(word_spans("   ").is_empty());
/// ```
#[must_use]
pub fn word_spans(text: &str) -> Vec<Range<usize>> {
    RawWord::lexer(text).spanned().map(|(_, span)| span).collect()
}

/// Splits and classifies one source line.
///
/// The category of the first word decides which terminator the line must end
/// with: `:` after `COND` or `REPEAT`, `;` otherwise. Every trailing copy of
/// that character is stripped from the final word, and a terminator marker
/// token is appended after it. A final word that is nothing but terminators
/// yields only the marker. If the line does not end with the expected
/// character, no marker is appended and the final word is classified as it
/// stands.
///
/// # Parameters
/// - `line`: 1-based line number, carried into the statement.
/// - `text`: The raw line, without its line ending.
///
/// # Returns
/// `None` for a blank line, otherwise a statement with at least one token.
///
/// # Examples
/// ```
/// use linecheck::{
///     checker::lexer::tokenize,
///     token::{Category, Terminator},
/// };
///
/// let statement = tokenize(1, "small x;").unwrap();
/// assert_eq!(statement.categories(),
///            vec![Category::Declaration,
///                 Category::Variable,
///                 Category::Terminator(Terminator::Semicolon)]);
///
/// assert!(tokenize(2, "").is_none());
/// ```
#[must_use]
pub fn tokenize(line: usize, text: &str) -> Option<Statement<'_>> {
    let spans = word_spans(text);
    let (last_span, leading) = spans.split_last()?;

    let head = match leading.first() {
        Some(span) => classify(&text[span.clone()]),
        None => classify(text[last_span.clone()].trim_end_matches([';', ':'])),
    };
    let terminator = head.expected_terminator();

    let mut tokens = Vec::with_capacity(spans.len() + 1);
    tokens.extend(leading.iter().map(|span| classified(text, span.clone())));

    let last = &text[last_span.clone()];
    let stripped = last.trim_end_matches(terminator.as_char());
    if !stripped.is_empty() {
        tokens.push(classified(text, last_span.start..last_span.start + stripped.len()));
    }
    if stripped.len() < last.len() {
        tokens.push(Token { text:     &text[last_span.end - 1..last_span.end],
                            category: Category::Terminator(terminator),
                            span:     last_span.end - 1..last_span.end, });
    }

    Some(Statement { line,
                     text,
                     head,
                     tokens })
}

fn classified(text: &str, span: Range<usize>) -> Token<'_> {
    let word = &text[span.clone()];
    let category = classify(word);
    trace!(word, %category, "classified token");

    Token { text: word,
            category,
            span }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Terminator;

    fn categories(text: &str) -> Vec<Category> {
        tokenize(1, text).map(|statement| statement.categories()).unwrap_or_default()
    }

    const SEMI: Category = Category::Terminator(Terminator::Semicolon);
    const COLON: Category = Category::Terminator(Terminator::Colon);

    #[test]
    fn blank_lines_have_no_statement() {
        assert!(tokenize(1, "").is_none());
        assert!(tokenize(1, " \t ").is_none());
    }

    #[test]
    fn attached_terminator_is_split_off() {
        let statement = tokenize(3, "x = 5;").unwrap();
        let texts: Vec<_> = statement.tokens.iter().map(|t| t.text).collect();

        assert_eq!(texts, vec!["x", "=", "5", ";"]);
        assert_eq!(statement.tokens[2].span, 4..5);
        assert_eq!(statement.tokens[3].span, 5..6);
        assert_eq!(statement.line, 3);
    }

    #[test]
    fn detached_terminator_yields_only_the_marker() {
        assert_eq!(categories("x = OPENPAREN 5 CLOSEPAREN ;"),
                   vec![Category::Variable,
                        Category::Assignment,
                        Category::OpenParen,
                        Category::Number,
                        Category::CloseParen,
                        SEMI]);
    }

    #[test]
    fn repeated_terminators_collapse() {
        assert_eq!(categories("x = 5;;;"), vec![Category::Variable, Category::Assignment, Category::Number, SEMI]);
    }

    #[test]
    fn block_openers_expect_a_colon() {
        assert_eq!(categories("COND a EQ 5:"), vec![Category::Conditional,
                                                     Category::Variable,
                                                     Category::Equator,
                                                     Category::Number,
                                                     COLON]);
        assert_eq!(categories("REPEAT a EQ 5 ;"), vec![Category::Loop,
                                                        Category::Variable,
                                                        Category::Equator,
                                                        Category::Number,
                                                        Category::UnknownToken]);
    }

    #[test]
    fn wrong_terminator_is_not_stripped() {
        assert_eq!(categories("x = 5:"), vec![Category::Variable, Category::Assignment, Category::Number]);
        assert_eq!(categories("x = 5"), vec![Category::Variable, Category::Assignment, Category::Number]);
    }

    #[test]
    fn single_word_lines() {
        assert_eq!(categories("COND:"), vec![Category::Conditional, COLON]);
        assert_eq!(categories(";"), vec![SEMI]);
        assert_eq!(categories("x;"), vec![Category::Variable, SEMI]);
    }

    #[test]
    fn single_word_head_ignores_any_terminator() {
        let statement = tokenize(1, "COND;").unwrap();
        assert_eq!(statement.head, Category::Conditional);
        assert_eq!(statement.categories(), vec![Category::UnknownToken]);
        assert_eq!(statement.terminator(), None);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(categories("\t small   x;  "), vec![Category::Declaration, Category::Variable, SEMI]);
    }
}
