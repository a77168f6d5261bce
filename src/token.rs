use std::{fmt, ops::Range};

/// The character that closes a statement.
///
/// Plain statements end with `;`, conditionals and loops end with `:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminator {
    /// `;`
    Semicolon,
    /// `:`
    Colon,
}

impl Terminator {
    /// Returns the source character of this terminator.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Semicolon => ';',
            Self::Colon => ':',
        }
    }

    /// Returns the terminator as a string slice, as it appears in source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Semicolon => ";",
            Self::Colon => ":",
        }
    }
}

impl fmt::Display for Terminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The syntactic class of a single token.
///
/// Every raw token receives exactly one category. `Terminator` is never
/// produced by the classifier; the lexer appends it as a marker after the
/// final token of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A size declaration keyword: `tiny`, `small`, `medium`, `large`.
    Declaration,
    /// A comparison keyword: `LST`, `GRT`, `LSTE`, `GRTE`, `EQ`, `NEQU`.
    Equator,
    /// `OPENPAREN`
    OpenParen,
    /// `CLOSEPAREN`
    CloseParen,
    /// An arithmetic keyword: `ADD`, `SUB`, `MUL`, `DIV`, `MODULUS`.
    Operator,
    /// `COND`
    Conditional,
    /// `REPEAT`
    Loop,
    /// `=`
    Assignment,
    /// Anything starting with a decimal digit.
    Number,
    /// A short identifier such as `x` or `count_2`.
    Variable,
    /// The statement terminator marker.
    Terminator(Terminator),
    /// A token no rule accepts.
    UnknownToken,
}

impl Category {
    /// Whether a statement starting with this category is a conditional or a
    /// loop.
    #[must_use]
    pub const fn is_block_opener(self) -> bool {
        matches!(self, Self::Conditional | Self::Loop)
    }

    /// The terminator a statement starting with this category must end with.
    #[must_use]
    pub const fn expected_terminator(self) -> Terminator {
        if self.is_block_opener() { Terminator::Colon } else { Terminator::Semicolon }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declaration => f.write_str("Declaration"),
            Self::Equator => f.write_str("Equator"),
            Self::OpenParen => f.write_str("OPENPAREN"),
            Self::CloseParen => f.write_str("CLOSEPAREN"),
            Self::Operator => f.write_str("Operator"),
            Self::Conditional => f.write_str("Conditional"),
            Self::Loop => f.write_str("Loop"),
            Self::Assignment => f.write_str("Assignment"),
            Self::Number => f.write_str("Number"),
            Self::Variable => f.write_str("Variable"),
            Self::Terminator(terminator) => write!(f, "{terminator}"),
            Self::UnknownToken => f.write_str("Unknown Token"),
        }
    }
}

/// A classified token, borrowing its text from the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    /// The raw text of the token, with any terminator stripped.
    pub text:     &'src str,
    /// The category assigned to `text`.
    pub category: Category,
    /// Byte range of `text` within the line.
    pub span:     Range<usize>,
}

/// One non-blank source line, split and classified.
///
/// A `Statement` always holds at least one token; blank lines never become
/// statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement<'src> {
    /// 1-based line number in the source.
    pub line:   usize,
    /// The original line, used verbatim in reports.
    pub text:   &'src str,
    /// Category of the first word, which decides the statement kind and its
    /// terminator. For a one-word line it is classified without any trailing
    /// `;` or `:`, so it can differ from the first token's category.
    pub head:   Category,
    /// Tokens in source order, terminator marker last when present.
    pub tokens: Vec<Token<'src>>,
}

impl Statement<'_> {
    /// The terminator marker closing this statement, if any.
    #[must_use]
    pub fn terminator(&self) -> Option<Terminator> {
        match self.tokens.last() {
            Some(Token { category: Category::Terminator(terminator),
                         .. }) => Some(*terminator),
            _ => None,
        }
    }

    /// The category of every token, in order.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.tokens.iter().map(|token| token.category).collect()
    }
}

/// The grammar rule an accepted statement matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// `small x;`
    Declaration,
    /// `x = 5 ADD y;`
    Assignment,
    /// `COND x LST 5 :`
    Conditional,
    /// `REPEAT x GRT 0 :`
    Loop,
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declaration => f.write_str("declaration"),
            Self::Assignment => f.write_str("assignment"),
            Self::Conditional => f.write_str("conditional"),
            Self::Loop => f.write_str("loop"),
        }
    }
}
