use crate::token::{Category, Terminator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all defects that can be found in a single line.
///
/// Errors are line-local: the first defect found ends the checks for that line
/// and never affects any other line.
pub enum CheckError {
    /// The statement does not end with the terminator its kind requires.
    TerminatorMismatch {
        /// The terminator that was required.
        expected: Terminator,
    },
    /// A declaration does not consist of keyword, name and terminator.
    DeclarationArity {
        /// The number of tokens found, terminator included.
        count: usize,
    },
    /// The left-hand side of an assignment is not a variable.
    AssignmentFirstToken {
        /// The category of the first token.
        found: Category,
    },
    /// A conditional or loop has no comparison keyword.
    NoEquator,
    /// A conditional or loop has more than one comparison keyword.
    TooManyEquators {
        /// The number of comparison keywords found.
        count: usize,
    },
    /// A subexpression opens and closes a different number of groups.
    ParenCountMismatch {
        /// The number of `OPENPAREN` tokens.
        open:  usize,
        /// The number of `CLOSEPAREN` tokens.
        close: usize,
    },
    /// A subexpression is empty, ends on an operator or open group, or has two
    /// adjacent tokens that cannot follow each other.
    SubexpressionSyntax,
    /// A token matched none of the classification rules.
    UnknownToken {
        /// The offending token.
        token:  String,
        /// 1-based character column of the token in the line.
        column: usize,
    },
    /// The line is not a declaration, assignment, conditional or loop.
    UnrecognizedStatement,
}

impl CheckError {
    /// Renders the diagnostic fields of the error for logs.
    ///
    /// # Examples
    /// ```
    /// use linecheck::error::CheckError;
    ///
    /// let err = CheckError::ParenCountMismatch { open: 2, close: 1 };
    /// assert_eq!(err.detail(), "2 OPENPAREN against 1 CLOSEPAREN");
    /// ```
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::TerminatorMismatch { expected } => format!("expected trailing '{expected}'"),
            Self::DeclarationArity { count } => format!("expected 3 tokens, found {count}"),
            Self::AssignmentFirstToken { found } => format!("assignment target is {found}"),
            Self::NoEquator => "no comparison keyword".to_string(),
            Self::TooManyEquators { count } => format!("{count} comparison keywords"),
            Self::ParenCountMismatch { open, close } => {
                format!("{open} OPENPAREN against {close} CLOSEPAREN")
            },
            Self::SubexpressionSyntax => "malformed subexpression".to_string(),
            Self::UnknownToken { token, column } => format!("'{token}' at column {column}"),
            Self::UnrecognizedStatement => "no statement rule applies".to_string(),
        }
    }
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TerminatorMismatch { expected: Terminator::Semicolon } => {
                write!(f, "No end of line")
            },

            Self::TerminatorMismatch { expected: Terminator::Colon } => {
                write!(f, "Colon must end Conditional or Loop")
            },

            Self::DeclarationArity { .. } => write!(f, "Invalid Type Declaration"),

            Self::AssignmentFirstToken { .. } => write!(f, "First Token Must be Variable"),

            Self::NoEquator => write!(f, "No Equators"),

            Self::TooManyEquators { .. } => write!(f, "Too Many Equators"),

            Self::ParenCountMismatch { .. } => write!(f, "Paren Count Mismatch"),

            Self::SubexpressionSyntax => write!(f, "Subexpression Syntax Error"),

            Self::UnknownToken { .. } => write!(f, "Unknown Token"),

            Self::UnrecognizedStatement => write!(f, "Unrecognized Statement"),
        }
    }
}

impl std::error::Error for CheckError {}
