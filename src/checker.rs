/// The classifier module assigns a syntactic category to a raw token.
///
/// Classification is a pure function of the token's text. Rules are tried in a
/// fixed priority order and the first match wins, so a token spelled like a
/// keyword is never taken for a variable name.
///
/// # Responsibilities
/// - Recognizes the declaration, comparison, grouping, arithmetic, control and
///   assignment keywords.
/// - Recognizes numbers and short variable names.
/// - Flags everything else as an unknown token.
pub mod classifier;
/// The driver module checks a whole source, line by line.
///
/// The driver pulls lines lazily from any buffered reader, runs each through
/// the lexer and the statement validator, and writes one report line per input
/// line. A rejected line never stops the run.
///
/// # Responsibilities
/// - Tracks line numbers and keeps the original text of every line.
/// - Echoes blank and accepted lines, prefixes rejected lines with an error
///   message.
/// - Counts verdicts for the end-of-run summary.
pub mod driver;
/// The lexer module splits a source line into classified tokens.
///
/// The lexer breaks the line on whitespace, separates the statement terminator
/// from the final word and classifies every remaining word.
///
/// # Responsibilities
/// - Produces tokens with their text, category and byte span.
/// - Picks the terminator character from the kind of statement being read.
/// - Reports blank lines as having no statement at all.
pub mod lexer;
/// The validator module checks classified statements against the grammar.
///
/// # Responsibilities
/// - Decides the statement kind from its first tokens.
/// - Enforces terminator, declaration, assignment, conditional and loop rules.
/// - Validates arithmetic subexpressions, including grouped ones.
pub mod validator;
