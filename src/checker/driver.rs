use std::{
    borrow::Cow,
    fmt,
    io::{self, BufRead, Write},
};

use tracing::{debug, info};

use crate::{
    checker::{lexer::tokenize, validator::statement::validate},
    error::CheckError,
    token::StatementKind,
};

/// The outcome of checking one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The line holds no tokens and was not checked.
    Blank,
    /// The line is a well-formed statement of the given kind.
    Accepted(StatementKind),
    /// The line is malformed.
    Rejected(CheckError),
}

/// The verdict for one line together with the line itself.
///
/// Displaying a report yields the output line for it: the original text for
/// blank and accepted lines, or the error message followed by the original
/// text for rejected ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReport {
    /// 1-based line number.
    pub line:    usize,
    /// The line as read, without its line ending.
    pub text:    String,
    /// What the checker decided.
    pub verdict: Verdict,
}

impl LineReport {
    /// Checks a single line.
    ///
    /// # Examples
    /// ```
    /// use linecheck::checker::driver::{LineReport, Verdict};
    ///
    /// let report = LineReport::check(1, "x = OPENPAREN 5 ADD 3 ;");
    /// assert!(matches!(report.verdict, Verdict::Rejected(_)));
    /// assert_eq!(report.to_string(), "Error: Paren Count Mismatch in line x = OPENPAREN 5 ADD 3 ;");
    /// ```
    #[must_use]
    pub fn check(line: usize, text: &str) -> Self {
        let verdict = match tokenize(line, text) {
            None => Verdict::Blank,
            Some(statement) => match validate(&statement) {
                Ok(kind) => Verdict::Accepted(kind),
                Err(err) => Verdict::Rejected(err),
            },
        };

        match &verdict {
            Verdict::Blank => debug!(line, "blank line"),
            Verdict::Accepted(kind) => debug!(line, %kind, "accepted"),
            Verdict::Rejected(err) => debug!(line, error = %err, detail = %err.detail(), "rejected"),
        }

        Self { line,
               text: text.to_string(),
               verdict }
    }

    /// Whether the line was rejected.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self.verdict, Verdict::Rejected(_))
    }
}

impl fmt::Display for LineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verdict {
            Verdict::Blank | Verdict::Accepted(_) => f.write_str(&self.text),
            Verdict::Rejected(err) => write!(f, "Error: {err} in line {}", self.text),
        }
    }
}

/// Verdict counts for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Non-blank lines checked.
    pub checked:  usize,
    /// Lines accepted.
    pub accepted: usize,
    /// Lines rejected.
    pub rejected: usize,
    /// Blank lines skipped.
    pub blank:    usize,
}

impl Summary {
    /// Counts one more verdict.
    pub fn record(&mut self, verdict: &Verdict) {
        match verdict {
            Verdict::Blank => self.blank += 1,
            Verdict::Accepted(_) => {
                self.checked += 1;
                self.accepted += 1;
            },
            Verdict::Rejected(_) => {
                self.checked += 1;
                self.rejected += 1;
            },
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "{} lines checked: {} accepted, {} rejected, {} blank",
               self.checked, self.accepted, self.rejected, self.blank)
    }
}

/// Lazily checks every line a reader yields.
///
/// Lines are read one at a time; nothing is kept once a report has been
/// handed out. Bytes that are not valid UTF-8 are replaced with `U+FFFD`, so
/// the token holding them is unknown and only that line is rejected.
///
/// # Errors
/// An item is an error if reading failed. Iteration ends after the first
/// error.
pub fn reports<R: BufRead>(mut reader: R) -> impl Iterator<Item = io::Result<LineReport>> {
    let mut buf = Vec::new();
    let mut line = 0;
    let mut failed = false;

    std::iter::from_fn(move || {
        if failed {
            return None;
        }
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                line += 1;
                Some(Ok(LineReport::check(line, &decode_line(&buf))))
            },
            Err(e) => {
                failed = true;
                Some(Err(e))
            },
        }
    })
}

/// Drops the `\n` or `\r\n` line ending and decodes the rest lossily.
fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes)
}

/// Checks every line of `reader` and writes one report line per input line to
/// `writer`.
///
/// The run always covers the whole input: a rejected line is reported and the
/// next line is checked as if nothing happened.
///
/// # Returns
/// The verdict counts for the run.
///
/// # Errors
/// Returns an error only if reading or writing fails.
///
/// # Examples
/// ```
/// use linecheck::checker::driver::run;
///
/// let source = "small x;\nx = 5 ADD;\n";
/// let mut out = Vec::new();
/// let summary = run(source.as_bytes(), &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(),
///            "small x;\nError: Subexpression Syntax Error in line x = 5 ADD;\n");
/// assert_eq!(summary.rejected, 1);
/// ```
#[tracing::instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(reader: R, mut writer: W) -> io::Result<Summary> {
    let mut summary = Summary::default();

    for report in reports(reader) {
        let report = report?;
        writeln!(writer, "{report}")?;
        summary.record(&report.verdict);
    }
    writer.flush()?;

    info!(checked = summary.checked,
          accepted = summary.accepted,
          rejected = summary.rejected,
          blank = summary.blank,
          "finished");

    Ok(summary)
}
