//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! The engine has no source code of its own to point at, so an [`Error`] carries the canonical
//! rendering of the operation that failed (for example `3a^(x) / a`), and the spans of the
//! offending operands within that rendering. Reports are built against that text.

#[cfg(test)]
extern crate self as cas_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug, Display}, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::Rgb(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns the message displayed at the top of the error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;

    /// Returns `self` as [`Any`], so that the concrete kind can be recovered.
    fn as_any(&self) -> &dyn Any;
}

/// An error associated with regions of the rendered operation that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The rendered text of the operation that failed.
    pub source: String,

    /// The regions of [`Error::source`] that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given source text, spans and kind.
    pub fn new(
        source: impl Into<String>,
        spans: Vec<Range<usize>>,
        kind: impl ErrorKind + 'static,
    ) -> Self {
        Self { source: source.into(), spans, kind: Box::new(kind) }
    }

    /// Creates a new error whose single span covers the whole source text.
    pub fn whole(source: impl Into<String>, kind: impl ErrorKind + 'static) -> Self {
        let source = source.into();
        let span = 0..source.len();
        Self::new(source, vec![span], kind)
    }

    /// Creates an error for a binary operation, rendered as `left op right`. The spans cover the
    /// left operand, the operator and the right operand, in that order.
    pub fn binary(
        left: impl Display,
        op: &str,
        right: impl Display,
        kind: impl ErrorKind + 'static,
    ) -> Self {
        let left = left.to_string();
        let right = right.to_string();
        let op_start = left.len() + 1;
        let right_start = op_start + op.len() + 1;
        let source = format!("{} {} {}", left, op, right);
        let spans = vec![
            0..left.len(),
            op_start..op_start + op.len(),
            right_start..source.len(),
        ];
        Self::new(source, spans, kind)
    }

    /// Returns the kind of this error as `T`, if it is one.
    pub fn downcast_ref<T: ErrorKind + 'static>(&self) -> Option<&T> {
        self.kind.as_any().downcast_ref::<T>()
    }

    /// Returns true if the kind of this error is `T`.
    pub fn is<T: ErrorKind + 'static>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report of this error to the given writer.
    pub fn write_report(&self, src_id: &str, writer: impl io::Write) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(self.source.as_str())), writer)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(self.source.as_str())))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (in `{}`)", self.kind.message(), self.source)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use cas_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = format!("cannot combine `{}` with this", self.what),
        labels = ["this operand", "this operator", "this other operand"],
        help = "try something else",
    )]
    struct Mismatch {
        what: &'static str,
    }

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(message = "nothing here", labels = ["the whole thing"])]
    struct Nothing;

    #[derive(Debug, Clone, ErrorKind)]
    struct Unlabelled;

    fn render(err: &Error) -> String {
        let mut buf = Vec::new();
        err.write_report("input", &mut buf).unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn binary_spans() {
        let err = Error::binary("3a", "+", "2b", Mismatch { what: "3a" });
        assert_eq!(err.source, "3a + 2b");
        assert_eq!(err.spans, vec![0..2, 3..4, 5..7]);
        assert_eq!(&err.source[err.spans[2].clone()], "2b");
    }

    #[test]
    fn whole_span() {
        let err = Error::whole("1+√2", Nothing);
        assert_eq!(err.spans, vec![0..err.source.len()]);
    }

    #[test]
    fn downcast_kind() {
        let err = Error::whole("x", Nothing);
        assert!(err.is::<Nothing>());
        assert!(err.downcast_ref::<Mismatch>().is_none());
        assert_eq!(err.downcast_ref::<Nothing>(), Some(&Nothing));
    }

    #[test]
    fn display_contains_message_and_source() {
        let err = Error::binary("a", "/", "b", Mismatch { what: "a" });
        assert_eq!(err.to_string(), "cannot combine `a` with this (in `a / b`)");
    }

    #[test]
    fn report_contains_labels() {
        let err = Error::binary("3a", "+", "2b", Mismatch { what: "3a" });
        let report = render(&err);
        assert!(report.contains("cannot combine `3a` with this"));
        assert!(report.contains("this operand"));
        assert!(report.contains("this other operand"));
        assert!(report.contains("try something else"));
    }

    #[test]
    fn message_defaults_to_kind_name() {
        let err = Error::whole("x^y", Unlabelled);
        assert_eq!(err.to_string(), "Unlabelled (in `x^y`)");
        assert!(render(&err).contains("Unlabelled"));
    }
}
