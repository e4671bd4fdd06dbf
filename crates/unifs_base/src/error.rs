use std::error::Error as StdError;
use std::fmt;
use std::io;

use tracing_error::{SpanTrace, SpanTraceStatus};

/* 📖 # Why a custom error type and not anyhow/eyre/thiserror?

- The facade needs exactly three error categories, which fit in one small enum
- Callers pattern match on `ErrorKind` to tell a missing adapter from an adapter failure
- Span traces are captured at creation, so no extra error-reporting crate is involved
 */

/// Error variants that can occur in unifs operations.
/// Each variant represents a specific error category with its associated context.
#[derive(Debug)]
pub enum ErrorKind {
    /// A storage operation failed for the given path
    FileError { path: String, source: io::Error },

    /// A file system was requested without an adapter to back it
    MissingAdapter,

    /// Catch-all for other errors with a message
    Message { message: String },
}

/* 📖 # Why separate ErrorKind and UnifsError?
ErrorKind carries the structural variant and its data. UnifsError adds the runtime part:
the context stack attached during propagation, an optional cause and the span trace.
*/

/// Error type wrapping an [`ErrorKind`] with context, an optional cause and a span trace.
pub struct UnifsError {
    kind: ErrorKind,
    context: Vec<String>,
    cause: Option<Box<UnifsError>>,
    span_trace: SpanTrace,
}

impl UnifsError {
    /// Creates a new error from an ErrorKind, capturing the current span trace.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
            cause: None,
            span_trace: SpanTrace::capture(),
        }
    }

    /// Creates a `Message` error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message {
            message: message.into(),
        })
    }

    /// Creates a `FileError` for the given path.
    pub fn file_error(path: impl Into<String>, source: io::Error) -> Self {
        Self::new(ErrorKind::FileError {
            path: path.into(),
            source,
        })
    }

    /// Creates a `MissingAdapter` error.
    pub fn missing_adapter() -> Self {
        Self::new(ErrorKind::MissingAdapter)
    }

    /// Attaches context to an error.
    /// Context is displayed before the error message.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attaches context using lazy evaluation.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context.push(f());
        self
    }

    /// Records the error that caused this one.
    pub fn caused_by(mut self, cause: UnifsError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Returns a reference to the underlying ErrorKind.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Context entries in the order they were attached.
    pub fn get_context(&self) -> &[String] {
        &self.context
    }

    pub fn cause(&self) -> Option<&UnifsError> {
        self.cause.as_deref()
    }

    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// True for a `FileError` whose io source is `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(
            &self.kind,
            ErrorKind::FileError { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }

    /// Returns the innermost error in the chain.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }

    fn fmt_kind(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::FileError { path, source } => {
                write!(f, "File error at {}: {}", path, source)
            }
            ErrorKind::MissingAdapter => write!(f, "No adapter available for file system"),
            ErrorKind::Message { message } => write!(f, "{}", message),
        }
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        self.fmt_kind(f)?;
        writeln!(f)?;
        let child_count = self.context.len() + usize::from(self.cause.is_some());
        for (i, ctx) in self.context.iter().enumerate() {
            let branch = if i + 1 == child_count { "└─" } else { "├─" };
            writeln!(f, "{}{} {}", indent, branch, ctx)?;
        }
        if let Some(cause) = &self.cause {
            write!(f, "{}└─ cause: ", indent)?;
            cause.fmt_tree(f, &format!("{}   ", indent))?;
        }
        Ok(())
    }
}

impl From<ErrorKind> for UnifsError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// The recorded `cause` comes first. A `FileError` without one reports its `io::Error`.
impl StdError for UnifsError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        if let Some(cause) = self.cause.as_deref() {
            return Some(cause);
        }
        match &self.kind {
            ErrorKind::FileError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for UnifsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ctx in &self.context {
            write!(f, "{}: ", ctx)?;
        }
        self.fmt_kind(f)
    }
}

/* 📖 # Why a hand-written Debug?
`{:?}` on a result in tests and logs should read like a report: message first, then the
context tree, the cause chain and the span trace if one was captured.
*/
impl fmt::Debug for UnifsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, "")?;
        if self.span_trace.status() == SpanTraceStatus::CAPTURED {
            writeln!(f, "Trace: {}", self.span_trace)?;
        }
        Ok(())
    }
}

/// Standard result type for unifs operations.
/// The error is boxed to keep the result small on the success path.
pub type UnifsResult<T> = std::result::Result<T, Box<UnifsError>>;

/// Extension trait for attaching context to Results.
pub trait ResultExt<T> {
    /// Attaches context to an error, consuming and re-wrapping it.
    fn context(self, context: impl Into<String>) -> UnifsResult<T>;

    /// Attaches context using lazy evaluation.
    /// Context is only evaluated if the result is an error.
    fn with_context<F>(self, f: F) -> UnifsResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for UnifsResult<T> {
    fn context(self, context: impl Into<String>) -> UnifsResult<T> {
        self.map_err(|err| Box::new(err.context(context)))
    }

    fn with_context<F>(self, f: F) -> UnifsResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new(err.with_context(f)))
    }
}

/// Build a boxed `Message` error from format arguments.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        ::std::boxed::Box::new($crate::error::UnifsError::message(format!($($arg)*)))
    };
}

/// Return early with a boxed `Message` error.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return ::std::result::Result::Err($crate::err!($($arg)*))
    };
}
