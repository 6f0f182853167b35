use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Enumeration of all possible errors that can occur while shifting a subtitle file
#[derive(Debug)]
pub enum ShiftError {
    /// The input file does not exist
    NotFound { path: PathBuf },
    /// Open, read, write or permission failure. `path` is `None` when the
    /// failing stream was not backed by a named file.
    Io {
        path: Option<PathBuf>,
        source: io::Error,
    },
    /// A range line could not be decomposed or one of its timestamps did not match the format
    Parse(LineParseError),
    /// The time format pattern itself cannot be used
    InvalidFormat(TimeFormatError),
}

/// A range line that failed to rewrite, with enough context to point at it
#[derive(Debug)]
pub struct LineParseError {
    /// 0-based index of the offending line in the input
    pub index: usize,
    /// Raw line text without its terminator (lossily decoded if not UTF-8)
    pub line: String,
    /// The timestamp substring that failed, when the failure is a timestamp
    pub timestamp: Option<String>,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    /// Splitting on the marker did not produce exactly two parts
    MarkerCount(usize),
    /// The line bytes are not valid UTF-8
    NotUtf8,
    Timestamp(TimestampParseError),
}

impl LineParseError {
    pub(crate) fn new(index: usize, line: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            index,
            line: line.into(),
            timestamp: None,
            kind,
        }
    }

    pub(crate) fn with_timestamp(mut self, text: impl Into<String>) -> Self {
        self.timestamp = Some(text.into());
        self
    }

    pub(crate) fn at_line(mut self, index: usize) -> Self {
        self.index = index;
        self
    }
}

/// Timestamp text did not match the time format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampParseError {
    pub message: String,
}

impl TimestampParseError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Time format pattern errors, raised when the pattern is compiled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeFormatError {
    Empty,
    UnknownDirective(String),
    DanglingPercent,
}

impl ShiftError {
    pub(crate) fn io(path: Option<PathBuf>, source: io::Error) -> Self {
        ShiftError::Io { path, source }
    }
}

impl fmt::Display for ShiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftError::NotFound { path } => write!(f, "File not found: {}", path.display()),
            ShiftError::Io {
                path: Some(path),
                source,
            } => write!(f, "I/O error on {}: {}", path.display(), source),
            ShiftError::Io { path: None, source } => write!(f, "I/O error: {}", source),
            ShiftError::Parse(err) => write!(f, "Parse error: {}", err),
            ShiftError::InvalidFormat(err) => write!(f, "Invalid time format: {}", err),
        }
    }
}

impl fmt::Display for LineParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} ({:?}): ", self.index + 1, self.line)?;
        match &self.kind {
            ParseErrorKind::MarkerCount(parts) => {
                write!(f, "expected 2 timestamps around '-->', found {}", parts)
            }
            ParseErrorKind::NotUtf8 => write!(f, "range line is not valid UTF-8"),
            ParseErrorKind::Timestamp(err) => match &self.timestamp {
                Some(text) => write!(f, "timestamp {:?}: {}", text, err),
                None => write!(f, "{}", err),
            },
        }
    }
}

impl fmt::Display for TimestampParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for TimeFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeFormatError::Empty => write!(f, "pattern is empty"),
            TimeFormatError::UnknownDirective(directive) => {
                write!(f, "unsupported directive '%{}'", directive)
            }
            TimeFormatError::DanglingPercent => write!(f, "pattern ends with a lone '%'"),
        }
    }
}

impl Error for ShiftError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ShiftError::Io { source, .. } => Some(source),
            ShiftError::Parse(err) => Some(err),
            ShiftError::InvalidFormat(err) => Some(err),
            ShiftError::NotFound { .. } => None,
        }
    }
}
impl Error for LineParseError {}
impl Error for TimestampParseError {}
impl Error for TimeFormatError {}

// Conversion implementations
impl From<io::Error> for ShiftError {
    fn from(err: io::Error) -> Self {
        ShiftError::Io {
            path: None,
            source: err,
        }
    }
}

impl From<LineParseError> for ShiftError {
    fn from(err: LineParseError) -> Self {
        ShiftError::Parse(err)
    }
}

impl From<TimeFormatError> for ShiftError {
    fn from(err: TimeFormatError) -> Self {
        ShiftError::InvalidFormat(err)
    }
}

// Conversion to io::Error for callers working in io::Result
impl From<ShiftError> for io::Error {
    fn from(err: ShiftError) -> Self {
        match err {
            ShiftError::Io { source, .. } => source,
            other => {
                let kind = if matches!(other, ShiftError::NotFound { .. }) {
                    io::ErrorKind::NotFound
                } else {
                    io::ErrorKind::InvalidData
                };
                io::Error::new(kind, other)
            }
        }
    }
}

// Type alias for Result with ShiftError
pub type ShiftResult<T> = Result<T, ShiftError>;
