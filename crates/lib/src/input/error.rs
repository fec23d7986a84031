use core::fmt;

use bstr::BStr;

/// The ways pulling a value out of the input can fail.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub enum ErrorKind {
    ExpectedLine,
    ExpectedWord,
    NotInteger(&'static BStr),
    NotUtf8,
    ArrayCapacity(usize),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ExpectedLine => write!(f, "expected line"),
            ErrorKind::ExpectedWord => write!(f, "expected word"),
            ErrorKind::NotInteger(word) => {
                write!(f, "not an integer or integer overflow `{word}`")
            }
            ErrorKind::NotUtf8 => write!(f, "not utf-8"),
            ErrorKind::ArrayCapacity(cap) => write!(f, "array out of capacity ({cap})"),
        }
    }
}

/// Error raised while processing input, tagged with the source line.
#[derive(Debug)]
pub struct InputError {
    path: &'static str,
    line: usize,
    kind: ErrorKind,
}

impl InputError {
    /// Construct a new input error.
    #[inline]
    pub(crate) fn new(path: &'static str, line: usize, kind: ErrorKind) -> Self {
        Self { path, line, kind }
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for InputError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.path, self.line, self.kind)
    }
}

impl std::error::Error for InputError {}
