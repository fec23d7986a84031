//! Input parser.

mod error;
#[cfg(test)]
mod tests;

use std::str::from_utf8;

use arrayvec::ArrayVec;
use bstr::{BStr, ByteSlice};
use memchr::{memchr, memchr_iter};

pub use self::error::{ErrorKind, InputError};

pub(crate) const NL: u8 = b'\n';

type Result<T, E = InputError> = std::result::Result<T, E>;

/// Cursor over the raw puzzle input.
#[derive(Debug, Clone, Copy)]
pub struct Input {
    /// The path being parsed, used to tag errors.
    path: &'static str,
    /// The full input, kept around so offsets can be turned into line numbers.
    data: &'static [u8],
    /// Current offset into `data`.
    at: usize,
}

impl Input {
    /// Construct a new input processor.
    #[inline]
    pub fn new(path: &'static str, data: &'static [u8]) -> Self {
        Self { path, data, at: 0 }
    }

    /// The path this input was read from.
    #[inline]
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Test if the input has been exhausted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.at >= self.data.len()
    }

    /// Get the remaining unparsed input.
    #[inline]
    pub fn as_bstr(&self) -> &'static BStr {
        BStr::new(self.rest())
    }

    /// Advance the cursor by `n` bytes, clamped to the end of the input.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.at = self.at.saturating_add(n).min(self.data.len());
    }

    /// Consume `lit` if the remaining input starts with it.
    #[inline]
    pub fn eat(&mut self, lit: &[u8]) -> bool {
        if self.rest().starts_with(lit) {
            self.advance(lit.len());
            return true;
        }

        false
    }

    /// Parse a run of ascii digits at the cursor, or `None` if the cursor is
    /// not looking at a digit.
    pub fn try_digits<T>(&mut self) -> Result<Option<T>>
    where
        T: FromWord,
    {
        let rest = self.rest();
        let n = rest.iter().take_while(|b| b.is_ascii_digit()).count();

        if n == 0 {
            return Ok(None);
        }

        let value = T::from_word(&rest[..n]).map_err(|kind| self.error(kind))?;
        self.advance(n);
        Ok(Some(value))
    }

    /// Parse the next line as `T`, or `None` once the input is exhausted.
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromLine,
    {
        if self.is_empty() {
            return Ok(None);
        }

        let rest = self.rest();

        let (mut line, n) = match memchr(NL, rest) {
            Some(at) => (&rest[..at], at + 1),
            None => (rest, rest.len()),
        };

        if let [head @ .., b'\r'] = line {
            line = head;
        }

        let number = self.line_number();
        self.advance(n);

        match T::from_line(Line { data: line }) {
            Ok(value) => Ok(Some(value)),
            Err(kind) => Err(InputError::new(self.path, number, kind)),
        }
    }

    /// Parse the next line as `T`, erroring out if the input is exhausted.
    pub fn line<T>(&mut self) -> Result<T>
    where
        T: FromLine,
    {
        match self.try_line()? {
            Some(value) => Ok(value),
            None => Err(self.error(ErrorKind::ExpectedLine)),
        }
    }

    #[inline]
    fn rest(&self) -> &'static [u8] {
        self.data.get(self.at..).unwrap_or_default()
    }

    /// The 1-based line number at the cursor.
    fn line_number(&self) -> usize {
        let head = self.data.get(..self.at).unwrap_or_default();
        memchr_iter(NL, head).count() + 1
    }

    fn error(&self, kind: ErrorKind) -> InputError {
        InputError::new(self.path, self.line_number(), kind)
    }
}

/// A single line of input handed to [FromLine] implementations.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    data: &'static [u8],
}

impl Line {
    /// The raw line.
    #[inline]
    pub fn as_bstr(self) -> &'static BStr {
        BStr::new(self.data)
    }

    /// Iterate over the whitespace-separated words of the line.
    #[inline]
    pub fn words(self) -> impl Iterator<Item = &'static [u8]> {
        self.data.fields()
    }
}

/// A value parsed from a single whitespace-separated word.
pub trait FromWord: Sized {
    fn from_word(word: &'static [u8]) -> Result<Self, ErrorKind>;
}

/// A value parsed from a whole line of input.
pub trait FromLine: Sized {
    fn from_line(line: Line) -> Result<Self, ErrorKind>;
}

macro_rules! integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromWord for $ty {
                #[inline]
                fn from_word(word: &'static [u8]) -> Result<Self, ErrorKind> {
                    let Ok(string) = from_utf8(word) else {
                        return Err(ErrorKind::NotUtf8);
                    };

                    string
                        .parse()
                        .map_err(|_| ErrorKind::NotInteger(BStr::new(word)))
                }
            }

            impl FromLine for $ty {
                #[inline]
                fn from_line(line: Line) -> Result<Self, ErrorKind> {
                    let Some(word) = line.words().next() else {
                        return Err(ErrorKind::ExpectedWord);
                    };

                    <$ty>::from_word(word)
                }
            }
        )*
    };
}

integer!(u16, u32, u64, usize, i16, i32, i64, isize);

impl FromLine for &'static BStr {
    #[inline]
    fn from_line(line: Line) -> Result<Self, ErrorKind> {
        Ok(line.as_bstr())
    }
}

impl<A, B> FromLine for (A, B)
where
    A: FromWord,
    B: FromWord,
{
    fn from_line(line: Line) -> Result<Self, ErrorKind> {
        let mut words = line.words();

        let (Some(a), Some(b)) = (words.next(), words.next()) else {
            return Err(ErrorKind::ExpectedWord);
        };

        Ok((A::from_word(a)?, B::from_word(b)?))
    }
}

impl<T> FromLine for Vec<T>
where
    T: FromWord,
{
    fn from_line(line: Line) -> Result<Self, ErrorKind> {
        line.words().map(T::from_word).collect()
    }
}

impl<T, const N: usize> FromLine for ArrayVec<T, N>
where
    T: FromWord,
{
    fn from_line(line: Line) -> Result<Self, ErrorKind> {
        let mut values = ArrayVec::new();

        for word in line.words() {
            let value = T::from_word(word)?;

            if values.try_push(value).is_err() {
                return Err(ErrorKind::ArrayCapacity(N));
            }
        }

        Ok(values)
    }
}
