//! The character grid shared by the word search puzzles.

#[cfg(test)]
mod tests;

use bstr::BStr;

use crate::search::Pos;

/// Immutable rectangular character grid with row-major addressing.
///
/// Rows may be jagged in general; the nominal width is taken from row 0 and
/// cell access stays aware of each row's own length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Box<[u8]>>,
}

impl Grid {
    /// Construct a grid from a sequence of rows.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        Self {
            rows: rows.into_iter().map(|row| Box::from(row.as_ref())).collect(),
        }
    }

    /// Number of rows in the grid.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Nominal width of the grid, derived from the first row.
    #[inline]
    pub fn width(&self) -> usize {
        self.rows.first().map(|row| row.len()).unwrap_or_default()
    }

    /// Access the given row.
    #[inline]
    pub fn row(&self, y: usize) -> Option<&BStr> {
        self.rows.get(y).map(|row| BStr::new(&row[..]))
    }

    /// Get the cell at `pos`, or `None` if it falls outside the grid.
    #[inline]
    pub fn try_at(&self, pos: Pos) -> Option<u8> {
        let y = usize::try_from(pos.y).ok()?;
        let x = usize::try_from(pos.x).ok()?;
        self.rows.get(y)?.get(x).copied()
    }

    /// Get the cell at `pos`.
    ///
    /// Callers are expected to bounds check through [Grid::try_at] or
    /// [Grid::contains] first; hitting an invalid position here is a
    /// programmer error.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[inline]
    #[track_caller]
    pub fn at(&self, pos: Pos) -> u8 {
        match self.try_at(pos) {
            Some(c) => c,
            None => panic!("position ({}, {}) out of bounds", pos.x, pos.y),
        }
    }

    /// Test whether `pos` lies at least `margin` cells away from every edge,
    /// using the nominal width.
    #[inline]
    pub fn contains(&self, pos: Pos, margin: usize) -> bool {
        let (Ok(x), Ok(y)) = (usize::try_from(pos.x), usize::try_from(pos.y)) else {
            return false;
        };

        x >= margin
            && y >= margin
            && x < self.width().saturating_sub(margin)
            && y < self.height().saturating_sub(margin)
    }
}
