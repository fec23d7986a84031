//! Multi-directional word matching and the diagonal cross pattern over a
//! [Grid].

#[cfg(test)]
mod tests;

use arrayvec::ArrayVec;
use memchr::memchr_iter;

use crate::grid::Grid;

/// A grid coordinate, where `x` is the column and `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i64,
    pub y: i64,
}

impl Pos {
    /// Construct a new position.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The position `steps` moves away from `self` along `dir`.
    #[inline]
    pub fn walk(self, dir: Dir, steps: i64) -> Self {
        Self::new(self.x + steps * dir.dx, self.y + steps * dir.dy)
    }
}

/// One of the eight unit steps towards an adjacent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dir {
    pub dx: i64,
    pub dy: i64,
}

/// All eight adjacency directions, clockwise from east.
pub const DIRECTIONS: [Dir; 8] = [
    Dir { dx: 1, dy: 0 },
    Dir { dx: 1, dy: 1 },
    Dir { dx: 0, dy: 1 },
    Dir { dx: -1, dy: 1 },
    Dir { dx: -1, dy: 0 },
    Dir { dx: -1, dy: -1 },
    Dir { dx: 0, dy: -1 },
    Dir { dx: 1, dy: -1 },
];

/// Count the directions in which `word` reads in full starting at `start`.
///
/// The start cell is assumed to already hold `word[0]`, so a word of one
/// character (or none) matches in every direction. All eight directions start
/// out live and each is eliminated as soon as it walks out of bounds or hits
/// a mismatching character; the working set only ever shrinks.
pub fn count_word_directions(grid: &Grid, start: Pos, word: &[u8]) -> usize {
    let mut live = ArrayVec::from(DIRECTIONS);

    for (i, &expected) in word.iter().enumerate().skip(1) {
        // Back to front, so removal never skips over a live entry.
        for j in (0..live.len()).rev() {
            let pos = start.walk(live[j], i as i64);

            if grid.try_at(pos) != Some(expected) {
                live.swap_remove(j);
            }
        }

        if live.is_empty() {
            break;
        }
    }

    live.len()
}

/// The X-shaped pattern: a pivot cell whose diagonals each hold both arm
/// characters.
#[derive(Debug, Clone, Copy)]
pub struct CrossPattern {
    pivot: u8,
    arms: [u8; 2],
}

impl CrossPattern {
    /// Construct a new cross pattern.
    #[inline]
    pub const fn new(pivot: u8, arms: [u8; 2]) -> Self {
        Self { pivot, arms }
    }

    /// The anchor character to scan for when locating candidate centers.
    #[inline]
    pub fn pivot(&self) -> u8 {
        self.pivot
    }

    /// Test the pattern around `center`.
    ///
    /// The center must be at least one cell away from every edge, which
    /// [find_all] with a margin of 1 guarantees.
    pub fn matches(&self, grid: &Grid, center: Pos) -> bool {
        let tl = grid.at(center.walk(Dir { dx: -1, dy: -1 }, 1));
        let tr = grid.at(center.walk(Dir { dx: 1, dy: -1 }, 1));
        let bl = grid.at(center.walk(Dir { dx: -1, dy: 1 }, 1));
        let br = grid.at(center.walk(Dir { dx: 1, dy: 1 }, 1));

        self.axis(tl, br) && self.axis(tr, bl)
    }

    /// An axis matches iff it holds the two arm characters in either order,
    /// which also rules out the pivot, repeated arms, and any foreign
    /// character.
    #[inline]
    fn axis(&self, a: u8, b: u8) -> bool {
        let [first, second] = self.arms;
        (a == first && b == second) || (a == second && b == first)
    }
}

/// Every position whose cell holds `anchor`, restricted to cells at least
/// `margin` away from every edge, in row-major order.
pub fn find_all(grid: &Grid, anchor: u8, margin: usize) -> Vec<Pos> {
    let mut positions = Vec::new();

    for y in margin..grid.height().saturating_sub(margin) {
        let Some(row) = grid.row(y) else {
            continue;
        };

        let Some(window) = row.get(margin..row.len().saturating_sub(margin)) else {
            continue;
        };

        for x in memchr_iter(anchor, window) {
            positions.push(Pos::new((x + margin) as i64, y as i64));
        }
    }

    positions
}

/// Fold `matcher` over `positions`, summing its per-position counts.
pub fn count_matches<M>(positions: &[Pos], mut matcher: M) -> u64
where
    M: FnMut(Pos) -> u64,
{
    positions.iter().map(|&pos| matcher(pos)).sum()
}
