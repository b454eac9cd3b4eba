//! Geometry primitives: [`Position`] and [`Range`].
//!
//! Positions are `(row, col)` pairs, 0-indexed, with rows growing down and
//! columns growing right.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A grid coordinate as a `(row, col)` pair.
///
/// Components are signed so that neighbour offsets can step outside the grid
/// and be rejected by a bounds check instead of wrapping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The four orthogonal neighbours in the fixed order up, down, left,
    /// right. Search tie-breaking depends on this order.
    #[inline]
    pub const fn neighbors_4(self) -> [Position; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Position) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// Whether `other` is one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.manhattan(other) == 1
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Position {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Position,
    pub max: Position,
}

impl Range {
    /// Create a range covering `[0, rows) × [0, cols)`.
    #[inline]
    pub fn with_size(rows: i32, cols: i32) -> Self {
        Self {
            min: Position::ZERO,
            max: Position::new(rows.max(0), cols.max(0)),
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns.
    #[inline]
    pub fn cols(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Total number of positions in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows() as usize) * (self.cols() as usize)
    }

    /// Whether the range has zero area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Position) -> bool {
        p.row >= self.min.row && p.row < self.max.row && p.col >= self.min.col && p.col < self.max.col
    }

    /// Flat row-major index of `p`, or `None` if it lies outside.
    #[inline]
    pub fn index(self, p: Position) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let r = (p.row - self.min.row) as usize;
        let c = (p.col - self.min.col) as usize;
        Some(r * self.cols() as usize + c)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn position(self, idx: usize) -> Position {
        let cols = self.cols().max(1) as usize;
        Position::new(
            (idx / cols) as i32 + self.min.row,
            (idx % cols) as i32 + self.min.col,
        )
    }

    /// Iterate over all positions in row-major order.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Position;
    type IntoIter = RangeIter;

    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the positions in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Position,
}

impl Iterator for RangeIter {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Position> {
        if self.cur.row >= self.range.max.row || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.range.max.col {
            self.cur.col = self.range.min.col;
            self.cur.row += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.row >= self.range.max.row {
            return (0, Some(0));
        }
        let w = self.range.cols() as usize;
        let remaining_in_row = (self.range.max.col - self.cur.col) as usize;
        let remaining_rows = (self.range.max.row - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_order_is_up_down_left_right() {
        let p = Position::new(3, 3);
        assert_eq!(
            p.neighbors_4(),
            [
                Position::new(2, 3),
                Position::new(4, 3),
                Position::new(3, 2),
                Position::new(3, 4),
            ]
        );
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Position::new(0, 0).manhattan(Position::new(4, 4)), 8);
        assert_eq!(Position::new(2, 5).manhattan(Position::new(2, 5)), 0);
        assert!(Position::new(1, 1).is_adjacent(Position::new(1, 2)));
        assert!(!Position::new(1, 1).is_adjacent(Position::new(2, 2)));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![Position::new(1, 0), Position::new(0, 2), Position::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Position::new(0, 1), Position::new(0, 2), Position::new(1, 0)]);
    }

    #[test]
    fn range_contains_and_len() {
        let r = Range::with_size(3, 4);
        assert_eq!(r.len(), 12);
        assert!(r.contains(Position::new(2, 3)));
        assert!(!r.contains(Position::new(3, 0)));
        assert!(!r.contains(Position::new(0, -1)));
        assert!(Range::with_size(0, 5).is_empty());
        assert_eq!(Range::with_size(-2, 5).len(), 0);
    }

    #[test]
    fn index_round_trips_through_position() {
        let r = Range::with_size(5, 7);
        for p in r {
            let i = r.index(p).unwrap();
            assert_eq!(r.position(i), p);
        }
        assert_eq!(r.index(Position::new(5, 0)), None);
    }

    #[test]
    fn iter_is_row_major_and_exact() {
        let r = Range::with_size(2, 3);
        let it = r.iter();
        assert_eq!(it.len(), 6);
        let pts: Vec<_> = it.collect();
        assert_eq!(pts[0], Position::new(0, 0));
        assert_eq!(pts[2], Position::new(0, 2));
        assert_eq!(pts[3], Position::new(1, 0));
        assert_eq!(Range::with_size(0, 3).iter().count(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(4, 2).to_string(), "(4, 2)");
        assert_eq!(Range::with_size(2, 3).to_string(), "[(0, 0)-(2, 3))");
    }
}
