//! Error types for grid operations and the ASCII grid format.

use std::fmt;

use crate::geom::Position;

/// Errors raised by [`Grid`](crate::Grid) operations and search construction.
///
/// All of these are local and recoverable; a host typically ignores the
/// offending input and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The position lies outside the grid.
    OutOfBounds(Position),
    /// Start or End placement attempted on a barrier.
    Blocked(Position),
    /// End placement attempted on the current Start.
    SameAsStart(Position),
    /// Start placement attempted on the current End.
    SameAsEnd(Position),
    /// A search was requested without both Start and End set, or with an
    /// endpoint that cannot be searched from.
    InvalidEndpoints,
    /// No came-from chain leads back from the given position.
    NoPath(Position),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "position {p} is out of bounds"),
            Self::Blocked(p) => write!(f, "position {p} is a barrier"),
            Self::SameAsStart(p) => write!(f, "position {p} is already the start"),
            Self::SameAsEnd(p) => write!(f, "position {p} is already the end"),
            Self::InvalidEndpoints => f.write_str("start and end must both be set"),
            Self::NoPath(p) => write!(f, "no came-from chain reaches {p}"),
        }
    }
}

impl std::error::Error for Error {}

/// Errors that can occur when parsing an ASCII grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Lines have inconsistent widths.
    InconsistentSize { line: usize, expected: usize, found: usize },
    /// A character outside the grid alphabet was found.
    InvalidRune { ch: char, pos: Position },
    /// More than one `S` or `E` rune.
    DuplicateEndpoint { ch: char, pos: Position },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateEndpoint { ch, pos } => {
                write!(f, "grid contains a second \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Result alias for grid operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_position() {
        let e = Error::Blocked(Position::new(2, 3));
        assert_eq!(e.to_string(), "position (2, 3) is a barrier");
        let e = ParseError::InconsistentSize {
            line: 1,
            expected: 3,
            found: 4,
        };
        assert_eq!(e.to_string(), "grid: line 1 has width 4, expected 3");
    }

    #[test]
    fn is_std_error() {
        fn takes(_: &dyn std::error::Error) {}
        takes(&Error::InvalidEndpoints);
        takes(&ParseError::InvalidRune {
            ch: '?',
            pos: Position::ZERO,
        });
    }
}
