//! Reading floor plans in the challenge text format.
//!
//! The first two whitespace-delimited tokens are the interior width and height. They are followed by `width * height`
//! single-character symbols in row-major order; whitespace between symbols is ignored:
//!
//! | symbol | meaning                 |
//! |--------|-------------------------|
//! | `0`    | a room we own           |
//! | `1`    | a room we do not own    |
//! | `2`    | where the duct starts   |
//! | `3`    | where the duct ends     |

use std::io::Read;

use itertools::Itertools;
use log::{debug, warn};
use thiserror::Error;

use crate::builder::{BuilderInvalidReason, GridBuilder};
use crate::grid::Grid;
use crate::location::{Dimension, Location};

/// Reasons a floor plan may fail to parse.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A width or height is missing, zero, or not a decimal number.
    #[error("bad grid dimension {token:?}")]
    MalformedDimension {
        /// The offending token, empty if the input ran out.
        token: String,
    },
    /// A cell symbol other than `0`, `1`, `2` or `3`.
    #[error("strange character {symbol:?} at {location}")]
    MalformedSymbol {
        /// The unrecognised character.
        symbol: char,
        /// Padded location of the cell it was read for.
        location: Location,
    },
    /// The input ended before every cell was given.
    #[error("expected {expected} cells, found {found}")]
    Truncated {
        /// `width * height`.
        expected: usize,
        /// Cells read before the input ended.
        found: usize,
    },
    /// The symbols parsed but do not describe a valid grid.
    #[error("invalid grid: {}", .0.iter().join(", "))]
    Invalid(Vec<BuilderInvalidReason>),
    /// Reading the input failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Symbol {
    Free,
    Owned,
    Start,
    End,
}

impl TryFrom<char> for Symbol {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '0' => Ok(Self::Free),
            '1' => Ok(Self::Owned),
            '2' => Ok(Self::Start),
            '3' => Ok(Self::End),
            other => Err(other),
        }
    }
}

fn take_dimension(text: &str) -> Result<(Dimension, &str), ParseError> {
    let text = text.trim_start();
    let (token, rest) = text.split_once(char::is_whitespace).unwrap_or((text, ""));

    token.parse::<usize>().ok()
        .and_then(Dimension::new)
        .map(|dim| (dim, rest))
        .ok_or_else(|| ParseError::MalformedDimension { token: token.to_owned() })
}

/// Parse a floor plan from `text`, building it with or without assuming contiguity.
pub fn parse_grid(text: &str, assume_contiguity: bool) -> Result<Grid, ParseError> {
    let (width, rest) = take_dimension(text)?;
    let (height, rest) = take_dimension(rest)?;

    let mut builder = GridBuilder::with_dims((width, height));
    builder.assume_contiguity(assume_contiguity);

    let expected = width.get() * height.get();
    let mut symbols = rest.chars().filter(|c| !c.is_whitespace());

    for (found, (y, x)) in (1..=height.get()).cartesian_product(1..=width.get()).enumerate() {
        let location = Location(x, y);
        let Some(symbol) = symbols.next() else {
            return Err(ParseError::Truncated { expected, found });
        };

        match Symbol::try_from(symbol).map_err(|symbol| ParseError::MalformedSymbol { symbol, location })? {
            Symbol::Free => {}
            Symbol::Owned => {
                builder.drop_location(location);
            }
            Symbol::Start => {
                builder.set_start(location);
            }
            Symbol::End => {
                builder.set_end(location);
            }
        }
    }

    let trailing = symbols.count();
    if trailing > 0 {
        warn!("ignoring {} symbols after the last cell", trailing);
    }

    let grid = builder.build().map_err(ParseError::Invalid)?;
    debug!("parsed {}x{} grid, target length {}", width, height, grid.target_length());

    Ok(grid)
}

/// Read a whole floor plan from `reader`; see [`parse_grid`].
pub fn read_grid<R: Read>(mut reader: R, assume_contiguity: bool) -> Result<Grid, ParseError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_grid(&text, assume_contiguity)
}
