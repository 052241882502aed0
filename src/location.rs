use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Ix;

pub(crate) type Coord = usize;
/// A nonzero extent of the grid interior, in cells.
pub type Dimension = NonZero<Coord>;

/// A location `(x, y)` on a padded grid. `Location(0, 0)` is the top left border cell, so interior cells run from
/// `Location(1, 1)` to `Location(cols, rows)`.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// Whether this location lies inside an interior of the given `(width, height)`.
    pub(crate) fn is_interior(&self, dims: (Dimension, Dimension)) -> bool {
        (1..=dims.0.get()).contains(&self.0) && (1..=dims.1.get()).contains(&self.1)
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
