//! Local patterns proving the free space left after entering a cell can no longer be covered by one duct.
//!
//! Both tests only look at walls, i.e. blocking cells known to be joined to the duct or the outside. Pending cells are
//! neither walls nor open, so neither pattern can match on them.

use strum::VariantArray;

use crate::grid::Grid;
use crate::location::Location;
use crate::shape::{Corner, SquareStep, Step};

// (across, along): walls on both sides across the cell, open cells on both sides along it
const AXES: [(SquareStep, SquareStep); 2] = [(SquareStep::Left, SquareStep::Up), (SquareStep::Up, SquareStep::Left)];

/// Returns `true` if entering `location` pinched the free space in two with a straight wall through it:
///
/// ```text
/// |*|  |_|
/// _X_  *X*
/// |*|  |_|
/// ```
///
/// where `*` is a wall, `_` is open, `X` is `location` and `|` is anything.
pub fn eliminate_corridor(grid: &Grid, location: Location) -> bool {
    AXES.iter().any(|(across, along)| {
        grid[across.attempt_from(location)].is_wall()
            && grid[across.invert().attempt_from(location)].is_wall()
            && grid[along.attempt_from(location)].is_open()
            && grid[along.invert().attempt_from(location)].is_open()
    })
}

/// Returns `true` if two open neighbours of `location` meet only at a corner around a wall:
///
/// ```text
/// _*  *_  _X  X_
/// X_  _X  *_  _*
/// ```
pub fn eliminate_diagonal(grid: &Grid, location: Location) -> bool {
    Corner::VARIANTS.iter().any(|corner| {
        let (vertical, horizontal) = corner.sides();
        grid[vertical.attempt_from(location)].is_open()
            && grid[horizontal.attempt_from(location)].is_open()
            && grid[corner.attempt_from(location)].is_wall()
    })
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use super::{eliminate_corridor, eliminate_diagonal};
    use crate::builder::GridBuilder;
    use crate::cell::Cell;
    use crate::grid::Grid;
    use crate::location::Location;

    fn open_3x3(assume_contiguity: bool) -> Grid {
        GridBuilder::with_dims((NonZero::new(3).unwrap(), NonZero::new(3).unwrap()))
            .assume_contiguity(assume_contiguity)
            .set_start(Location(1, 1))
            .set_end(Location(3, 3))
            .build()
            .unwrap()
    }

    #[test]
    fn open_cells_never_pinch() {
        let grid = open_3x3(true);
        assert!(!eliminate_corridor(&grid, Location(2, 2)));
        assert!(!eliminate_diagonal(&grid, Location(2, 2)));
        assert!(!eliminate_corridor(&grid, Location(3, 1)));
        assert!(!eliminate_diagonal(&grid, Location(3, 2)));
    }

    #[test]
    fn corridor_between_path_and_border() {
        let mut grid = open_3x3(true);
        grid[Location(2, 2)] = Cell::OnPath;
        // path on the left, border on the right
        assert!(eliminate_corridor(&grid, Location(3, 2)));
        // border above, path below
        assert!(eliminate_corridor(&grid, Location(2, 1)));
        // border on the left but open on the right
        assert!(!eliminate_corridor(&grid, Location(1, 1)));
    }

    #[test]
    fn pending_cells_never_match() {
        let mut grid = open_3x3(false);
        grid[Location(2, 2)] = Cell::OnPath;
        // the border is still pending
        assert!(!eliminate_corridor(&grid, Location(3, 2)));
        grid[Location(4, 2)] = Cell::OwnedBlocked;
        assert!(eliminate_corridor(&grid, Location(3, 2)));
    }

    #[test]
    fn diagonal_pinch() {
        let mut grid = open_3x3(true);
        grid[Location(3, 1)] = Cell::OnPath;
        assert!(eliminate_diagonal(&grid, Location(2, 2)));
        // with the upper neighbour taken as well the corner no longer pinches
        grid[Location(2, 1)] = Cell::OnPath;
        assert!(!eliminate_diagonal(&grid, Location(2, 2)));
    }
}
