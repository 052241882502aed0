use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};

use ndarray::Array2;

use crate::cell::Cell;
use crate::location::{Dimension, Location};
use crate::shape::{Neighborhood, SquareStep};
use crate::solver::{PathSolver, SearchOptions, Solution};

/// A building floor plan, padded with a one-cell border ring so that every interior cell has four neighbours.
///
/// [`Grid`]s should be built using a [`GridBuilder`](crate::builder::GridBuilder) or parsed with [`parse_grid`](crate::input::parse_grid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub(crate) cells: Array2<Cell>,
    // interior width, height
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) start: Location,
    pub(crate) end: Location,
    pub(crate) target_length: usize,
    pub(crate) contiguity_assumed: bool,
}

impl Grid {
    /// Interior dimensions in `(width, height)` order.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// Number of interior cells.
    pub fn interior_len(&self) -> usize {
        self.dims.0.get() * self.dims.1.get()
    }

    /// Padded location of the start cell.
    pub fn start(&self) -> Location {
        self.start
    }

    /// Padded location of the end cell.
    pub fn end(&self) -> Location {
        self.end
    }

    /// The exact number of cells a duct must visit, start and end included.
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Whether non-owned rooms were classified as blocking up front when this grid was built.
    pub fn contiguity_assumed(&self) -> bool {
        self.contiguity_assumed
    }

    /// The cell at `location`, or [`None`] outside the padded grid.
    pub fn get(&self, location: Location) -> Option<Cell> {
        self.cells.get(location.as_index()).copied()
    }

    /// The four orthogonal neighbours of `location`: left, down, right, up.
    pub fn neighbors(&self, location: Location) -> impl Iterator<Item = (SquareStep, Location)> {
        SquareStep::neighbors_of(location)
    }

    /// Whether the duct may not step onto `location`.
    #[inline]
    pub fn is_blocking(&self, location: Location) -> bool {
        self[location].is_blocking()
    }

    /// Count the duct routes through this grid; see [`PathSolver::solve`].
    pub fn count_paths(&mut self, options: SearchOptions) -> Solution {
        PathSolver::new(options).solve(self)
    }

    /// Mark `location` as `state` for the duration of `f`, then put back whatever was there before.
    pub(crate) fn with_marked<R>(&mut self, location: Location, state: Cell, f: impl FnOnce(&mut Self) -> R) -> R {
        let previous = std::mem::replace(&mut self[location], state);
        let ret = f(self);
        self[location] = previous;
        ret
    }
}

impl Index<Location> for Grid {
    type Output = Cell;

    #[inline]
    fn index(&self, location: Location) -> &Self::Output {
        &self.cells[location.as_index()]
    }
}

impl IndexMut<Location> for Grid {
    #[inline]
    fn index_mut(&mut self, location: Location) -> &mut Self::Output {
        &mut self.cells[location.as_index()]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let board = self.cells.map(|cell| cell.display());
        let mut out = String::with_capacity(board.nrows() * (2 * board.ncols() + 2));

        for row in board.rows() {
            out.push('|');
            for col in row {
                out.push(*col);
                out.push('|');
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
