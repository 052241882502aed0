use log::debug;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::location::Location;
use crate::prune::{eliminate_corridor, eliminate_diagonal};
use crate::shape::{Neighborhood, SquareStep};

/// Which pruning tests a [`PathSolver`] runs at every step. Pruning never changes the count, only how much of the
/// search tree is walked.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchOptions {
    /// Abandon a branch whose last step split the free space with a straight wall.
    pub corridor_pruning: bool,
    /// Abandon a branch whose last step split the free space across a corner.
    pub diagonal_pruning: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            corridor_pruning: true,
            diagonal_pruning: true,
        }
    }
}

impl SearchOptions {
    /// No pruning at all: a plain exhaustive backtracking search.
    pub fn exhaustive() -> Self {
        Self {
            corridor_pruning: false,
            diagonal_pruning: false,
        }
    }
}

/// The outcome of one search.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Solution {
    /// Number of distinct duct routes.
    pub paths: u64,
    /// Number of search steps taken to find them.
    pub calls: u64,
}

/// Exhaustive backtracking counter of duct routes.
///
/// A route starts at the start cell, moves orthogonally one cell at a time without revisiting a cell, and ends on the
/// end cell having visited exactly [`Grid::target_length`] cells.
pub struct PathSolver {
    options: SearchOptions,
    calls: u64,
    end: Location,
    target_length: usize,
    fold: bool,
}

impl PathSolver {
    /// A solver that prunes according to `options`.
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            calls: 0,
            end: Location(0, 0),
            target_length: 0,
            fold: false,
        }
    }

    /// Count every route through `grid`.
    ///
    /// `grid` is borrowed for the whole search and is left exactly as it was found. If the grid was built without
    /// assuming contiguity, rooms we do not own are joined to the duct as it reaches them and released again when the
    /// search backs off.
    pub fn solve(&mut self, grid: &mut Grid) -> Solution {
        self.calls = 0;
        self.end = grid.end();
        self.target_length = grid.target_length();
        self.fold = !grid.contiguity_assumed();

        debug!("searching {:?} with target length {}, contiguity assumed: {}", self.options, self.target_length, !self.fold);

        let start = grid.start();
        let paths = if self.fold {
            grid.with_folded(start, |grid| self.visit(grid, start, 0))
        } else {
            self.visit(grid, start, 0)
        };

        debug!("found {} routes in {} calls", paths, self.calls);

        Solution {
            paths,
            calls: self.calls,
        }
    }

    fn visit(&mut self, grid: &mut Grid, location: Location, moves: usize) -> u64 {
        self.calls += 1;

        if location == self.end {
            return u64::from(moves + 1 == self.target_length);
        }

        // the start cell was never entered, so walls beside it need not be joined
        if self.options.corridor_pruning && moves > 0 && eliminate_corridor(grid, location) {
            return 0;
        }

        if self.fold {
            grid.with_folded(location, |grid| self.explore(grid, location, moves))
        } else {
            self.explore(grid, location, moves)
        }
    }

    fn explore(&mut self, grid: &mut Grid, location: Location, moves: usize) -> u64 {
        if self.options.diagonal_pruning && eliminate_diagonal(grid, location) {
            return 0;
        }

        grid.with_marked(location, Cell::OnPath, |grid| {
            SquareStep::neighbors_of(location)
                .map(|(_, next)| if grid.is_blocking(next) { 0 } else { self.visit(grid, next, moves + 1) })
                .sum::<u64>()
        })
    }
}
