use std::collections::HashSet;

use itertools::Itertools;
use log::trace;
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Dfs;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::location::Location;
use crate::shape::{Neighborhood, SquareStep, Step};

impl Grid {
    /// Fold the pending region containing `origin` into the owned region, appending every converted cell to `folded`.
    ///
    /// Does nothing if `origin` is not pending or lies outside the padded grid.
    pub(crate) fn fold_from(&mut self, origin: Location, folded: &mut Vec<Location>) {
        let mut stack = vec![origin];

        while let Some(location) = stack.pop() {
            match self.cells.get_mut(location.as_index()) {
                Some(cell) if *cell == Cell::PendingBlocked => *cell = Cell::OwnedBlocked,
                _ => continue,
            }

            folded.push(location);
            stack.extend(SquareStep::neighbors_of(location).map(|(_, next)| next));
        }
    }

    /// Exact inverse of [`Self::fold_from`].
    pub(crate) fn unfold(&mut self, folded: &[Location]) {
        for location in folded {
            self[*location] = Cell::PendingBlocked;
        }
    }

    /// Join every pending region touching `around` to the owned region for the duration of `f`, then return exactly
    /// those cells to pending.
    pub(crate) fn with_folded<R>(&mut self, around: Location, f: impl FnOnce(&mut Self) -> R) -> R {
        let mut folded = Vec::new();
        for (_, next) in SquareStep::neighbors_of(around) {
            self.fold_from(next, &mut folded);
        }

        if !folded.is_empty() {
            trace!("folded {} cells around {}", folded.len(), around);
        }

        let ret = f(self);
        self.unfold(&folded);
        ret
    }
}

/// Whether a grid satisfies the contiguity assumption required by
/// [`GridBuilder::assume_contiguity`](crate::builder::GridBuilder::assume_contiguity).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContiguityReport {
    /// Rooms we do not own that are cut off from the outside by rooms we do own, in row-major order.
    pub stranded: Vec<Location>,
    /// Whether the start cell touches the border or a room we do not own.
    pub start_anchored: bool,
}

impl ContiguityReport {
    /// Whether counting with contiguity assumed gives the exact result for this grid.
    pub fn holds(&self) -> bool {
        self.stranded.is_empty() && self.start_anchored
    }
}

/// Check the contiguity assumption on a freshly built grid, regardless of the mode it was built in.
///
/// Every non-traversable cell, border included, becomes a vertex of an undirected graph joined to its non-traversable
/// orthogonal neighbours; the assumption holds when the whole graph is reachable from the border.
pub fn check_contiguity(grid: &Grid) -> ContiguityReport {
    let (rows, cols) = grid.cells.dim();
    let is_room_not_owned = |cell: Cell| matches!(cell, Cell::OwnedBlocked | Cell::PendingBlocked);
    let mut graph: UnGraphMap<Location, ()> = UnGraphMap::new();

    let blocked = grid.cells.indexed_iter()
        .filter(|(_, cell)| is_room_not_owned(**cell))
        .map(|(ind, _)| Location::from(ind))
        .collect_vec();

    for &location in &blocked {
        graph.add_node(location);
        // add edges down and to the right, if possible
        for step in [SquareStep::Down, SquareStep::Right] {
            let other = step.attempt_from(location);
            if other.1 < rows && other.0 < cols && is_room_not_owned(grid[other]) {
                graph.add_edge(location, other, ());
            }
        }
    }

    let mut reached = HashSet::with_capacity(blocked.len());
    // the top left corner is always part of the border ring
    let mut dfs = Dfs::new(&graph, Location(0, 0));
    while let Some(location) = dfs.next(&graph) {
        reached.insert(location);
    }

    let stranded = blocked.into_iter()
        .filter(|location| !reached.contains(location))
        .sorted_by_key(|location| location.as_index())
        .collect_vec();

    let start_anchored = grid.neighbors(grid.start)
        .any(|(_, next)| is_room_not_owned(grid[next]));

    ContiguityReport { stranded, start_anchored }
}
