//! Building padded grids room by room.

use std::num::NonZero;

use ndarray::Array2;
use thiserror::Error;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::location::{Dimension, Location};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum BuilderInvalidReason {
    /// A feature was placed outside the interior specified by `dims` on a builder.
    #[error("feature placed outside the grid interior")]
    FeatureOutOfBounds,
    /// A start marker was placed on an owned room, or a room was dropped under a start or end marker.
    #[error("start or end marker overlaps a room we do not own")]
    Occupied,
    /// A second start marker was placed.
    #[error("only one starting point allowed")]
    DuplicateStart,
    /// A second end marker was placed.
    #[error("only one ending point allowed")]
    DuplicateEnd,
    /// [`build`](GridBuilder::build) was called without a start marker.
    #[error("no starting point found")]
    MissingStart,
    /// [`build`](GridBuilder::build) was called without an end marker.
    #[error("no ending point found")]
    MissingEnd,
}

/// A builder for padded [`Grid`]s.
///
/// All locations given to the builder are in padded coordinates: the interior runs from `Location(1, 1)` to
/// `Location(width, height)`. Builders mutate themselves while building but can be [`Clone`]d to save their state at
/// some point.
#[derive(Clone)]
pub struct GridBuilder {
    // width, height
    dims: (Dimension, Dimension),
    // padded; only Free, OwnedBlocked, Start and End are ever stored here
    cells: Array2<Cell>,
    start: Option<Location>,
    end: Option<Location>,
    contiguity_assumed: bool,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::with_dims((NonZero::<usize>::MIN, NonZero::<usize>::MIN))
    }
}

impl GridBuilder {
    /// Construct a new [`Self`] with the specified interior dimensions, specified in `(width, height)` order.
    /// Every interior cell starts out free.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            cells: Array2::from_shape_simple_fn((dims.1.get() + 2, dims.0.get() + 2), Cell::default),
            start: None,
            end: None,
            contiguity_assumed: false,
            invalid_reasons: Default::default(),
        }
    }

    /// Choose whether the built grid assumes contiguity.
    ///
    /// With contiguity assumed, every room we do not own and the border are classified as blocking up front, which is
    /// fast but only sound when every such room is joined to the outside through other such rooms and the start cell
    /// touches the outside or one of them.
    /// Otherwise they stay pending and the search joins them to the duct as it reaches them.
    pub fn assume_contiguity(&mut self, assumed: bool) -> &mut Self {
        self.contiguity_assumed = assumed;
        self
    }

    /// Place the start marker.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds),
    /// [`Occupied`](BuilderInvalidReason::Occupied) or [`DuplicateStart`](BuilderInvalidReason::DuplicateStart)
    /// invalid state. If the builder is already in an invalid state, this function does nothing.
    pub fn set_start(&mut self, location: Location) -> &mut Self {
        if !self.check_placement(location) {
            return self;
        }

        if self.start.is_some() {
            self.invalid_reasons.push(BuilderInvalidReason::DuplicateStart);
            return self;
        }

        self.start = Some(location);
        // a start sharing the end cell is stored as the end; the search finishes on arrival
        if self.cells[location.as_index()] != Cell::End {
            self.cells[location.as_index()] = Cell::Start;
        }

        self
    }

    /// Place the end marker. It may share a cell with the start marker.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds),
    /// [`Occupied`](BuilderInvalidReason::Occupied) or [`DuplicateEnd`](BuilderInvalidReason::DuplicateEnd)
    /// invalid state. If the builder is already in an invalid state, this function does nothing.
    pub fn set_end(&mut self, location: Location) -> &mut Self {
        if !self.check_placement(location) {
            return self;
        }

        if self.end.is_some() {
            self.invalid_reasons.push(BuilderInvalidReason::DuplicateEnd);
            return self;
        }

        self.end = Some(location);
        self.cells[location.as_index()] = Cell::End;

        self
    }

    /// Drop a room from the duct's route: it belongs to someone else and may never be entered.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) or
    /// [`Occupied`](BuilderInvalidReason::Occupied) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn drop_location(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !location.is_interior(self.dims) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        if matches!(self.cells[location.as_index()], Cell::Start | Cell::End) {
            self.invalid_reasons.push(BuilderInvalidReason::Occupied);
            return self;
        }

        self.cells[location.as_index()] = Cell::OwnedBlocked;
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    /// Missing markers are only detected by [`Self::build`].
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Grid`].
    /// If the builder is invalid for any reason, or a start or end marker is missing, a [`Vec`] of
    /// [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Grid, Vec<BuilderInvalidReason>> {
        let mut reasons = self.invalid_reasons.clone();
        if reasons.is_empty() {
            if self.start.is_none() {
                reasons.push(BuilderInvalidReason::MissingStart);
            }
            if self.end.is_none() {
                reasons.push(BuilderInvalidReason::MissingEnd);
            }
        }

        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(reasons);
        };
        if !reasons.is_empty() {
            return Err(reasons);
        }

        let blocking = if self.contiguity_assumed { Cell::OwnedBlocked } else { Cell::PendingBlocked };
        let mut blocked = 0;
        let cells = Array2::from_shape_fn(self.cells.raw_dim(), |ind| {
            let location = Location::from(ind);
            if !location.is_interior(self.dims) {
                return blocking;
            }
            match self.cells[ind] {
                Cell::OwnedBlocked => {
                    blocked += 1;
                    blocking
                }
                cell => cell,
            }
        });

        let interior = self.dims.0.get() * self.dims.1.get();

        Ok(Grid {
            cells,
            dims: self.dims,
            start,
            end,
            target_length: interior - blocked,
            contiguity_assumed: self.contiguity_assumed,
        })
    }

    fn check_placement(&mut self, location: Location) -> bool {
        if !self.invalid_reasons.is_empty() {
            return false;
        }

        if !location.is_interior(self.dims) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return false;
        }

        if self.cells[location.as_index()] == Cell::OwnedBlocked {
            self.invalid_reasons.push(BuilderInvalidReason::Occupied);
            return false;
        }

        true
    }
}
