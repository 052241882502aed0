//! Orthogonal steps and diagonal corners on a padded grid.

use std::fmt::Debug;
use std::hash::Hash;

use strum::VariantArray;

use crate::location::Location;

/// A single step on the grid, orthogonal or diagonal.
pub trait Step: Sized + Copy + VariantArray + Eq + Hash + Debug {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// Stepping off the top or left edge wraps around, so callers must only step from cells with a border ring around them.
    fn attempt_from(&self, location: Location) -> Location;
    /// Invert the direction specified by `self`.
    fn invert(&self) -> Self;
}

/// The four orthogonal moves a duct may make.
///
/// Variants are declared in the order the search explores them; `VARIANTS` preserves that order.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum SquareStep {
    /// Towards column 0.
    Left,
    /// Towards the last row.
    Down,
    /// Towards the last column.
    Right,
    /// Towards row 0.
    Up,
}

impl Step for SquareStep {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Left => location.offset_by((-1, 0)),
            Self::Down => location.offset_by((0, 1)),
            Self::Right => location.offset_by((1, 0)),
            Self::Up => location.offset_by((0, -1)),
        }
    }

    fn invert(&self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Down => Self::Up,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
        }
    }
}

/// The four diagonal neighbours of a cell. Ducts never move diagonally; corners are only inspected by pruning.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Corner {
    /// Above and to the right.
    UpRight,
    /// Above and to the left.
    UpLeft,
    /// Below and to the left.
    DownLeft,
    /// Below and to the right.
    DownRight,
}

impl Corner {
    /// The two orthogonal steps whose cells flank this corner.
    pub fn sides(&self) -> (SquareStep, SquareStep) {
        match self {
            Self::UpRight => (SquareStep::Up, SquareStep::Right),
            Self::UpLeft => (SquareStep::Up, SquareStep::Left),
            Self::DownLeft => (SquareStep::Down, SquareStep::Left),
            Self::DownRight => (SquareStep::Down, SquareStep::Right),
        }
    }
}

impl Step for Corner {
    fn attempt_from(&self, location: Location) -> Location {
        let (vertical, horizontal) = self.sides();
        horizontal.attempt_from(vertical.attempt_from(location))
    }

    fn invert(&self) -> Self {
        match self {
            Self::UpRight => Self::DownLeft,
            Self::UpLeft => Self::DownRight,
            Self::DownLeft => Self::UpRight,
            Self::DownRight => Self::UpLeft,
        }
    }
}

/// Functionality on top of [`Step`] with identical implementation for every step kind.
pub trait Neighborhood: Step {
    /// Get all neighbours of a [`Location`] by attempting every step in `Self::VARIANTS`, in declaration order.
    fn neighbors_of(location: Location) -> impl Iterator<Item = (Self, Location)>;
}

impl<St> Neighborhood for St
where
    St: Step + 'static,
{
    fn neighbors_of(location: Location) -> impl Iterator<Item = (Self, Location)> {
        Self::VARIANTS.iter().map(move |dir| (*dir, dir.attempt_from(location)))
    }
}
