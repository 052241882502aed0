/// The state of one cell of a [`Grid`](crate::Grid).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Cell {
    /// A room the duct may pass through and has not yet visited.
    #[default]
    Free,
    /// A border cell, or a room we do not own, known to be joined to the duct or the outside.
    OwnedBlocked,
    /// A room we do not own that has not yet been joined to the duct. Only present when contiguity is not assumed.
    PendingBlocked,
    /// Where the duct starts.
    Start,
    /// Where the duct ends.
    End,
    /// Occupied by the duct currently being laid.
    OnPath,
}

impl Cell {
    /// Whether the duct may not step here.
    #[inline]
    pub fn is_blocking(self) -> bool {
        matches!(self, Self::OwnedBlocked | Self::PendingBlocked | Self::OnPath)
    }

    // pending cells are neither walls nor open, so no pruning pattern matches on them
    #[inline]
    pub(crate) fn is_wall(self) -> bool {
        matches!(self, Self::OwnedBlocked | Self::OnPath)
    }

    #[inline]
    pub(crate) fn is_open(self) -> bool {
        matches!(self, Self::Free | Self::Start | Self::End)
    }

    pub(crate) fn display(self) -> char {
        match self {
            Self::Free => ' ',
            Self::OwnedBlocked => 'X',
            Self::PendingBlocked => 'U',
            Self::Start => 'S',
            Self::End => 'E',
            Self::OnPath => '*',
        }
    }
}
