use crate::{Card, Coordinate};

/// The error type for [`PlayArea::insert()`](crate::PlayArea::insert), i.e. for
/// placing a card on a coordinate that already holds one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OccupiedCellError {
    pub coordinate: Coordinate,
    /// The card that is already on the coordinate.
    pub existing: Card,
    /// The card that could not be placed.
    pub rejected: Card,
}

impl std::error::Error for OccupiedCellError {}

impl std::fmt::Display for OccupiedCellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Card {} was placed at {}, which is already occupied by {}",
            self.rejected, self.coordinate, self.existing
        )
    }
}
