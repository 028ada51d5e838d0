use std::collections::BTreeSet;

use super::{Coordinate, PlayArea};

impl PlayArea {
    /// The coordinates where the next card may be placed.
    ///
    /// These are all empty coordinates that are 4-adjacent to the region of
    /// cards connected to the origin. If there is no card at the origin (in
    /// particular, if the play area is empty), this is just the origin.
    pub fn empty_neighbors(&self) -> BTreeSet<Coordinate> {
        let mut frontier = BTreeSet::new();
        if !self.is_occupied(Coordinate::ORIGIN) {
            frontier.insert(Coordinate::ORIGIN);
            return frontier;
        }

        // Visited cells are tracked by coordinate, since the same card value
        // may well be placed more than once.
        let mut visited = BTreeSet::from([Coordinate::ORIGIN]);
        let mut stack = vec![Coordinate::ORIGIN];
        while let Some(coordinate) = stack.pop() {
            for neighbor in coordinate.neighbors() {
                if !self.is_occupied(neighbor) {
                    frontier.insert(neighbor);
                } else if visited.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }
        frontier
    }
}
