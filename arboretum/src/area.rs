mod bbox;
mod error;
mod frontier;

use std::collections::BTreeMap;

pub use bbox::*;
pub use error::*;
use serde::{Deserialize, Serialize};

use crate::{visualize_area, Card, PlacedCard, Species};

/// A position in the play area. Both axes are unbounded in either direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// Where the first card of every play area goes.
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The up to four 4-adjacent coordinates.
    ///
    /// Neighbors that would lie outside of the `i32` range are left out.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        let Coordinate { x, y } = self;
        [
            x.checked_sub(1).map(|x| (x, y)),
            x.checked_add(1).map(|x| (x, y)),
            y.checked_sub(1).map(|y| (x, y)),
            y.checked_add(1).map(|y| (x, y)),
        ]
        .into_iter()
        .flatten()
        .map(|(x, y)| Coordinate { x, y })
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The cards a player has laid out in front of them.
///
/// This is a persistent value: [`Self::insert()`] returns a new play area and
/// leaves the original untouched.
///
/// The occupied coordinates are expected to form a single 4-connected region
/// that contains the origin. This is not checked here, it's up to the caller to
/// only place cards on coordinates from [`Self::empty_neighbors()`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayArea {
    cards: BTreeMap<Coordinate, Card>,
}

impl PlayArea {
    /// Creates an empty play area.
    pub fn new() -> Self {
        Self {
            cards: BTreeMap::new(),
        }
    }

    /// Builds a play area from its wire representation.
    pub fn from_placed_cards(placed_cards: &[PlacedCard]) -> Result<Self, OccupiedCellError> {
        let mut cards = BTreeMap::new();
        for &PlacedCard { x, y, card } in placed_cards {
            let coordinate = Coordinate { x, y };
            if let Some(&existing) = cards.get(&coordinate) {
                return Err(OccupiedCellError {
                    coordinate,
                    existing,
                    rejected: card,
                });
            }
            cards.insert(coordinate, card);
        }
        Ok(Self { cards })
    }

    /// Returns a new play area with `card` at `(x, y)`.
    ///
    /// If the coordinate is occupied, an error is returned instead of
    /// overwriting the existing card.
    pub fn insert(&self, card: Card, x: i32, y: i32) -> Result<PlayArea, OccupiedCellError> {
        let coordinate = Coordinate { x, y };
        if let Some(existing) = self.get(x, y) {
            return Err(OccupiedCellError {
                coordinate,
                existing,
                rejected: card,
            });
        }
        let mut cards = self.cards.clone();
        cards.insert(coordinate, card);
        Ok(PlayArea { cards })
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Card> {
        self.cards.get(&Coordinate { x, y }).copied()
    }

    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.cards.contains_key(&coordinate)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All placed cards, ordered by x first, then y.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Card)> + '_ {
        self.cards.iter().map(|(&coordinate, &card)| (coordinate, card))
    }

    pub fn cards_of(&self, species: Species) -> impl Iterator<Item = (Coordinate, Card)> + '_ {
        self.iter().filter(move |(_, card)| card.species() == species)
    }

    /// The smallest area enclosing all cards, or `None` if there are no cards.
    pub fn bbox(&self) -> Option<BoundingBox> {
        BoundingBox::from_coordinates_iter(self.cards.keys().map(|c| (c.x, c.y)))
    }

    pub fn to_placed_cards(&self) -> Vec<PlacedCard> {
        self.iter()
            .map(|(Coordinate { x, y }, card)| PlacedCard { x, y, card })
            .collect()
    }
}

impl std::fmt::Display for PlayArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_area(self))
    }
}
