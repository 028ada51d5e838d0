use quickcheck::{Arbitrary, Gen};

use crate::{Card, PlayArea, Species, MAX_RANK, MIN_RANK};

/// A play area whose cards form one 4-connected region around the origin.
#[derive(Clone, Debug)]
pub struct ConnectedArea(pub PlayArea);

/// A hand of up to 8 cards, possibly with duplicates.
#[derive(Clone, Debug)]
pub struct Hand(pub Vec<Card>);

/// An opponent's hand in which some slots are unknown.
#[derive(Clone, Debug)]
pub struct OpponentHand(pub Vec<Option<Card>>);

impl Arbitrary for Species {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Species::ALL).unwrap()
    }
}

impl Arbitrary for Card {
    fn arbitrary(g: &mut Gen) -> Self {
        let rank = u8::arbitrary(g) % (MAX_RANK - MIN_RANK + 1) + MIN_RANK;
        Card::new(Species::arbitrary(g), rank).unwrap()
    }
}

impl Arbitrary for ConnectedArea {
    fn arbitrary(g: &mut Gen) -> Self {
        let target_len = usize::arbitrary(g) % 24 + 1;
        let mut area = PlayArea::new().insert(Card::arbitrary(g), 0, 0).unwrap();
        // Grow the area by stepping off a random occupied cell. Steps onto
        // occupied cells are wasted, so cap the attempts.
        for _ in 0..target_len * 4 {
            if area.len() >= target_len {
                break;
            }
            let occupied: Vec<_> = area.iter().map(|(c, _)| c).collect();
            let from = *g.choose(&occupied).unwrap();
            let neighbors: Vec<_> = from.neighbors().collect();
            let to = *g.choose(&neighbors).unwrap();
            if let Ok(bigger) = area.insert(Card::arbitrary(g), to.x, to.y) {
                area = bigger;
            }
        }
        ConnectedArea(area)
    }
}

impl Arbitrary for Hand {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 9;
        Hand((0..len).map(|_| Card::arbitrary(g)).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Hand))
    }
}

impl Arbitrary for OpponentHand {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 9;
        OpponentHand((0..len).map(|_| Option::<Card>::arbitrary(g)).collect())
    }
}
