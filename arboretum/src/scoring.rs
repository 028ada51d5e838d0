use crate::{analyze, known_cards, Card, PlayArea, Species};

/// Weight of the hand's species scores relative to cards already on the board,
/// since the hand has not been played yet.
pub const HAND_WEIGHT: f64 = 0.5;

/// How much the cards of one species in a play area are worth.
///
/// This is the seam for a path-based scorer: an implementation gets the whole
/// area plus the opponent's hand, and decides on its own which arrangements
/// of the species count.
pub trait BoardScoring {
    fn species_value(
        &self,
        area: &PlayArea,
        species: Species,
        opponent_hand: &[Option<Card>],
    ) -> u32;
}

/// Values a species as the sum of the ranks of its cards in the play area,
/// regardless of how they are arranged.
#[derive(Clone, Copy, Debug, Default)]
pub struct RankSum;

impl BoardScoring for RankSum {
    fn species_value(
        &self,
        area: &PlayArea,
        species: Species,
        _opponent_hand: &[Option<Card>],
    ) -> u32 {
        area.cards_of(species)
            .map(|(_, card)| u32::from(card.rank()))
            .sum()
    }
}

/// Evaluates positions with a given [`BoardScoring`] rule.
#[derive(Clone, Copy, Debug, Default)]
pub struct PositionScorer<B = RankSum> {
    board_scoring: B,
}

impl<B: BoardScoring> PositionScorer<B> {
    pub fn new(board_scoring: B) -> Self {
        Self { board_scoring }
    }

    /// The value of the play area plus the damped value of the hand.
    pub fn score(&self, area: &PlayArea, hand: &[Card], opponent_hand: &[Option<Card>]) -> f64 {
        let board_score: u32 = Species::ALL
            .into_iter()
            .map(|s| self.board_scoring.species_value(area, s, opponent_hand))
            .sum();
        let hand_score: f64 = analyze(hand)
            .iter()
            .filter(|(_, a)| a.count > 0)
            .map(|(_, a)| f64::from(a.score) * HAND_WEIGHT)
            .sum();
        f64::from(board_score) + hand_score
    }

    /// Whether our position is strictly better than the opponent's.
    ///
    /// The opponent is scored with only their known cards as their hand, and
    /// with our hand (which they don't fully know, but we do) as their
    /// opponent's hand.
    pub fn should_accelerate(
        &self,
        our_area: &PlayArea,
        our_hand: &[Card],
        opponent_hand: &[Option<Card>],
        opponent_area: &PlayArea,
    ) -> bool {
        let ours = self.score(our_area, our_hand, opponent_hand);
        let their_hand: Vec<Card> = known_cards(opponent_hand).collect();
        let our_hand_seen_by_them: Vec<Option<Card>> = our_hand.iter().copied().map(Some).collect();
        let theirs = self.score(opponent_area, &their_hand, &our_hand_seen_by_them);
        ours > theirs
    }
}

/// [`PositionScorer::score()`] with the [`RankSum`] rule.
pub fn score(area: &PlayArea, hand: &[Card], opponent_hand: &[Option<Card>]) -> f64 {
    PositionScorer::new(RankSum).score(area, hand, opponent_hand)
}

/// [`PositionScorer::should_accelerate()`] with the [`RankSum`] rule.
pub fn should_accelerate(
    our_area: &PlayArea,
    our_hand: &[Card],
    opponent_hand: &[Option<Card>],
    opponent_area: &PlayArea,
) -> bool {
    PositionScorer::new(RankSum).should_accelerate(our_area, our_hand, opponent_hand, opponent_area)
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::{ConnectedArea, Hand, OpponentHand};
    use crate::card;

    quickcheck! {
        fn hand_order_does_not_matter(area: ConnectedArea, hand: Hand, opponent: OpponentHand) -> bool {
            let mut reversed = hand.0.clone();
            reversed.reverse();
            let mut sorted = hand.0.clone();
            sorted.sort();
            let s = score(&area.0, &hand.0, &opponent.0);
            s == score(&area.0, &reversed, &opponent.0) && s == score(&area.0, &sorted, &opponent.0)
        }

        fn board_part_is_the_rank_sum(area: ConnectedArea) -> bool {
            let expected: u32 = area.0.iter().map(|(_, c)| u32::from(c.rank())).sum();
            score(&area.0, &[], &[]) == f64::from(expected)
        }
    }

    fn area_of(cards: &[(Card, i32, i32)]) -> PlayArea {
        cards
            .iter()
            .try_fold(PlayArea::new(), |area, &(card, x, y)| area.insert(card, x, y))
            .unwrap()
    }

    #[test]
    fn empty_position_is_worth_nothing() {
        let area = PlayArea::new();
        for species in Species::ALL {
            assert_eq!(RankSum.species_value(&area, species, &[]), 0);
        }
        assert_eq!(score(&area, &[], &[]), 0.0);
    }

    #[test]
    fn board_and_hand_combined() {
        let area = area_of(&[(card!("J5"), 0, 0), (card!("J2"), 1, 0), (card!("O7"), 0, 1)]);
        assert_eq!(RankSum.species_value(&area, Species::Jacaranda, &[]), 7);
        assert_eq!(RankSum.species_value(&area, Species::Oak, &[]), 7);
        // Board: 14. Hand: J score 7 and R score 10, both halved.
        let hand = [card!("J1"), card!("J5"), card!("R8")];
        assert_eq!(score(&area, &hand, &[Some(card!("R1"))]), 14.0 + 3.5 + 5.0);
    }

    #[test]
    fn accelerate_only_when_strictly_ahead() {
        let ours = area_of(&[(card!("C6"), 0, 0)]);
        let theirs = area_of(&[(card!("D6"), 0, 0)]);
        assert!(!should_accelerate(&ours, &[], &[], &theirs));

        let hand = [card!("C2")];
        assert!(should_accelerate(&ours, &hand, &[None, None], &theirs));
    }

    #[test]
    fn unknown_opponent_slots_are_not_scored() {
        let ours = area_of(&[(card!("C6"), 0, 0)]);
        let theirs = area_of(&[(card!("D5"), 0, 0)]);
        // Their known D1 is worth 2 * 0.5, which brings them to 6.
        let opponent = [Some(card!("D1")), None, None, None];
        assert!(!should_accelerate(&ours, &[], &opponent, &theirs));
        assert!(should_accelerate(&ours, &[], &[None, None, None, None], &theirs));
    }

    struct OnlyOak;

    impl BoardScoring for OnlyOak {
        fn species_value(&self, area: &PlayArea, species: Species, _: &[Option<Card>]) -> u32 {
            match species {
                Species::Oak => RankSum.species_value(area, species, &[]),
                _ => 0,
            }
        }
    }

    #[test]
    fn custom_board_scoring() {
        let area = area_of(&[(card!("J5"), 0, 0), (card!("O3"), 1, 0)]);
        assert_eq!(PositionScorer::new(OnlyOak).score(&area, &[], &[]), 3.0);
    }
}
