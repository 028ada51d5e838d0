use std::cmp::Ordering;

use arboretum::{
    analyze, categorize, BoardScoring, Card, CardToPlace, DrawSource, PlayArea, PositionScorer,
    RankSum,
};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

/// Picks draws, plays and discards based on the categorizer and the position
/// scorer.
///
/// All decisions are deterministic up to ties between equally good options,
/// which are broken with the given random number generator.
pub struct MoveSelector<R, B = RankSum> {
    rng: R,
    scorer: PositionScorer<B>,
}

impl<R: Rng> MoveSelector<R> {
    pub fn new(rng: R) -> Self {
        Self::with_scorer(rng, PositionScorer::new(RankSum))
    }
}

impl<R: Rng, B: BoardScoring> MoveSelector<R, B> {
    pub fn with_scorer(rng: R, scorer: PositionScorer<B>) -> Self {
        Self { rng, scorer }
    }

    /// Takes a discard pile's top card if it would be saved once in hand,
    /// preferring the card that adds the most to its species' score.
    /// Otherwise draws from the deck.
    pub fn choose_draw(
        &mut self,
        hand: &[Card],
        opponent_hand: &[Option<Card>],
        discard_tops: &[Option<Card>],
    ) -> DrawSource {
        let before = analyze(hand);
        let mut top_choices = Vec::new();
        let mut top_gain = 0;
        for (pile_idx, &top) in discard_tops.iter().enumerate() {
            let Some(card) = top else {
                continue;
            };
            // With the new card in front, it is the first card that gets
            // categorized, so it is saved iff it leads the save cards.
            let mut new_hand = Vec::with_capacity(hand.len() + 1);
            new_hand.push(card);
            new_hand.extend_from_slice(hand);
            let categorization = categorize(&new_hand, opponent_hand);
            if categorization.save_cards.first() != Some(&card) {
                continue;
            }
            let after = analyze(&new_hand);
            let gain = after[card.species()].score - before[card.species()].score;
            trace!(pile_idx, %card, gain, "Discard pile candidate");
            match gain.cmp(&top_gain) {
                Ordering::Less => {}
                Ordering::Equal => top_choices.push(pile_idx),
                Ordering::Greater => {
                    top_choices = vec![pile_idx];
                    top_gain = gain;
                }
            }
        }
        let source = top_choices
            .choose(&mut self.rng)
            .map_or(DrawSource::Deck, |&idx| DrawSource::Discard(idx));
        debug!(?source, "Chose draw source");
        source
    }

    /// Picks the card and coordinate that maximize the position score after
    /// playing.
    ///
    /// Only the categorizer's play cards are considered, unless we are ahead
    /// of the opponent (then any card may go) or there are no play cards.
    /// Returns `None` if the hand is empty.
    pub fn choose_play(
        &mut self,
        area: &PlayArea,
        hand: &[Card],
        opponent_hand: &[Option<Card>],
        opponent_area: &PlayArea,
    ) -> Option<CardToPlace> {
        let categorization = categorize(hand, opponent_hand);
        let accelerate = self
            .scorer
            .should_accelerate(area, hand, opponent_hand, opponent_area);
        let candidates = if accelerate || categorization.play_cards.is_empty() {
            hand.to_vec()
        } else {
            categorization.play_cards
        };
        debug!(accelerate, num_candidates = candidates.len(), "Choosing a play");

        let frontier = area.empty_neighbors();
        let mut top_choices: Vec<CardToPlace> = Vec::new();
        let mut top_score = f64::NEG_INFINITY;
        for &card in &candidates {
            let rest_of_hand = without(hand, card);
            for coordinate in &frontier {
                let Ok(new_area) = area.insert(card, coordinate.x, coordinate.y) else {
                    continue;
                };
                let score = self.scorer.score(&new_area, &rest_of_hand, opponent_hand);
                trace!(%card, %coordinate, score, "Play candidate");
                let card_to_place = CardToPlace {
                    card,
                    x: coordinate.x,
                    y: coordinate.y,
                };
                match score.total_cmp(&top_score) {
                    Ordering::Less => {}
                    Ordering::Equal => top_choices.push(card_to_place),
                    Ordering::Greater => {
                        top_choices = vec![card_to_place];
                        top_score = score;
                    }
                }
            }
        }
        let choice = top_choices.choose(&mut self.rng).copied();
        debug!(?choice, top_score, "Chose play");
        choice
    }

    /// Picks the lowest-ranked play card, or the lowest-ranked card of the
    /// hand if everything is worth saving. Returns `None` if the hand is empty.
    pub fn choose_discard(&mut self, hand: &[Card], opponent_hand: &[Option<Card>]) -> Option<Card> {
        let categorization = categorize(hand, opponent_hand);
        let candidates = if categorization.play_cards.is_empty() {
            hand
        } else {
            categorization.play_cards.as_slice()
        };
        let lowest = candidates.iter().map(|c| c.rank()).min()?;
        let lowest_cards: Vec<Card> = candidates
            .iter()
            .copied()
            .filter(|c| c.rank() == lowest)
            .collect();
        let choice = lowest_cards.choose(&mut self.rng).copied();
        debug!(?choice, "Chose discard");
        choice
    }
}

// Removes one copy of `card` from the hand.
fn without(hand: &[Card], card: Card) -> Vec<Card> {
    let mut rest = hand.to_vec();
    if let Some(pos) = rest.iter().position(|&c| c == card) {
        rest.remove(pos);
    }
    rest
}
