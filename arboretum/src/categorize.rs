use crate::{analyze, nullifying_species, Card, Species};

/// How many species are protected from being played.
pub const SAVE_SPECIES_COUNT: usize = 2;
/// The maximum number of cards per save species that are held back.
pub const MAX_SAVED_PER_SPECIES: usize = 2;

/// A split of a hand into cards worth keeping and cards that can go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Categorization {
    /// Cards to hold back, in hand order.
    pub save_cards: Vec<Card>,
    /// Cards to play or discard, in hand order.
    pub play_cards: Vec<Card>,
    /// The best-scoring species of the hand, best first.
    pub save_species: [Species; SAVE_SPECIES_COUNT],
}

/// Splits the hand into save and play cards.
///
/// The two species with the highest [score](crate::SpeciesAnalysis::score)
/// are the save species, ties going to the earlier species. Going through the
/// hand in order, a card is saved if it belongs to a save species and fewer
/// than [`MAX_SAVED_PER_SPECIES`] cards of its species have been saved so far.
/// An 8 is never saved if the opponent is known to hold the 1 of its species.
pub fn categorize(hand: &[Card], opponent_hand: &[Option<Card>]) -> Categorization {
    let analysis = analyze(hand);
    let ranking = analysis.species_by_score();
    let save_species = [ranking[0], ranking[1]];
    let nullified = nullifying_species(opponent_hand);

    let mut save_cards: Vec<Card> = Vec::new();
    let mut play_cards = Vec::new();
    for &card in hand {
        let species = card.species();
        if card.is_eight() && nullified.contains(species) {
            play_cards.push(card);
            continue;
        }
        let already_saved = save_cards.iter().filter(|c| c.species() == species).count();
        if save_species.contains(&species) && already_saved < MAX_SAVED_PER_SPECIES {
            save_cards.push(card);
        } else {
            play_cards.push(card);
        }
    }

    Categorization {
        save_cards,
        play_cards,
        save_species,
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::{Hand, OpponentHand};
    use crate::card;

    quickcheck! {
        fn at_most_two_saved_per_species(hand: Hand, opponent: OpponentHand) -> bool {
            let cat = categorize(&hand.0, &opponent.0);
            Species::ALL.into_iter().all(|s| {
                cat.save_cards.iter().filter(|c| c.species() == s).count() <= MAX_SAVED_PER_SPECIES
            })
        }

        fn partition_keeps_every_card(hand: Hand, opponent: OpponentHand) -> bool {
            let cat = categorize(&hand.0, &opponent.0);
            let mut all: Vec<Card> = cat.save_cards.iter().chain(&cat.play_cards).copied().collect();
            let mut expected = hand.0.clone();
            all.sort();
            expected.sort();
            all == expected && cat.save_species[0] != cat.save_species[1]
        }

        fn nullified_eights_are_played(hand: Hand, opponent: OpponentHand) -> bool {
            let nullified = nullifying_species(&opponent.0);
            let cat = categorize(&hand.0, &opponent.0);
            cat.save_cards
                .iter()
                .all(|c| !(c.is_eight() && nullified.contains(c.species())))
        }
    }

    #[test]
    fn nullified_eight_goes_to_play() {
        let hand = [card!("J1"), card!("J5"), card!("R8")];
        let opponent = [Some(card!("R1")), None, None];
        assert_eq!(
            categorize(&hand, &opponent),
            Categorization {
                save_cards: vec![card!("J1"), card!("J5")],
                play_cards: vec![card!("R8")],
                save_species: [Species::RoyalPoinciana, Species::Jacaranda],
            }
        );
    }

    #[test]
    fn eight_without_known_one_is_saved() {
        let hand = [card!("J1"), card!("J5"), card!("R8")];
        let cat = categorize(&hand, &[None, None, None]);
        assert_eq!(cat.save_cards, vec![card!("J1"), card!("J5"), card!("R8")]);
        assert!(cat.play_cards.is_empty());
    }

    #[test]
    fn cap_is_applied_in_hand_order() {
        let hand = [card!("M2"), card!("M7"), card!("M4"), card!("O1")];
        let cat = categorize(&hand, &[]);
        assert_eq!(cat.save_species, [Species::Maple, Species::Oak]);
        assert_eq!(cat.save_cards, vec![card!("M2"), card!("M7"), card!("O1")]);
        assert_eq!(cat.play_cards, vec![card!("M4")]);
    }

    #[test]
    fn empty_hand() {
        let cat = categorize(&[], &[]);
        assert!(cat.save_cards.is_empty());
        assert!(cat.play_cards.is_empty());
        assert_eq!(cat.save_species, [Species::Cassia, Species::Dogwood]);
    }
}
