//! What we can conclude from the part of the opponent's hand we know about.
//!
//! The opponent's hand is given as a list of slots. A slot is `None` when we
//! don't know which card is in it, e.g. because it was drawn from the deck.

use crate::{Card, SpeciesSet};

/// The species in which the opponent is known to hold a 1, and can therefore
/// cancel out our 8.
///
/// Unknown slots are ignored: not knowing about a 1 is not the same as the
/// opponent not having it.
pub fn nullifying_species(opponent_hand: &[Option<Card>]) -> SpeciesSet {
    known_cards(opponent_hand)
        .filter(|card| card.is_one())
        .map(|card| card.species())
        .collect()
}

/// The known cards of the opponent's hand, in slot order.
pub fn known_cards(opponent_hand: &[Option<Card>]) -> impl Iterator<Item = Card> + '_ {
    opponent_hand.iter().flatten().copied()
}
