use crate::{Card, Species};

/// Aggregate statistics about the cards of one species in a hand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpeciesAnalysis {
    pub count: u32,
    pub total_rank: u32,
    pub has_one: bool,
    pub has_eight: bool,
    /// `total_rank`, plus 1 for holding a 1, plus 2 for holding an 8.
    pub score: u32,
    /// The ranks in hand order.
    pub ranks: Vec<u8>,
}

impl SpeciesAnalysis {
    fn add(&mut self, card: Card) {
        self.count += 1;
        self.total_rank += u32::from(card.rank());
        self.has_one |= card.is_one();
        self.has_eight |= card.is_eight();
        self.ranks.push(card.rank());
        self.score = self.total_rank + u32::from(self.has_one) + 2 * u32::from(self.has_eight);
    }
}

/// A [`SpeciesAnalysis`] for every species.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HandAnalysis {
    by_species: [SpeciesAnalysis; 6],
}

impl HandAnalysis {
    pub fn get(&self, species: Species) -> &SpeciesAnalysis {
        &self.by_species[species.index()]
    }

    /// All species with their analysis, in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Species, &SpeciesAnalysis)> {
        Species::ALL.into_iter().zip(self.by_species.iter())
    }

    /// The species sorted by descending score.
    ///
    /// Species with equal scores stay in enumeration order.
    pub fn species_by_score(&self) -> [Species; 6] {
        let mut ranking = Species::ALL;
        // sort_by_key is stable
        ranking.sort_by_key(|&s| std::cmp::Reverse(self.get(s).score));
        ranking
    }
}

impl std::ops::Index<Species> for HandAnalysis {
    type Output = SpeciesAnalysis;

    fn index(&self, species: Species) -> &Self::Output {
        self.get(species)
    }
}

/// Summarizes a hand per species. Species that are not in the hand get an
/// all-zero analysis.
pub fn analyze(hand: &[Card]) -> HandAnalysis {
    let mut analysis = HandAnalysis::default();
    for &card in hand {
        analysis.by_species[card.species().index()].add(card);
    }
    analysis
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::Hand;
    use crate::card;

    quickcheck! {
        fn counts_add_up(hand: Hand) -> bool {
            let analysis = analyze(&hand.0);
            let total: u32 = analysis.iter().map(|(_, a)| a.count).sum();
            total as usize == hand.0.len()
                && analysis.iter().all(|(_, a)| a.ranks.len() as u32 == a.count)
        }
    }

    #[test]
    fn empty_hand_is_all_zero() {
        let analysis = analyze(&[]);
        assert_eq!(analysis.iter().count(), 6);
        for (_, a) in analysis.iter() {
            assert_eq!(*a, SpeciesAnalysis::default());
        }
    }

    #[test]
    fn bonus_for_ones_and_eights() {
        let analysis = analyze(&[card!("J1"), card!("J5"), card!("R8")]);
        assert_eq!(
            analysis[Species::Jacaranda],
            SpeciesAnalysis {
                count: 2,
                total_rank: 6,
                has_one: true,
                has_eight: false,
                score: 7,
                ranks: vec![1, 5],
            }
        );
        assert_eq!(
            analysis[Species::RoyalPoinciana],
            SpeciesAnalysis {
                count: 1,
                total_rank: 8,
                has_one: false,
                has_eight: true,
                score: 10,
                ranks: vec![8],
            }
        );
        assert_eq!(analysis[Species::Oak].count, 0);
    }

    #[test]
    fn ranking_is_stable() {
        let analysis = analyze(&[card!("O3"), card!("D3"), card!("M5")]);
        assert_eq!(
            analysis.species_by_score(),
            [
                Species::Maple,
                Species::Dogwood,
                Species::Oak,
                Species::Cassia,
                Species::Jacaranda,
                Species::RoyalPoinciana,
            ]
        );
    }
}
