use std::iter::FusedIterator;

use crate::Species;

/// A compact set of [`Species`].
///
/// ```
/// use arboretum::{Species, SpeciesSet};
/// let mut set = SpeciesSet::new();
/// // This is an immutable data type, so `insert` returns a new `SpeciesSet`.
/// set = set.insert(Species::Oak);
/// set = set.insert(Species::Oak); // Inserting a second time has no effect
/// set = set.insert(Species::Cassia);
/// assert_eq!(Vec::from_iter(set), vec![Species::Cassia, Species::Oak]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SpeciesSet {
    // Only the low 6 bits are used.
    bits: u8,
}

impl SpeciesSet {
    /// Creates a new, empty set.
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn len(self) -> u32 {
        self.bits.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn contains(self, species: Species) -> bool {
        self.bits & (1u8 << species.index()) != 0
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, species: Species) -> Self {
        Self {
            bits: self.bits | (1u8 << species.index()),
        }
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn remove(self, species: Species) -> Self {
        Self {
            bits: self.bits & !(1u8 << species.index()),
        }
    }
}

impl std::ops::BitAnd for SpeciesSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl std::ops::BitOr for SpeciesSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl std::ops::BitOrAssign for SpeciesSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl FromIterator<Species> for SpeciesSet {
    fn from_iter<T: IntoIterator<Item = Species>>(iter: T) -> Self {
        iter.into_iter().fold(Self::new(), Self::insert)
    }
}

impl IntoIterator for SpeciesSet {
    type Item = Species;

    type IntoIter = SpeciesSetIter;

    fn into_iter(self) -> Self::IntoIter {
        SpeciesSetIter { bits: self.bits }
    }
}

/// Iterator for a [`SpeciesSet`] that returns species in enumeration order.
#[derive(Clone, Copy, Debug)]
pub struct SpeciesSetIter {
    bits: u8,
}

impl Iterator for SpeciesSetIter {
    type Item = Species;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            let idx = self.bits.trailing_zeros() as usize;
            // Clear the flag corresponding to this species
            self.bits ^= 1u8 << idx;
            Some(Species::ALL[idx])
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.bits.count_ones() as usize;
        (size, Some(size))
    }
}

impl ExactSizeIterator for SpeciesSetIter {}

impl FusedIterator for SpeciesSetIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_operations() {
        let a = SpeciesSet::from_iter([Species::Cassia, Species::Maple]);
        let b = SpeciesSet::from_iter([Species::Maple, Species::RoyalPoinciana]);
        assert_eq!(Vec::from_iter(a & b), vec![Species::Maple]);
        assert_eq!((a | b).len(), 3);
        assert!(!a.remove(Species::Cassia).contains(Species::Cassia));
        assert!(SpeciesSet::from_iter(Species::ALL).into_iter().eq(Species::ALL));
    }
}
