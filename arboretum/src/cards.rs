use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The lowest rank printed on a card.
pub const MIN_RANK: u8 = 1;
/// The highest rank printed on a card.
pub const MAX_RANK: u8 = 8;

/// A card in the game, i.e. a tree of some [species](Species) with a rank.
///
/// Cards are plain values: two cards with the same species and rank are equal,
/// no matter where they came from. The rank is always within
/// [`MIN_RANK`]`..=`[`MAX_RANK`], which is checked on construction and when
/// deserializing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedCard")]
pub struct Card {
    species: Species,
    rank: u8,
}

/// The species of a [card](Card).
///
/// The order of the variants is significant: it is the tie-break order
/// whenever species are ranked against each other.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Species {
    #[serde(rename = "C")]
    Cassia,
    #[serde(rename = "D")]
    Dogwood,
    #[serde(rename = "J")]
    Jacaranda,
    #[serde(rename = "M")]
    Maple,
    #[serde(rename = "O")]
    Oak,
    #[serde(rename = "R")]
    RoyalPoinciana,
}

impl Species {
    /// All species, in enumeration order.
    pub const ALL: [Species; 6] = [
        Species::Cassia,
        Species::Dogwood,
        Species::Jacaranda,
        Species::Maple,
        Species::Oak,
        Species::RoyalPoinciana,
    ];

    pub fn letter(self) -> char {
        match self {
            Species::Cassia => 'C',
            Species::Dogwood => 'D',
            Species::Jacaranda => 'J',
            Species::Maple => 'M',
            Species::Oak => 'O',
            Species::RoyalPoinciana => 'R',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Species::ALL.into_iter().find(|s| s.letter() == letter)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl Card {
    pub fn new(species: Species, rank: u8) -> Result<Self, InvalidCard> {
        if !(MIN_RANK..=MAX_RANK).contains(&rank) {
            return Err(InvalidCard::RankOutOfRange(rank));
        }
        Ok(Self { species, rank })
    }

    pub fn species(self) -> Species {
        self.species
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Whether this is a 1, which cancels the opponent's 8 of the same species.
    pub fn is_one(self) -> bool {
        self.rank == MIN_RANK
    }

    pub fn is_eight(self) -> bool {
        self.rank == MAX_RANK
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.species, self.rank)
    }
}

/// The error type for [`Card::new()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidCard {
    RankOutOfRange(u8),
}

impl std::error::Error for InvalidCard {}

impl std::fmt::Display for InvalidCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidCard::RankOutOfRange(rank) => write!(
                f,
                "Card rank {} is outside of the range {}..={}",
                rank, MIN_RANK, MAX_RANK
            ),
        }
    }
}

// The serialized form, before the rank has been checked.
#[derive(Deserialize)]
struct UncheckedCard {
    species: Species,
    rank: u8,
}

impl TryFrom<UncheckedCard> for Card {
    type Error = InvalidCard;

    fn try_from(value: UncheckedCard) -> Result<Self, Self::Error> {
        Card::new(value.species, value.rank)
    }
}

/// The error type for the [`FromStr`] instance of [`Card`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFromStrErr {
    WrongLength,
    InvalidSpecies,
    InvalidRank,
}

impl std::error::Error for CardFromStrErr {}

impl std::fmt::Display for CardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardFromStrErr::WrongLength => write!(f, "A card code must have exactly two characters"),
            CardFromStrErr::InvalidSpecies => write!(f, "Unknown species letter in card code"),
            CardFromStrErr::InvalidRank => {
                write!(f, "Card rank must be a digit from {} to {}", MIN_RANK, MAX_RANK)
            }
        }
    }
}

impl FromStr for Card {
    type Err = CardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let species_char = chars.next().ok_or(CardFromStrErr::WrongLength)?;
        let rank_char = chars.next().ok_or(CardFromStrErr::WrongLength)?;
        if chars.next().is_some() {
            return Err(CardFromStrErr::WrongLength);
        }
        let species = Species::from_letter(species_char).ok_or(CardFromStrErr::InvalidSpecies)?;
        let rank = rank_char
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .ok_or(CardFromStrErr::InvalidRank)?;
        Card::new(species, rank).map_err(|_| CardFromStrErr::InvalidRank)
    }
}

/// Shorthand for creating cards from a two-character string.
///
/// The first character is the [species](Species) letter, the second is the
/// rank from 1 to 8.
///
/// This macro is just calling the [`FromStr`] instance of [`Card`].
/// ```
/// # use arboretum::{card, Card, Species};
/// assert_eq!(card!("J5"), Card::new(Species::Jacaranda, 5).unwrap());
/// ```
#[macro_export]
macro_rules! card {
    ($code:literal) => {
        <$crate::Card as std::str::FromStr>::from_str($code)
            .expect("Invalid card code given to card! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use card;
