use serde::{Deserialize, Serialize};

use crate::{Card, OccupiedCellError, PlayArea};

/// Request for a bot to do something.
///
/// Every request is answered with exactly one line of JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Request to reset the bot's state for a new game.
    ///
    /// The response should be an [`Okay`].
    NewGame,
    /// Request to pick where to draw the next card from.
    ///
    /// The response should be a [`DrawSource`].
    Draw { view: GameView },
    /// Request to place a card from the hand into the own play area.
    ///
    /// The response should be a [`CardToPlace`], at one of the coordinates
    /// returned by [`PlayArea::empty_neighbors()`].
    Play { view: GameView },
    /// Request to pick a card from the hand for the own discard pile.
    ///
    /// The response should be a single [`Card`].
    Discard { view: GameView },
    /// The bot should shut down.
    Bye,
}

/// Dummy struct for use in bot communication.
///
/// Used to signal an acknowledgement without data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Okay();

/// Everything a player gets to see when asked for a decision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The hand of the player.
    pub hand: Vec<Card>,
    /// The player's own play area.
    pub own_area: Vec<PlacedCard>,
    pub opponent_area: Vec<PlacedCard>,
    /// The opponent's hand, with `null` for cards we have no knowledge of.
    pub opponent_hand: Vec<Option<Card>>,
    /// The top card of each discard pile, `null` for an empty pile.
    ///
    /// The position in this list is the index used in [`DrawSource::Discard`].
    #[serde(default)]
    pub discard_tops: Vec<Option<Card>>,
}

impl GameView {
    pub fn own_play_area(&self) -> Result<PlayArea, OccupiedCellError> {
        PlayArea::from_placed_cards(&self.own_area)
    }

    pub fn opponent_play_area(&self) -> Result<PlayArea, OccupiedCellError> {
        PlayArea::from_placed_cards(&self.opponent_area)
    }
}

/// A card in a play area, including coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCard {
    pub x: i32,
    pub y: i32,
    pub card: Card,
}

/// Where to draw a card from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawSource {
    Deck,
    /// The top card of the discard pile with this index in
    /// [`GameView::discard_tops`].
    Discard(usize),
}

/// Specifies which card to play, and where.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardToPlace {
    pub card: Card,
    pub x: i32,
    pub y: i32,
}
