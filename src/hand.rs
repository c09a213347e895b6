//! Hands, their scoring, and the per-round hand arena.

use core::ops::{Index, IndexMut};

use crate::card::Card;

const BLACKJACK: u16 = 21;

/// Computes the achievable totals of the face-up cards.
///
/// Every Ace branches between its values. If 21 is reachable the result is
/// exactly `[21]`. Otherwise bust totals are dropped, unless every total is
/// bust, in which case only the smallest one is kept. The result is sorted and
/// free of duplicates.
#[must_use]
pub fn scores(cards: &[Card]) -> Vec<u16> {
    let mut totals: Vec<u16> = vec![0];

    for card in cards.iter().filter(|card| card.is_face_up()) {
        let mut next = Vec::with_capacity(totals.len() * card.values().len());
        for total in &totals {
            for value in card.values() {
                next.push(total + value);
            }
        }
        next.sort_unstable();
        next.dedup();
        totals = next;
    }

    if totals.contains(&BLACKJACK) {
        return vec![BLACKJACK];
    }

    let min = totals[0];
    if min > BLACKJACK {
        return vec![min];
    }
    totals.retain(|&total| total <= BLACKJACK);
    totals
}

/// An ordered, append-only hand of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn hit(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the achievable totals. See [`scores`].
    #[must_use]
    pub fn scores(&self) -> Vec<u16> {
        scores(&self.cards)
    }

    /// Returns the highest achievable total.
    #[must_use]
    pub fn max_score(&self) -> u16 {
        self.scores().last().copied().unwrap_or_default()
    }

    /// Returns whether every achievable total exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.scores()[0] > BLACKJACK
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn has_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.scores().contains(&BLACKJACK)
    }

    /// Returns whether the best total counts an Ace as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.scores().len() > 1
    }

    /// Returns whether the hand is a pair that may be split.
    ///
    /// Both cards must share at least one point value, so any two ten-valued
    /// cards qualify as well as true pairs.
    #[must_use]
    pub fn can_split(&self) -> bool {
        match self.cards.as_slice() {
            [first, second] => first
                .values()
                .iter()
                .any(|value| second.values().contains(value)),
            _ => false,
        }
    }

    /// Removes and returns the second card of a two-card hand.
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }

    /// Turns every card face up.
    pub fn reveal(&mut self) {
        for card in &mut self.cards {
            card.reveal();
        }
    }

    /// Renders the cards followed by the score summary, e.g. `A♤  (1 / 11)`.
    #[must_use]
    pub fn render(&self) -> String {
        let cards = self
            .cards
            .iter()
            .map(Card::notation)
            .collect::<Vec<_>>()
            .join(", ");
        let scores = self
            .scores()
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(" / ");
        format!("{cards}  ({scores})")
    }
}

/// Stable identifier of a hand within the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandId(usize);

/// Arena owning every hand dealt in a round.
#[derive(Debug, Clone, Default)]
pub struct Hands {
    hands: Vec<Hand>,
}

impl Hands {
    /// Creates an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self { hands: Vec::new() }
    }

    /// Adds an empty hand and returns its id.
    pub fn alloc(&mut self) -> HandId {
        self.hands.push(Hand::new());
        HandId(self.hands.len() - 1)
    }

    /// Returns the hand for `id`, if it belongs to this round.
    #[must_use]
    pub fn get(&self, id: HandId) -> Option<&Hand> {
        self.hands.get(id.0)
    }

    /// Drops every hand. Previously issued ids become invalid.
    pub fn clear(&mut self) {
        self.hands.clear();
    }

    /// Returns the number of hands in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hands.len()
    }

    /// Returns whether the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}

impl Index<HandId> for Hands {
    type Output = Hand;

    fn index(&self, id: HandId) -> &Hand {
        &self.hands[id.0]
    }
}

impl IndexMut<HandId> for Hands {
    fn index_mut(&mut self, id: HandId) -> &mut Hand {
        &mut self.hands[id.0]
    }
}
