//! The deck and its shuffling primitives.

use core::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Shuffle seed that asks for a fresh, time-derived permutation.
pub const UNIQUE_SHUFFLE: u64 = 0;

static UNIQUE_SHUFFLES: AtomicU64 = AtomicU64::new(0);

fn unique_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64);
    let count = UNIQUE_SHUFFLES.fetch_add(1, Ordering::Relaxed);
    nanos ^ count.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// An ordered deck of cards. The last card is the top of the deck.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a deck holding the given cards, the last one on top.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Resets the deck to the canonical 52 cards, suit-major and rank-minor.
    pub fn init(&mut self) {
        self.cards.clear();
        self.cards.reserve(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(rank, suit));
            }
        }
    }

    /// Shuffles the deck.
    ///
    /// [`UNIQUE_SHUFFLE`] draws a time-derived seed; any other seed yields the
    /// same permutation every time it is applied to the same starting order.
    pub fn shuffle(&mut self, seed: u64) {
        let seed = if seed == UNIQUE_SHUFFLE {
            unique_seed()
        } else {
            seed
        };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Removes and returns the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Arranges for `card` to be the next card popped.
    ///
    /// A matching card already in the deck is moved to the top; otherwise a
    /// fresh copy is placed on top.
    pub fn force_next(&mut self, card: Card) {
        if let Some(index) = self.cards.iter().position(|c| *c == card) {
            let existing = self.cards.remove(index);
            self.cards.push(existing);
        } else {
            self.cards.push(card);
        }
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Renders the deck as a card back with the remaining count.
    #[must_use]
    pub fn render(&self) -> String {
        format!("🂠  ×{}", self.cards.len())
    }
}
