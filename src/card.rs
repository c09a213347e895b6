//! Card types.

use core::fmt;
use core::hash::{Hash, Hasher};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the symbol used in card notation.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♧',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♤',
        }
    }

    /// Returns whether the suit is printed in red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Diamonds | Self::Hearts)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace, worth 1 or 11.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in canonical deck order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the point values this rank can count as.
    #[must_use]
    pub const fn values(self) -> &'static [u16] {
        match self {
            Self::Ace => &[1, 11],
            Self::Two => &[2],
            Self::Three => &[3],
            Self::Four => &[4],
            Self::Five => &[5],
            Self::Six => &[6],
            Self::Seven => &[7],
            Self::Eight => &[8],
            Self::Nine => &[9],
            Self::Ten | Self::Jack | Self::Queen | Self::King => &[10],
        }
    }

    /// Returns the character used in card notation.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'X',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }
}

/// Notation shown for a face-down card.
pub const HIDDEN_NOTATION: &str = "🂠 ?";

/// A playing card.
///
/// Two cards are equal when they share rank and suit; whether they are face up
/// does not take part in equality or hashing.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// Creates a new face-up card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: true,
        }
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Returns the card turned face up.
    #[must_use]
    pub const fn face_up(mut self) -> Self {
        self.face_up = true;
        self
    }

    /// Returns the card turned face down.
    #[must_use]
    pub const fn face_down(mut self) -> Self {
        self.face_up = false;
        self
    }

    /// Turns the card face up in place.
    pub const fn reveal(&mut self) {
        self.face_up = true;
    }

    /// Returns the point values of the card.
    #[must_use]
    pub const fn values(&self) -> &'static [u16] {
        self.rank.values()
    }

    /// Returns the short notation, e.g. `A♤`, or the hidden marker.
    #[must_use]
    pub fn notation(&self) -> String {
        if self.face_up {
            format!("{}{}", self.rank.symbol(), self.suit.symbol())
        } else {
            HIDDEN_NOTATION.to_owned()
        }
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
