//! The dealer and its fixed drawing policy.

use crate::hand::{Hand, HandId, Hands};

/// Returns whether the dealer must draw another card.
///
/// The dealer stands on any hard 17 or more and on soft 18 or more, and hits
/// everything below 17 as well as a soft 17. A bust hand never draws.
#[must_use]
pub fn must_hit(hand: &Hand) -> bool {
    if hand.is_bust() {
        return false;
    }
    let best = hand.max_score();
    best < 17 || (best == 17 && hand.is_soft())
}

/// The dealer: one hand and no wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dealer {
    hand: HandId,
}

impl Dealer {
    /// Creates a dealer playing `hand`.
    #[must_use]
    pub const fn new(hand: HandId) -> Self {
        Self { hand }
    }

    /// Returns the dealer's hand id.
    #[must_use]
    pub const fn hand(&self) -> HandId {
        self.hand
    }

    /// Returns whether the dealer must draw, judged on the face-up cards.
    #[must_use]
    pub fn must_hit(&self, hands: &Hands) -> bool {
        must_hit(&hands[self.hand])
    }
}
