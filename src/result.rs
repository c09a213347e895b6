//! Settlement of a bet against the dealer.

use crate::hand::Hand;
use crate::money::Money;

/// Payout multiplier applied to a wager at settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinFactor {
    /// The wager is lost (0×).
    Lose,
    /// The wager is returned (1×).
    Push,
    /// The wager is returned with even money (2×).
    Win,
    /// The wager is returned with 3:2 (2.5×).
    Blackjack,
}

impl WinFactor {
    /// Returns the multiplier in halves, which keeps 2.5× exact.
    #[must_use]
    pub const fn halves(self) -> u64 {
        match self {
            Self::Lose => 0,
            Self::Push => 2,
            Self::Win => 4,
            Self::Blackjack => 5,
        }
    }

    /// Returns the multiplier.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Lose => 0.0,
            Self::Push => 1.0,
            Self::Win => 2.0,
            Self::Blackjack => 2.5,
        }
    }

    /// Returns the amount credited for a wager.
    #[must_use]
    pub const fn payout(self, wager: Money) -> Money {
        wager.scale_halves(self.halves())
    }

    /// Returns the verb used when logging the settlement.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Lose => "loses",
            Self::Push => "gets back",
            Self::Win => "wins",
            Self::Blackjack => "wins with blackjack",
        }
    }
}

/// Decides how a bet's hand fares against the dealer's final hand.
///
/// Checked in order: equal best totals push, a bust hand loses, a blackjack
/// pays 2.5×, a bust dealer pays 2×, a higher total pays 2×, anything else
/// loses.
#[must_use]
pub fn win_factor(hand: &Hand, dealer: &Hand) -> WinFactor {
    let hand_score = hand.max_score();
    let dealer_score = dealer.max_score();

    if hand_score == dealer_score {
        WinFactor::Push
    } else if hand.is_bust() {
        WinFactor::Lose
    } else if hand.has_blackjack() {
        WinFactor::Blackjack
    } else if dealer.is_bust() || hand_score > dealer_score {
        WinFactor::Win
    } else {
        WinFactor::Lose
    }
}

/// Outcome of settling one bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Index of the bet in play order.
    pub bet_index: usize,
    /// How the bet fared.
    pub factor: WinFactor,
    /// The wager that was settled.
    pub wager: Money,
    /// The amount credited to the balance.
    pub payout: Money,
}
