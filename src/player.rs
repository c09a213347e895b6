//! The player's bets and balance.

use crate::card::Card;
use crate::error::RuleError;
use crate::hand::{HandId, Hands};
use crate::money::{CurrencyFormat, Money};
use crate::result::{Settlement, WinFactor};

/// A wager riding on one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bet {
    /// Amount currently wagered.
    pub amount: Money,
    /// The hand this bet plays.
    pub hand: HandId,
    /// Whether the player has stood on this hand.
    pub stand: bool,
    /// Whether the player has already hit this hand.
    pub acted: bool,
}

impl Bet {
    /// Creates an open bet on `hand`.
    #[must_use]
    pub const fn new(amount: Money, hand: HandId) -> Self {
        Self {
            amount,
            hand,
            stand: false,
            acted: false,
        }
    }

    /// Returns whether no further action can apply to this bet.
    #[must_use]
    pub fn is_finished(&self, hands: &Hands) -> bool {
        let hand = &hands[self.hand];
        self.stand || hand.has_blackjack() || hand.is_bust()
    }
}

/// The player's ledger: a shared balance and the bets in play order.
///
/// Index 0 is the opening bet; splits append further bets behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    balance: Money,
    bets: Vec<Bet>,
    last_wager: Money,
}

impl Player {
    /// Creates a player holding `bankroll` who opens with `opening_wager`.
    ///
    /// No bet is placed until [`Player::reset`] is called.
    #[must_use]
    pub const fn new(bankroll: Money, opening_wager: Money) -> Self {
        Self {
            balance: bankroll,
            bets: Vec::new(),
            last_wager: opening_wager,
        }
    }

    /// Returns the balance not currently wagered.
    #[must_use]
    pub const fn balance(&self) -> Money {
        self.balance
    }

    /// Returns the bets in play order.
    #[must_use]
    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }

    /// Returns the opening wager used as the default for the next round.
    #[must_use]
    pub const fn last_wager(&self) -> Money {
        self.last_wager
    }

    /// Returns the opening wager of the current round.
    #[must_use]
    pub fn wager(&self) -> Money {
        self.bets.first().map_or(Money::ZERO, |bet| bet.amount)
    }

    /// Starts a round with a single bet on `hand`.
    ///
    /// Any unsettled stake is returned to the balance first. The new bet repeats
    /// the last wager, clamped to the balance. Returns the amount placed.
    pub fn reset(&mut self, hand: HandId) -> Money {
        for bet in self.bets.drain(..) {
            self.balance += bet.amount;
        }

        let wager = self.last_wager.min(self.balance);
        self.balance -= wager;
        self.bets.push(Bet::new(wager, hand));
        wager
    }

    /// Remembers the opening wager as the next round's default.
    pub fn remember_wager(&mut self) {
        self.last_wager = self.wager();
    }

    /// Moves `amount` from the balance onto the opening bet.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InsufficientFunds`] unless the balance exceeds `amount`,
    /// or [`RuleError::NoWager`] if no bet is open.
    pub fn raise(&mut self, amount: Money) -> Result<(), RuleError> {
        if self.balance <= amount {
            return Err(RuleError::InsufficientFunds);
        }
        let bet = self.bets.first_mut().ok_or(RuleError::NoWager)?;
        bet.amount += amount;
        self.balance -= amount;
        Ok(())
    }

    /// Moves `amount` from the opening bet back to the balance.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::WagerFloor`] unless the wager exceeds `amount`,
    /// or [`RuleError::NoWager`] if no bet is open.
    pub fn lower(&mut self, amount: Money) -> Result<(), RuleError> {
        let bet = self.bets.first_mut().ok_or(RuleError::NoWager)?;
        if bet.amount <= amount {
            return Err(RuleError::WagerFloor);
        }
        bet.amount -= amount;
        self.balance += amount;
        Ok(())
    }

    /// Returns the index of the first unfinished bet.
    #[must_use]
    pub fn focused(&self, hands: &Hands) -> Option<usize> {
        self.bets.iter().position(|bet| !bet.is_finished(hands))
    }

    /// Returns whether the focused bet may double down.
    #[must_use]
    pub fn can_double(&self, hands: &Hands) -> bool {
        self.focused(hands).is_some_and(|index| {
            let bet = &self.bets[index];
            hands[bet.hand].len() == 2 && !bet.acted && self.balance > bet.amount
        })
    }

    /// Returns whether the focused bet may split.
    #[must_use]
    pub fn can_split(&self, hands: &Hands) -> bool {
        self.focused(hands).is_some_and(|index| {
            let bet = &self.bets[index];
            hands[bet.hand].can_split() && self.balance > bet.amount
        })
    }

    /// Adds `card` to the focused hand. Returns the bet index.
    ///
    /// A hand that has been hit can no longer double down.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::NoFocusedBet`] if every bet is finished.
    pub fn hit(&mut self, hands: &mut Hands, card: Card) -> Result<usize, RuleError> {
        let index = self.focused(hands).ok_or(RuleError::NoFocusedBet)?;
        let bet = &mut self.bets[index];
        hands[bet.hand].hit(card);
        bet.acted = true;
        Ok(index)
    }

    /// Doubles the focused bet's wager and marks it stood.
    ///
    /// Only the first decision on a hand may double. The caller deals the
    /// single extra card. Returns the bet index.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has focus, the hand does not hold exactly two
    /// cards, the hand has already been hit, or the balance does not exceed the
    /// wager.
    pub fn double_down(&mut self, hands: &Hands) -> Result<usize, RuleError> {
        let index = self.focused(hands).ok_or(RuleError::NoFocusedBet)?;
        let bet = &mut self.bets[index];
        if bet.acted || hands[bet.hand].len() != 2 {
            return Err(RuleError::CannotDouble);
        }
        if self.balance <= bet.amount {
            return Err(RuleError::InsufficientFunds);
        }

        let stake = bet.amount;
        self.balance -= stake;
        bet.amount = stake + stake;
        bet.stand = true;
        Ok(index)
    }

    /// Splits the focused pair into a new bet with a matching wager.
    ///
    /// The second card moves into a freshly allocated hand. Returns the index
    /// of the new bet.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has focus, the hand is not a pair, or the
    /// balance does not exceed the wager.
    pub fn split(&mut self, hands: &mut Hands) -> Result<usize, RuleError> {
        let index = self.focused(hands).ok_or(RuleError::NoFocusedBet)?;
        let Bet { amount, hand, .. } = self.bets[index];
        if !hands[hand].can_split() {
            return Err(RuleError::CannotSplit);
        }
        if self.balance <= amount {
            return Err(RuleError::InsufficientFunds);
        }
        let card = hands[hand]
            .take_split_card()
            .ok_or(RuleError::CannotSplit)?;

        let split_hand = hands.alloc();
        hands[split_hand].hit(card);
        self.balance -= amount;
        self.bets.push(Bet::new(amount, split_hand));
        Ok(self.bets.len() - 1)
    }

    /// Stands the focused bet. Returns its index.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::NoFocusedBet`] if every bet is finished.
    pub fn stand(&mut self, hands: &Hands) -> Result<usize, RuleError> {
        let index = self.focused(hands).ok_or(RuleError::NoFocusedBet)?;
        self.bets[index].stand = true;
        Ok(index)
    }

    /// Pays out bet `index` at `factor` and clears its wager.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a bet of this round.
    pub fn settle(&mut self, index: usize, factor: WinFactor) -> Settlement {
        let bet = &mut self.bets[index];
        let wager = bet.amount;
        let payout = factor.payout(wager);
        self.balance += payout;
        bet.amount = Money::ZERO;
        Settlement {
            bet_index: index,
            factor,
            wager,
            payout,
        }
    }

    /// Renders the wagers and balance, e.g. `£5.00 , £5.00 / £90.00`.
    #[must_use]
    pub fn render(&self, currency: &CurrencyFormat) -> String {
        let wagers = self
            .bets
            .iter()
            .map(|bet| currency.format(bet.amount))
            .collect::<Vec<_>>()
            .join(" , ");
        format!("{wagers} / {}", currency.format(self.balance))
    }
}
