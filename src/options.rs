//! Board configuration options.

use core::time::Duration;

use crate::deck::UNIQUE_SHUFFLE;
use crate::log::DEFAULT_LOG_LIMIT;
use crate::money::{CurrencyFormat, Money};

/// Configuration options for a board.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use std::time::Duration;
/// use blackjack_board::BoardOptions;
///
/// let options = BoardOptions::default()
///     .with_action_delay(Duration::ZERO)
///     .with_seed(42);
/// assert_eq!(options.seed, 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardOptions {
    /// Pause after every queued action so a human can follow the play.
    pub action_delay: Duration,
    /// Shuffle seed; [`UNIQUE_SHUFFLE`] shuffles differently every round.
    pub seed: u64,
    /// Opening wager of the first round.
    pub starting_bet: Money,
    /// Balance left after the opening wager is placed.
    pub starting_balance: Money,
    /// Step used by the raise and lower commands.
    pub bet_increment: Money,
    /// Number of events kept in the event log.
    pub log_limit: usize,
    /// How amounts are written in the event log and renderings.
    pub currency: CurrencyFormat,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            action_delay: Duration::from_millis(700),
            seed: UNIQUE_SHUFFLE,
            starting_bet: Money::units(5),
            starting_balance: Money::units(95),
            bet_increment: Money::units(5),
            log_limit: DEFAULT_LOG_LIMIT,
            currency: CurrencyFormat::default(),
        }
    }
}

impl BoardOptions {
    /// Sets the pause between queued actions.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use blackjack_board::BoardOptions;
    ///
    /// let options = BoardOptions::default().with_action_delay(Duration::ZERO);
    /// assert!(options.action_delay.is_zero());
    /// ```
    #[must_use]
    pub const fn with_action_delay(mut self, delay: Duration) -> Self {
        self.action_delay = delay;
        self
    }

    /// Sets the shuffle seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the opening wager.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_board::{BoardOptions, Money};
    ///
    /// let options = BoardOptions::default().with_starting_bet(Money::units(10));
    /// assert_eq!(options.starting_bet, Money::units(10));
    /// ```
    #[must_use]
    pub const fn with_starting_bet(mut self, bet: Money) -> Self {
        self.starting_bet = bet;
        self
    }

    /// Sets the balance left after the opening wager.
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: Money) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the raise and lower step.
    #[must_use]
    pub const fn with_bet_increment(mut self, increment: Money) -> Self {
        self.bet_increment = increment;
        self
    }

    /// Sets how many events the log keeps.
    #[must_use]
    pub const fn with_log_limit(mut self, limit: usize) -> Self {
        self.log_limit = limit;
        self
    }

    /// Sets the currency format.
    #[must_use]
    pub fn with_currency(mut self, currency: CurrencyFormat) -> Self {
        self.currency = currency;
        self
    }
}
