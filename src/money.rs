//! Exact money amounts and their display format.

use core::ops::{Add, AddAssign, Sub, SubAssign};

/// Minor units per whole currency unit.
pub const MINOR_PER_UNIT: u64 = 100;

/// An exact, non-negative amount of money in hundredths of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Money(u64);

impl Money {
    /// No money.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from whole units.
    #[must_use]
    pub const fn units(units: u64) -> Self {
        Self(units * MINOR_PER_UNIT)
    }

    /// Creates an amount from minor units.
    #[must_use]
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Returns the amount in minor units.
    #[must_use]
    pub const fn minor(self) -> u64 {
        self.0
    }

    /// Returns whether the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Subtracts, returning `None` on underflow.
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(minor) => Some(Self(minor)),
            None => None,
        }
    }

    /// Multiplies by `halves / 2`, rounding down to the nearest minor unit.
    #[must_use]
    pub const fn scale_halves(self, halves: u64) -> Self {
        Self(self.0 * halves / 2)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// How amounts are written for display.
///
/// ```
/// use blackjack_board::{CurrencyFormat, Money};
///
/// let format = CurrencyFormat::default();
/// assert_eq!(format.format(Money::from_minor(123_450)), "£1,234.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Symbol written before the amount.
    pub symbol: String,
    /// Digits after the decimal point, at most 2.
    pub precision: u8,
    /// Separator between groups of thousands.
    pub thousands: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "£".to_owned(),
            precision: 2,
            thousands: ',',
        }
    }
}

impl CurrencyFormat {
    /// Sets the currency symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Sets the number of decimals, clamped to 2.
    #[must_use]
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision.min(2);
        self
    }

    /// Sets the thousands separator.
    #[must_use]
    pub const fn with_thousands(mut self, thousands: char) -> Self {
        self.thousands = thousands;
        self
    }

    /// Formats an amount, rounding half up to the configured precision.
    #[must_use]
    pub fn format(&self, amount: Money) -> String {
        let precision = u32::from(self.precision.min(2));
        let step = 10_u64.pow(2 - precision);
        let scaled = (amount.minor() + step / 2) / step;
        let divisor = 10_u64.pow(precision);
        let whole = group_thousands(scaled / divisor, self.thousands);

        if precision == 0 {
            format!("{}{whole}", self.symbol)
        } else {
            let fraction = scaled % divisor;
            format!(
                "{}{whole}.{fraction:0width$}",
                self.symbol,
                width = precision as usize
            )
        }
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
