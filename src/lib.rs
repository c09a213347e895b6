//! A single-player blackjack board played against a computer dealer.
//!
//! The crate provides a [`Board`] that owns the deck, the dealer, the player's
//! bets and balance, and a bounded event log. Player commands are gated by
//! the active [`Stage`] and run one at a time on a paced action worker, so a
//! renderer can watch a round unfold while callers wait for it with
//! [`Board::wait_idle`].
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use blackjack_board::{Board, BoardOptions};
//!
//! let options = BoardOptions::default().with_action_delay(Duration::ZERO);
//! let board = Board::begin(options).unwrap();
//! if board.deal() {
//!     board.wait_idle();
//! }
//! println!("{}", board.render_log());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod board;
pub mod card;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod hand;
pub mod log;
pub mod money;
pub mod options;
pub mod player;
pub mod result;
mod queue;
mod sync;

// Re-export main types
pub use board::{ActionSet, Board, Command, PlayerAction, Stage};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use dealer::Dealer;
pub use deck::{Deck, UNIQUE_SHUFFLE};
pub use error::{BoardError, RuleError};
pub use hand::{Hand, HandId, Hands};
pub use log::EventLog;
pub use money::{CurrencyFormat, Money};
pub use options::BoardOptions;
pub use player::{Bet, Player};
pub use result::{Settlement, WinFactor, win_factor};
