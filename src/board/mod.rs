//! The board: aggregate root of a blackjack table and its command surface.

use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::debug;

use crate::card::Card;
use crate::dealer::Dealer;
use crate::deck::Deck;
use crate::error::{BoardError, RuleError};
use crate::hand::{Hand, Hands};
use crate::log::EventLog;
use crate::money::Money;
use crate::options::BoardOptions;
use crate::player::{Bet, Player};
use crate::queue::ActionQueue;
use crate::sync::Mutex;

mod actions;
mod betting;
mod dealer;
pub mod stage;

pub use stage::{ActionSet, Command, PlayerAction, Stage};

/// State shared between board handles and the action worker.
///
/// Only the worker writes. When `hands` and `player` are both needed they are
/// locked in that order.
pub(crate) struct Table {
    options: BoardOptions,
    stage: Mutex<Stage>,
    deck: Mutex<Deck>,
    hands: Mutex<Hands>,
    dealer: Mutex<Dealer>,
    player: Mutex<Player>,
    log: Mutex<EventLog>,
}

impl Table {
    fn new(options: BoardOptions) -> Self {
        let mut hands = Hands::new();
        let dealer = Dealer::new(hands.alloc());
        let player = Player::new(
            options.starting_balance + options.starting_bet,
            options.starting_bet,
        );
        let log = EventLog::new(options.log_limit);

        Self {
            options,
            stage: Mutex::new(Stage::Observing),
            deck: Mutex::new(Deck::new()),
            hands: Mutex::new(hands),
            dealer: Mutex::new(dealer),
            player: Mutex::new(player),
            log: Mutex::new(log),
        }
    }
}

/// A single-player blackjack table.
///
/// Commands are queued onto a paced worker thread and report whether they were
/// performed; work they trigger, such as dealing or the dealer's turn, keeps
/// running in the background. Observers may read the board at any time from
/// any thread, and [`Board::wait_idle`] blocks until the queue has drained.
///
/// Handles are cheap to clone and share the same table.
///
/// # Example
///
/// ```no_run
/// use blackjack_board::{Board, BoardOptions, Stage};
///
/// let board = Board::begin(BoardOptions::default().with_seed(42)).unwrap();
/// assert_eq!(board.stage(), Stage::Betting);
/// board.raise();
/// board.deal();
/// board.wait_idle();
/// ```
#[derive(Clone)]
pub struct Board {
    table: Arc<Table>,
    pub(crate) queue: ActionQueue,
}

impl Board {
    /// Sets up a table, starts its action worker, and opens the first betting
    /// round.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker thread cannot be spawned.
    pub fn begin(options: BoardOptions) -> Result<Self, BoardError> {
        let delay = options.action_delay;
        let table = Arc::new(Table::new(options));
        let queue = ActionQueue::spawn(Arc::downgrade(&table), delay)?;
        let board = Self { table, queue };

        board.queue.enqueue(|board| board.enter(Stage::Betting));
        board.wait_idle();
        Ok(board)
    }

    pub(crate) const fn from_parts(table: Arc<Table>, queue: ActionQueue) -> Self {
        Self { table, queue }
    }

    /// Returns the options the board was set up with.
    #[must_use]
    pub fn options(&self) -> &BoardOptions {
        &self.table.options
    }

    /// Returns the active stage.
    #[must_use]
    pub fn stage(&self) -> Stage {
        *self.table.stage.lock()
    }

    /// Returns the commands legal in the active stage.
    #[must_use]
    pub fn actions(&self) -> ActionSet {
        self.stage().actions(self)
    }

    /// Blocks until every queued action, and everything they queued in turn,
    /// has run.
    ///
    /// # Panics
    ///
    /// Panics if the worker halted on a fatal error such as an exhausted deck.
    pub fn wait_idle(&self) {
        self.queue.wait();
    }

    /// Returns whether queued work is still waiting to run.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.queue.pending() > 0
    }

    /// Puts `card` on top of the deck so it is dealt next.
    ///
    /// Meant for tests and debugging; play never calls it.
    pub fn force_next(&self, card: Card) {
        self.run(move |board| board.table.deck.lock().force_next(card));
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.table.deck.lock().len()
    }

    /// Renders the deck, e.g. `🂠  ×48`.
    #[must_use]
    pub fn render_deck(&self) -> String {
        self.table.deck.lock().render()
    }

    /// Returns a copy of the dealer's hand.
    #[must_use]
    pub fn dealer_hand(&self) -> Hand {
        let id = self.table.dealer.lock().hand();
        self.table
            .hands
            .lock()
            .get(id)
            .cloned()
            .unwrap_or_default()
    }

    /// Renders the dealer's hand.
    #[must_use]
    pub fn render_dealer(&self) -> String {
        self.dealer_hand().render()
    }

    /// Returns copies of the player's hands in play order.
    #[must_use]
    pub fn player_hands(&self) -> Vec<Hand> {
        let hands = self.table.hands.lock();
        let player = self.table.player.lock();
        player
            .bets()
            .iter()
            .filter_map(|bet| hands.get(bet.hand).cloned())
            .collect()
    }

    /// Renders the player's hands separated by ` | `.
    #[must_use]
    pub fn render_player(&self) -> String {
        self.player_hands()
            .iter()
            .map(Hand::render)
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Returns the player's bets in play order.
    #[must_use]
    pub fn bets(&self) -> Vec<Bet> {
        self.table.player.lock().bets().to_vec()
    }

    /// Returns the index of the bet further actions apply to.
    #[must_use]
    pub fn focused_bet(&self) -> Option<usize> {
        let hands = self.table.hands.lock();
        self.table.player.lock().focused(&hands)
    }

    /// Returns the balance not currently wagered.
    #[must_use]
    pub fn balance(&self) -> Money {
        self.table.player.lock().balance()
    }

    /// Renders the wagers and balance in the configured currency.
    #[must_use]
    pub fn render_bank(&self) -> String {
        self.table
            .player
            .lock()
            .render(&self.table.options.currency)
    }

    /// Returns the logged events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<String> {
        self.table
            .log
            .lock()
            .events()
            .map(str::to_owned)
            .collect()
    }

    /// Renders the event log.
    #[must_use]
    pub fn render_log(&self) -> String {
        self.table.log.lock().render()
    }

    /// Runs `f` on the worker and waits for its result. On the worker itself
    /// `f` runs inline.
    fn run<R: Send + 'static>(&self, f: impl FnOnce(&Self) -> R + Send + 'static) -> R {
        if self.queue.on_worker() {
            return f(self);
        }

        let (tx, rx) = oneshot::channel();
        self.queue.enqueue(move |board| {
            let _ = tx.send(f(board));
        });
        rx.blocking_recv()
            .expect("action worker halted before finishing a command")
    }

    /// Runs a player command on the worker, reporting whether it was performed.
    fn command(
        &self,
        name: &'static str,
        apply: impl FnOnce(&Self) -> Result<(), RuleError> + Send + 'static,
    ) -> bool {
        match self.run(apply) {
            Ok(()) => true,
            Err(err) => {
                debug!(command = name, %err, "command rejected");
                false
            }
        }
    }

    fn ensure_stage(&self, expected: Stage) -> Result<(), RuleError> {
        if self.stage() == expected {
            Ok(())
        } else {
            Err(RuleError::InvalidStage)
        }
    }

    fn set_stage(&self, stage: Stage) {
        *self.table.stage.lock() = stage;
    }

    /// Makes `stage` active and runs its entry effect.
    fn enter(&self, stage: Stage) {
        debug!(stage = stage.name(), "entering stage");
        self.set_stage(stage);
        stage.on_enter(self);
    }

    /// Blocks player input and queues the move to `next`.
    fn advance(&self, next: Stage) {
        self.set_stage(Stage::Observing);
        self.queue.enqueue(move |board| board.enter(next));
    }

    fn draw(&self, face_up: bool) -> Card {
        let card = self
            .table
            .deck
            .lock()
            .pop()
            .expect("deck exhausted mid-round");
        if face_up {
            card.face_up()
        } else {
            card.face_down()
        }
    }

    fn push_event(&self, event: impl Into<String>) {
        self.table.log.lock().push(event);
    }

    fn format_money(&self, amount: Money) -> String {
        self.table.options.currency.format(amount)
    }
}
