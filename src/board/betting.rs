use crate::dealer::Dealer;
use crate::error::RuleError;

use super::{Board, Stage};

impl Board {
    /// Deals the opening cards.
    ///
    /// Returns `false` outside the betting stage or when nothing is wagered.
    /// Dealing continues in the background; a natural blackjack skips the
    /// player's turn.
    pub fn deal(&self) -> bool {
        self.command("deal", Self::apply_deal)
    }

    /// Raises the opening wager by the configured increment.
    ///
    /// Returns `false` outside the betting stage or unless the balance exceeds
    /// the increment.
    pub fn raise(&self) -> bool {
        self.command("raise", Self::apply_raise)
    }

    /// Lowers the opening wager by the configured increment.
    ///
    /// Returns `false` outside the betting stage or unless the wager exceeds
    /// the increment.
    pub fn lower(&self) -> bool {
        self.command("lower", Self::apply_lower)
    }

    /// Starts the next round once the current one has concluded.
    pub fn new_round(&self) -> bool {
        self.command("new round", Self::apply_new_round)
    }

    fn apply_raise(&self) -> Result<(), RuleError> {
        self.ensure_stage(Stage::Betting)?;
        let wager = {
            let mut player = self.table.player.lock();
            player.raise(self.table.options.bet_increment)?;
            player.wager()
        };
        self.push_event(format!("Player raises to {}", self.format_money(wager)));
        Ok(())
    }

    fn apply_lower(&self) -> Result<(), RuleError> {
        self.ensure_stage(Stage::Betting)?;
        let wager = {
            let mut player = self.table.player.lock();
            player.lower(self.table.options.bet_increment)?;
            player.wager()
        };
        self.push_event(format!("Player lowers to {}", self.format_money(wager)));
        Ok(())
    }

    fn apply_deal(&self) -> Result<(), RuleError> {
        self.ensure_stage(Stage::Betting)?;
        let bets = {
            let mut player = self.table.player.lock();
            if player.wager().is_zero() {
                return Err(RuleError::NoWager);
            }
            player.remember_wager();
            player.bets().len()
        };

        self.set_stage(Stage::Observing);
        self.queue.enqueue(|board| board.deal_dealer_card(true));
        for index in 0..bets {
            self.queue
                .enqueue(move |board| board.deal_player_card(index));
        }
        self.queue.enqueue(|board| board.deal_dealer_card(false));
        for index in 0..bets {
            self.queue
                .enqueue(move |board| board.deal_player_card(index));
        }
        self.queue.enqueue(Self::finish_deal);
        Ok(())
    }

    fn apply_new_round(&self) -> Result<(), RuleError> {
        self.ensure_stage(Stage::Conclusion)?;
        self.push_event("New round");
        self.enter(Stage::Betting);
        Ok(())
    }

    fn deal_dealer_card(&self, face_up: bool) {
        let card = self.draw(face_up);
        let id = self.table.dealer.lock().hand();
        self.table.hands.lock()[id].hit(card);
        self.push_event(format!("Dealer dealt {card}"));
    }

    fn deal_player_card(&self, index: usize) {
        let card = self.draw(true);
        let id = self.table.player.lock().bets()[index].hand;
        self.table.hands.lock()[id].hit(card);
        self.push_event(format!("Player dealt {card}"));
    }

    fn finish_deal(&self) {
        let blackjack = {
            let hands = self.table.hands.lock();
            let player = self.table.player.lock();
            player
                .bets()
                .first()
                .is_some_and(|bet| hands[bet.hand].has_blackjack())
        };

        if blackjack {
            self.push_event("Player has blackjack");
            self.enter(Stage::Dealer);
        } else {
            self.enter(Stage::Player);
        }
    }

    /// Clears the table for a new round: fresh shuffled deck, empty hands, and
    /// the previous wager placed again if the balance allows.
    pub(super) fn reset_round(&self) {
        {
            let mut deck = self.table.deck.lock();
            deck.init();
            deck.shuffle(self.table.options.seed);
        }

        let wager = {
            let mut hands = self.table.hands.lock();
            hands.clear();
            let dealer_hand = hands.alloc();
            let player_hand = hands.alloc();
            *self.table.dealer.lock() = Dealer::new(dealer_hand);
            self.table.player.lock().reset(player_hand)
        };

        if wager.is_zero() {
            self.push_event("Player cannot cover a wager");
        } else {
            self.push_event(format!("Player bets {}", self.format_money(wager)));
        }
    }
}
