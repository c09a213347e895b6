use tracing::info;

use crate::card::Card;
use crate::dealer;
use crate::result::{WinFactor, win_factor};

use super::{Board, Stage};

impl Board {
    /// Reveals the hole card and queues the dealer's draws.
    pub(super) fn start_dealer_turn(&self) {
        let id = self.table.dealer.lock().hand();
        let hidden = {
            let mut hands = self.table.hands.lock();
            let hand = &mut hands[id];
            let hidden: Vec<Card> = hand
                .cards()
                .iter()
                .filter(|card| !card.is_face_up())
                .map(|card| card.face_up())
                .collect();
            hand.reveal();
            hidden
        };

        for card in hidden {
            self.push_event(format!("Dealer reveals {card}"));
        }
        self.queue.enqueue(Self::dealer_step);
    }

    /// Draws one card while the dealer must hit, then moves on to assessment.
    fn dealer_step(&self) {
        let id = self.table.dealer.lock().hand();
        let must_hit = dealer::must_hit(&self.table.hands.lock()[id]);

        if must_hit {
            let card = self.draw(true);
            self.table.hands.lock()[id].hit(card);
            self.push_event(format!("Dealer dealt {card}"));
            self.queue.enqueue(Self::dealer_step);
        } else {
            if self.table.hands.lock()[id].is_bust() {
                self.push_event("Dealer busts");
            }
            self.queue
                .enqueue(|board| board.enter(Stage::Assessment));
        }
    }

    /// Queues a settlement for every bet in play order, then the conclusion.
    pub(super) fn start_assessment(&self) {
        let bets = self.table.player.lock().bets().len();
        for index in 0..bets {
            self.queue.enqueue(move |board| board.settle_bet(index));
        }
        self.queue
            .enqueue(|board| board.enter(Stage::Conclusion));
    }

    fn settle_bet(&self, index: usize) {
        let dealer_hand = self.table.dealer.lock().hand();
        let settlement = {
            let hands = self.table.hands.lock();
            let mut player = self.table.player.lock();
            let factor = win_factor(&hands[player.bets()[index].hand], &hands[dealer_hand]);
            player.settle(index, factor)
        };

        info!(
            bet = settlement.bet_index,
            factor = settlement.factor.multiplier(),
            wager = settlement.wager.minor(),
            payout = settlement.payout.minor(),
            "bet settled"
        );

        let amount = if settlement.factor == WinFactor::Lose {
            settlement.wager
        } else {
            settlement.payout
        };
        self.push_event(format!(
            "Player {} {}",
            settlement.factor.verb(),
            self.format_money(amount)
        ));
    }
}
