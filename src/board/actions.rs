use crate::error::RuleError;

use super::{Board, Stage};

impl Board {
    /// Draws a card to the focused hand.
    ///
    /// Once every hand is finished the dealer's turn follows.
    pub fn hit(&self) -> bool {
        self.command("hit", Self::apply_hit)
    }

    /// Stands on the focused hand.
    pub fn stand(&self) -> bool {
        self.command("stand", Self::apply_stand)
    }

    /// Doubles the focused wager, takes exactly one card, and stands.
    ///
    /// Only a two-card hand may double, and only while the balance exceeds
    /// its wager.
    pub fn double_down(&self) -> bool {
        self.command("double down", Self::apply_double_down)
    }

    /// Splits the focused pair into two hands with matching wagers.
    pub fn split(&self) -> bool {
        self.command("split", Self::apply_split)
    }

    pub(super) fn can_double(&self) -> bool {
        let hands = self.table.hands.lock();
        self.table.player.lock().can_double(&hands)
    }

    pub(super) fn can_split(&self) -> bool {
        let hands = self.table.hands.lock();
        self.table.player.lock().can_split(&hands)
    }

    fn apply_hit(&self) -> Result<(), RuleError> {
        self.ensure_stage(Stage::Player)?;
        {
            let hands = self.table.hands.lock();
            self.table
                .player
                .lock()
                .focused(&hands)
                .ok_or(RuleError::NoFocusedBet)?;
        }

        let card = self.draw(true);
        let bust = {
            let mut hands = self.table.hands.lock();
            let mut player = self.table.player.lock();
            let index = player.hit(&mut hands, card)?;
            hands[player.bets()[index].hand].is_bust()
        };
        self.push_event(format!("Player dealt {card}"));
        if bust {
            self.push_event("Player busts");
        }

        self.end_turn_if_done();
        Ok(())
    }

    fn apply_stand(&self) -> Result<(), RuleError> {
        self.ensure_stage(Stage::Player)?;
        {
            let hands = self.table.hands.lock();
            self.table.player.lock().stand(&hands)?;
        }
        self.push_event("Player stands");

        self.end_turn_if_done();
        Ok(())
    }

    fn apply_double_down(&self) -> Result<(), RuleError> {
        self.ensure_stage(Stage::Player)?;
        let id = {
            let hands = self.table.hands.lock();
            let mut player = self.table.player.lock();
            let index = player.double_down(&hands)?;
            player.bets()[index].hand
        };
        self.push_event("Player doubles down");

        let card = self.draw(true);
        self.table.hands.lock()[id].hit(card);
        self.push_event(format!("Player dealt {card}"));

        self.end_turn_if_done();
        Ok(())
    }

    fn apply_split(&self) -> Result<(), RuleError> {
        self.ensure_stage(Stage::Player)?;
        {
            let mut hands = self.table.hands.lock();
            self.table.player.lock().split(&mut hands)?;
        }
        self.push_event("Player splits");
        Ok(())
    }

    /// Hands over to the dealer once no bet has focus.
    fn end_turn_if_done(&self) {
        let done = {
            let hands = self.table.hands.lock();
            self.table.player.lock().focused(&hands).is_none()
        };
        if done {
            self.advance(Stage::Dealer);
        }
    }
}
