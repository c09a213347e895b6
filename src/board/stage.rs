//! Game stages and the commands each one allows.

use super::Board;

/// The phase of a round. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// The player adjusts the wager and deals.
    Betting,
    /// The player acts on the focused hand.
    Player,
    /// The dealer reveals and draws.
    Dealer,
    /// Bets are settled against the dealer.
    Assessment,
    /// The round is over.
    Conclusion,
    /// Queued work is running; the player can only watch.
    Observing,
}

impl Stage {
    /// Returns a display name for the stage.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Betting => "betting",
            Self::Player => "player",
            Self::Dealer => "dealer",
            Self::Assessment => "assessment",
            Self::Conclusion => "conclusion",
            Self::Observing => "observing",
        }
    }

    /// Runs the stage's entry effect. Called on the action worker.
    pub(super) fn on_enter(self, board: &Board) {
        match self {
            Self::Betting => board.reset_round(),
            Self::Dealer => board.start_dealer_turn(),
            Self::Assessment => board.start_assessment(),
            Self::Player | Self::Conclusion | Self::Observing => {}
        }
    }

    /// Returns the commands the player may issue in this stage.
    #[must_use]
    pub fn actions(self, board: &Board) -> ActionSet {
        let actions = match self {
            Self::Betting => vec![
                PlayerAction::new('d', "Deal", Command::Deal),
                PlayerAction::new('r', "Raise", Command::Raise),
                PlayerAction::new('l', "Lower", Command::Lower),
            ],
            Self::Player => {
                let mut actions = vec![
                    PlayerAction::new('h', "Hit", Command::Hit),
                    PlayerAction::new('s', "Stand", Command::Stand),
                ];
                if board.can_double() {
                    actions.push(PlayerAction::new('d', "Double down", Command::DoubleDown));
                }
                if board.can_split() {
                    actions.push(PlayerAction::new('p', "Split", Command::Split));
                }
                actions
            }
            Self::Conclusion => vec![PlayerAction::new('n', "New round", Command::NewRound)],
            Self::Dealer | Self::Assessment | Self::Observing => Vec::new(),
        };
        ActionSet(actions)
    }
}

/// A player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Deal the opening cards.
    Deal,
    /// Raise the opening wager by one increment.
    Raise,
    /// Lower the opening wager by one increment.
    Lower,
    /// Draw a card to the focused hand.
    Hit,
    /// Stand on the focused hand.
    Stand,
    /// Double the focused wager and take exactly one card.
    DoubleDown,
    /// Split the focused pair.
    Split,
    /// Start the next round.
    NewRound,
}

/// A command bound to a key, with a description for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerAction {
    /// Key the input dispatcher binds the command to.
    pub key: char,
    /// Human-readable description.
    pub description: &'static str,
    /// The command issued.
    pub command: Command,
}

impl PlayerAction {
    const fn new(key: char, description: &'static str, command: Command) -> Self {
        Self {
            key,
            description,
            command,
        }
    }

    /// Issues the command, returning whether it was performed.
    pub fn execute(&self, board: &Board) -> bool {
        match self.command {
            Command::Deal => board.deal(),
            Command::Raise => board.raise(),
            Command::Lower => board.lower(),
            Command::Hit => board.hit(),
            Command::Stand => board.stand(),
            Command::DoubleDown => board.double_down(),
            Command::Split => board.split(),
            Command::NewRound => board.new_round(),
        }
    }
}

/// The commands available in a stage, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionSet(Vec<PlayerAction>);

impl ActionSet {
    /// Returns the action bound to `key`.
    #[must_use]
    pub fn get(&self, key: char) -> Option<&PlayerAction> {
        self.0.iter().find(|action| action.key == key)
    }

    /// Returns whether `command` is available.
    #[must_use]
    pub fn contains(&self, command: Command) -> bool {
        self.0.iter().any(|action| action.command == command)
    }

    /// Iterates over the actions in display order.
    pub fn iter(&self) -> impl Iterator<Item = &PlayerAction> {
        self.0.iter()
    }

    /// Returns the number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no action is available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
