//! Card, deck, hand, and ledger tests.

use std::collections::HashSet;

use blackjack_board::dealer::must_hit;
use blackjack_board::{
    Card, CurrencyFormat, DECK_SIZE, Deck, EventLog, Hand, Hands, Money, Player, Rank, RuleError,
    Suit, UNIQUE_SHUFFLE, WinFactor, win_factor,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn hand(cards: &[Card]) -> Hand {
    Hand::from_cards(cards.to_vec())
}

fn notations(deck: &Deck) -> Vec<String> {
    deck.cards().iter().map(Card::notation).collect()
}

#[test]
fn card_values_by_rank() {
    assert_eq!(Rank::Ace.values(), &[1, 11]);
    assert_eq!(Rank::Two.values(), &[2]);
    assert_eq!(Rank::Nine.values(), &[9]);
    for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
        assert_eq!(rank.values(), &[10]);
    }
}

#[test]
fn card_accessors() {
    let queen = card(Rank::Queen, Suit::Hearts).face_down();
    assert_eq!(queen.rank(), Rank::Queen);
    assert_eq!(queen.suit(), Suit::Hearts);
    assert!(queen.suit().is_red());
}

#[test]
fn card_notation_and_facing() {
    assert_eq!(card(Rank::Ace, Suit::Spades).notation(), "A♤");
    assert_eq!(card(Rank::Queen, Suit::Hearts).notation(), "Q♥");
    assert_eq!(card(Rank::Two, Suit::Clubs).notation(), "2♧");
    assert_eq!(card(Rank::Eight, Suit::Diamonds).notation(), "8♦");
    assert_eq!(card(Rank::Ten, Suit::Clubs).to_string(), "X♧");

    let hidden = card(Rank::Ace, Suit::Spades).face_down();
    assert!(!hidden.is_face_up());
    assert_eq!(hidden.notation(), "🂠 ?");
    assert_eq!(hidden.face_up().notation(), "A♤");
    assert_eq!(hidden, card(Rank::Ace, Suit::Spades));
}

#[test]
fn deck_init_is_canonical() {
    let mut deck = Deck::new();
    deck.init();

    assert_eq!(deck.len(), DECK_SIZE);
    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    assert_eq!(deck.cards()[0].notation(), "A♧");
    assert_eq!(deck.cards()[13].notation(), "A♦");
    assert_eq!(deck.cards()[26].notation(), "A♥");
    assert_eq!(deck.cards()[39].notation(), "A♤");
    assert_eq!(deck.cards()[51].notation(), "K♤");
    assert_eq!(deck.render(), "🂠  ×52");

    deck.init();
    assert_eq!(deck.len(), DECK_SIZE);
}

#[test]
fn seeded_shuffle_is_repeatable() {
    let mut first = Deck::new();
    first.init();
    first.shuffle(42);

    let mut second = Deck::new();
    second.init();
    second.shuffle(42);

    let mut canonical = Deck::new();
    canonical.init();

    assert_eq!(notations(&first), notations(&second));
    assert_ne!(notations(&first), notations(&canonical));

    let unique: HashSet<Card> = first.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn unique_shuffles_differ() {
    let mut first = Deck::new();
    first.init();
    first.shuffle(UNIQUE_SHUFFLE);

    let mut second = Deck::new();
    second.init();
    second.shuffle(UNIQUE_SHUFFLE);

    assert_ne!(notations(&first), notations(&second));
}

#[test]
fn pop_takes_from_the_top() {
    let mut deck = Deck::new();
    deck.init();

    assert_eq!(deck.pop(), Some(card(Rank::King, Suit::Spades)));
    assert_eq!(deck.pop(), Some(card(Rank::Queen, Suit::Spades)));
    assert_eq!(deck.len(), 50);

    let mut empty = Deck::new();
    assert!(empty.is_empty());
    assert_eq!(empty.pop(), None);
}

#[test]
fn force_next_moves_an_existing_card() {
    let mut deck = Deck::new();
    deck.init();
    deck.shuffle(7);

    let forced = card(Rank::Seven, Suit::Hearts);
    deck.force_next(forced);
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.pop(), Some(forced));
    assert_eq!(deck.len(), DECK_SIZE - 1);
}

#[test]
fn force_next_adds_a_missing_card() {
    let mut deck = Deck::new();
    deck.init();
    let top = deck.pop().unwrap();
    assert_eq!(deck.len(), 51);

    deck.force_next(top);
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.pop(), Some(top));
}

#[test]
fn hand_scores() {
    let five = card(Rank::Five, Suit::Hearts);
    let three = card(Rank::Three, Suit::Hearts);
    let ace_h = card(Rank::Ace, Suit::Hearts);
    let ace_s = card(Rank::Ace, Suit::Spades);
    let ace_d = card(Rank::Ace, Suit::Diamonds);
    let ace_c = card(Rank::Ace, Suit::Clubs);

    assert_eq!(Hand::new().scores(), vec![0]);
    assert_eq!(hand(&[five]).scores(), vec![5]);
    assert_eq!(hand(&[five, three]).scores(), vec![8]);
    assert_eq!(
        hand(&[
            card(Rank::Jack, Suit::Hearts),
            card(Rank::Queen, Suit::Hearts),
            card(Rank::King, Suit::Hearts),
        ])
        .scores(),
        vec![30]
    );
    assert_eq!(hand(&[five, ace_h]).scores(), vec![6, 16]);
    assert_eq!(hand(&[five, ace_h, three]).scores(), vec![9, 19]);
    assert_eq!(hand(&[ace_h]).scores(), vec![1, 11]);
    assert_eq!(hand(&[ace_h, ace_s]).scores(), vec![2, 12]);
    assert_eq!(hand(&[ace_h, ace_s, ace_d]).scores(), vec![3, 13]);
    assert_eq!(hand(&[ace_c, ace_d, ace_h, ace_s]).scores(), vec![4, 14]);
    assert_eq!(
        hand(&[
            card(Rank::Two, Suit::Hearts),
            ace_h,
            card(Rank::Three, Suit::Hearts),
            ace_s,
            card(Rank::King, Suit::Diamonds),
            card(Rank::Six, Suit::Clubs),
        ])
        .scores(),
        vec![23]
    );
}

#[test]
fn twenty_one_overrides_other_totals() {
    let blackjack = hand(&[
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Hearts),
    ]);
    assert_eq!(blackjack.scores(), vec![21]);
    assert!(blackjack.has_blackjack());

    let three_card = hand(&[
        card(Rank::Ace, Suit::Spades),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Five, Suit::Clubs),
    ]);
    assert_eq!(three_card.scores(), vec![21]);
    assert!(!three_card.has_blackjack());
}

#[test]
fn bust_keeps_the_minimum() {
    let bust = hand(&[
        card(Rank::Queen, Suit::Hearts),
        card(Rank::Jack, Suit::Diamonds),
        card(Rank::Three, Suit::Clubs),
    ]);
    assert_eq!(bust.scores(), vec![23]);
    assert!(bust.is_bust());
    assert_eq!(bust.max_score(), 23);
}

#[test]
fn face_down_cards_do_not_score() {
    let dealer = hand(&[
        card(Rank::King, Suit::Spades),
        card(Rank::Seven, Suit::Clubs).face_down(),
    ]);
    assert_eq!(dealer.scores(), vec![10]);
    assert_eq!(dealer.render(), "K♤, 🂠 ?  (10)");

    let mut revealed = dealer;
    revealed.reveal();
    assert_eq!(revealed.scores(), vec![17]);
}

#[test]
fn hand_render() {
    assert_eq!(hand(&[card(Rank::Ace, Suit::Spades)]).render(), "A♤  (1 / 11)");
    assert_eq!(
        hand(&[card(Rank::Ace, Suit::Spades), card(Rank::Jack, Suit::Clubs)]).render(),
        "A♤, J♧  (21)"
    );
}

#[test]
fn split_eligibility() {
    let pair = hand(&[
        card(Rank::Eight, Suit::Hearts),
        card(Rank::Eight, Suit::Diamonds),
    ]);
    assert!(pair.can_split());

    let tens = hand(&[card(Rank::Ten, Suit::Clubs), card(Rank::King, Suit::Hearts)]);
    assert!(tens.can_split());

    let aces = hand(&[card(Rank::Ace, Suit::Spades), card(Rank::Ace, Suit::Diamonds)]);
    assert!(aces.can_split());

    let mixed = hand(&[card(Rank::Eight, Suit::Hearts), card(Rank::Nine, Suit::Hearts)]);
    assert!(!mixed.can_split());

    let three = hand(&[
        card(Rank::Eight, Suit::Hearts),
        card(Rank::Eight, Suit::Diamonds),
        card(Rank::Eight, Suit::Clubs),
    ]);
    assert!(!three.can_split());
}

#[test]
fn dealer_policy() {
    let ten = card(Rank::Ten, Suit::Spades);
    let ace = card(Rank::Ace, Suit::Spades);

    assert!(must_hit(&hand(&[ten, card(Rank::Six, Suit::Clubs)])));
    assert!(must_hit(&hand(&[ace, card(Rank::Six, Suit::Clubs)])));
    assert!(!must_hit(&hand(&[ten, card(Rank::Seven, Suit::Clubs)])));
    assert!(!must_hit(&hand(&[ace, card(Rank::Seven, Suit::Clubs)])));
    assert!(!must_hit(&hand(&[
        ace,
        card(Rank::Six, Suit::Clubs),
        ten
    ])));
    assert!(!must_hit(&hand(&[
        ten,
        card(Rank::Six, Suit::Clubs),
        card(Rank::King, Suit::Hearts),
    ])));
}

#[test]
fn settlement_factors() {
    let blackjack = hand(&[card(Rank::Ace, Suit::Hearts), card(Rank::Jack, Suit::Diamonds)]);
    let seventeen = hand(&[card(Rank::Ten, Suit::Spades), card(Rank::Seven, Suit::Clubs)]);
    let twenty = hand(&[card(Rank::Queen, Suit::Hearts), card(Rank::King, Suit::Clubs)]);
    let bust = hand(&[
        card(Rank::Queen, Suit::Spades),
        card(Rank::Jack, Suit::Spades),
        card(Rank::Three, Suit::Clubs),
    ]);
    let three_card_21 = hand(&[
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Four, Suit::Hearts),
        card(Rank::King, Suit::Hearts),
    ]);

    assert_eq!(win_factor(&blackjack, &seventeen), WinFactor::Blackjack);
    assert_eq!(win_factor(&blackjack, &three_card_21), WinFactor::Push);
    assert_eq!(win_factor(&twenty, &twenty), WinFactor::Push);
    assert_eq!(win_factor(&bust, &seventeen), WinFactor::Lose);
    assert_eq!(win_factor(&seventeen, &bust), WinFactor::Win);
    assert_eq!(win_factor(&twenty, &seventeen), WinFactor::Win);
    assert_eq!(win_factor(&seventeen, &twenty), WinFactor::Lose);

    assert_eq!(WinFactor::Blackjack.payout(Money::units(5)), Money::from_minor(1_250));
    assert_eq!(WinFactor::Win.payout(Money::units(5)), Money::units(10));
    assert_eq!(WinFactor::Push.payout(Money::units(5)), Money::units(5));
    assert_eq!(WinFactor::Lose.payout(Money::units(5)), Money::ZERO);
}

#[test]
fn log_render_and_limit() {
    let mut log = EventLog::default();
    log.push("Foo happened");
    log.push("Bar happened");
    assert_eq!(log.render(), "Foo happened\n Bar happened\n");

    let mut limited = EventLog::new(3);
    for i in 0..5 {
        limited.push(format!("Event {i}"));
    }
    assert_eq!(limited.len(), 3);
    assert_eq!(limited.render(), "Event 2\n Event 3\n Event 4\n");

    assert_eq!(EventLog::new(0).limit(), 20);
}

#[test]
fn currency_format() {
    let pounds = CurrencyFormat::default();
    assert_eq!(pounds.format(Money::units(5)), "£5.00");
    assert_eq!(pounds.format(Money::from_minor(123_450)), "£1,234.50");
    assert_eq!(pounds.format(Money::units(1_000_000)), "£1,000,000.00");
    assert_eq!(pounds.format(Money::ZERO), "£0.00");

    let dollars = CurrencyFormat::default().with_symbol("$").with_precision(0);
    assert_eq!(dollars.format(Money::from_minor(1_250)), "$13");
    assert_eq!(dollars.format(Money::from_minor(1_249)), "$12");
}

#[test]
fn raise_and_lower_follow_the_balance() {
    let mut hands = Hands::new();
    let mut player = Player::new(Money::units(20), Money::units(5));
    assert_eq!(player.reset(hands.alloc()), Money::units(5));
    assert_eq!(player.balance(), Money::units(15));

    assert_eq!(player.raise(Money::units(5)), Ok(()));
    assert_eq!(player.wager(), Money::units(10));
    assert_eq!(player.balance(), Money::units(10));

    assert_eq!(
        player.raise(Money::units(10)),
        Err(RuleError::InsufficientFunds)
    );
    assert_eq!(player.wager(), Money::units(10));
    assert_eq!(player.balance(), Money::units(10));

    assert_eq!(player.lower(Money::units(5)), Ok(()));
    assert_eq!(player.lower(Money::units(5)), Err(RuleError::WagerFloor));
    assert_eq!(player.wager(), Money::units(5));
    assert_eq!(player.balance(), Money::units(15));
}

#[test]
fn reset_clamps_and_skips_the_wager() {
    let mut hands = Hands::new();
    let mut player = Player::new(Money::units(3), Money::units(5));
    assert_eq!(player.reset(hands.alloc()), Money::units(3));
    assert_eq!(player.balance(), Money::ZERO);

    let mut broke = Player::new(Money::ZERO, Money::units(5));
    assert_eq!(broke.reset(hands.alloc()), Money::ZERO);
    assert_eq!(broke.bets().len(), 1);
    assert!(broke.wager().is_zero());
}

#[test]
fn split_moves_a_card_and_matches_the_wager() {
    let mut hands = Hands::new();
    let mut player = Player::new(Money::units(100), Money::units(5));
    let id = hands.alloc();
    player.reset(id);
    hands[id].hit(card(Rank::Eight, Suit::Hearts));
    hands[id].hit(card(Rank::Eight, Suit::Diamonds));
    assert_eq!(player.render(&CurrencyFormat::default()), "£5.00 / £95.00");

    assert!(player.can_split(&hands));
    assert_eq!(player.split(&mut hands), Ok(1));

    let bets = player.bets();
    assert_eq!(bets.len(), 2);
    assert_eq!(bets[1].amount, Money::units(5));
    assert_eq!(hands[bets[0].hand].cards(), &[card(Rank::Eight, Suit::Hearts)]);
    assert_eq!(hands[bets[1].hand].cards(), &[card(Rank::Eight, Suit::Diamonds)]);
    assert_eq!(player.balance(), Money::units(90));
    assert_eq!(
        player.render(&CurrencyFormat::default()),
        "£5.00 , £5.00 / £90.00"
    );

    assert_eq!(player.split(&mut hands), Err(RuleError::CannotSplit));
}

#[test]
fn double_down_needs_two_cards() {
    let mut hands = Hands::new();
    let mut player = Player::new(Money::units(100), Money::units(5));
    let id = hands.alloc();
    player.reset(id);
    hands[id].hit(card(Rank::Five, Suit::Hearts));
    hands[id].hit(card(Rank::Six, Suit::Hearts));

    assert_eq!(player.double_down(&hands), Ok(0));
    assert_eq!(player.wager(), Money::units(10));
    assert_eq!(player.balance(), Money::units(90));
    assert!(player.bets()[0].stand);
    assert_eq!(player.focused(&hands), None);
    assert_eq!(player.double_down(&hands), Err(RuleError::NoFocusedBet));

    let mut hands = Hands::new();
    let mut player = Player::new(Money::units(100), Money::units(5));
    let id = hands.alloc();
    player.reset(id);
    for rank in [Rank::Two, Rank::Three, Rank::Four] {
        hands[id].hit(card(rank, Suit::Clubs));
    }
    assert_eq!(player.double_down(&hands), Err(RuleError::CannotDouble));
    assert_eq!(player.balance(), Money::units(95));
}

#[test]
fn hitting_ends_the_first_decision() {
    let mut hands = Hands::new();
    let mut player = Player::new(Money::units(100), Money::units(5));
    let id = hands.alloc();
    player.reset(id);
    hands[id].hit(card(Rank::Two, Suit::Hearts));

    assert_eq!(player.hit(&mut hands, card(Rank::Three, Suit::Clubs)), Ok(0));
    assert_eq!(hands[id].len(), 2);
    assert!(player.bets()[0].acted);
    assert!(!player.can_double(&hands));
    assert_eq!(player.double_down(&hands), Err(RuleError::CannotDouble));
    assert_eq!(player.wager(), Money::units(5));
    assert_eq!(player.balance(), Money::units(95));
}
