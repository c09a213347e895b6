//! Property tests for scoring, the dealer policy, settlement, and shuffling.

use std::collections::HashSet;

use blackjack_board::dealer::must_hit;
use blackjack_board::hand::scores;
use blackjack_board::{Card, DECK_SIZE, Deck, Hand, Money, Rank, Suit, WinFactor, win_factor};
use proptest::collection::vec;
use proptest::prelude::*;

fn card_strategy() -> impl Strategy<Value = Card> {
    (0..Rank::ALL.len(), 0..Suit::ALL.len())
        .prop_map(|(rank, suit)| Card::new(Rank::ALL[rank], Suit::ALL[suit]))
}

fn non_ace_strategy() -> impl Strategy<Value = Card> {
    (1..Rank::ALL.len(), 0..Suit::ALL.len())
        .prop_map(|(rank, suit)| Card::new(Rank::ALL[rank], Suit::ALL[suit]))
}

/// Every total reachable by choosing one value per card, sorted and deduplicated.
fn all_totals(cards: &[Card]) -> Vec<u16> {
    let mut totals = vec![0_u16];
    for card in cards {
        totals = totals
            .iter()
            .flat_map(|total| card.values().iter().map(move |value| total + value))
            .collect();
    }
    totals.sort_unstable();
    totals.dedup();
    totals
}

proptest! {
    /// Property: hands without aces score exactly their sum
    #[test]
    fn prop_non_ace_hands_score_their_sum(cards in vec(non_ace_strategy(), 0..8)) {
        let sum: u16 = cards.iter().map(|card| card.values()[0]).sum();
        prop_assert_eq!(scores(&cards), vec![sum]);
    }

    /// Property: scores agree with a brute-force enumeration of every total
    #[test]
    fn prop_scores_match_enumeration(cards in vec(card_strategy(), 0..7)) {
        let totals = all_totals(&cards);
        let expected = if totals.contains(&21) {
            vec![21]
        } else if totals.iter().all(|&total| total > 21) {
            vec![totals[0]]
        } else {
            totals.into_iter().filter(|&total| total <= 21).collect()
        };
        prop_assert_eq!(scores(&cards), expected);
    }

    /// Property: scores are never empty and stay sorted
    #[test]
    fn prop_scores_are_sorted_and_non_empty(cards in vec(card_strategy(), 0..7)) {
        let scores = scores(&cards);
        prop_assert!(!scores.is_empty());
        prop_assert!(scores.windows(2).all(|pair| pair[0] < pair[1]));
    }

    /// Property: blackjack means exactly two cards that can total 21
    #[test]
    fn prop_blackjack_is_a_two_card_twenty_one(cards in vec(card_strategy(), 1..5)) {
        let hand = Hand::from_cards(cards.clone());
        let expected = cards.len() == 2 && all_totals(&cards).contains(&21);
        prop_assert_eq!(hand.has_blackjack(), expected);
    }

    /// Property: the dealer hits below 17, on soft 17, and never once bust
    #[test]
    fn prop_dealer_policy(cards in vec(card_strategy(), 1..6)) {
        let hand = Hand::from_cards(cards);
        let best = hand.max_score();

        if hand.is_bust() {
            prop_assert!(!must_hit(&hand));
        } else if best < 17 {
            prop_assert!(must_hit(&hand));
        } else if best > 17 || hand.scores().len() == 1 {
            prop_assert!(!must_hit(&hand));
        } else {
            prop_assert!(must_hit(&hand));
        }
    }

    /// Property: the outcome ignores the wager and the payout scales with it
    #[test]
    fn prop_payout_scales_with_wager(
        player in vec(card_strategy(), 2..5),
        dealer in vec(card_strategy(), 2..5),
        units in 1_u64..10_000,
    ) {
        let factor = win_factor(&Hand::from_cards(player), &Hand::from_cards(dealer));
        let wager = Money::units(units);
        let doubled = Money::units(units * 2);

        prop_assert_eq!(factor.payout(doubled), factor.payout(wager) + factor.payout(wager));
        prop_assert_eq!(factor.payout(wager).minor(), wager.minor() * factor.halves() / 2);
        if factor == WinFactor::Push {
            prop_assert_eq!(factor.payout(wager), wager);
        }
    }

    /// Property: a bust hand never beats the dealer
    #[test]
    fn prop_bust_never_wins(
        player in vec(card_strategy(), 3..6),
        dealer in vec(card_strategy(), 2..5),
    ) {
        let player = Hand::from_cards(player);
        let dealer = Hand::from_cards(dealer);
        prop_assume!(player.is_bust());

        let factor = win_factor(&player, &dealer);
        prop_assert!(matches!(factor, WinFactor::Lose | WinFactor::Push));
    }

    /// Property: a fixed seed always yields the same permutation of a full deck
    #[test]
    fn prop_seeded_shuffle_is_a_stable_permutation(seed in 1_u64..) {
        let mut first = Deck::new();
        first.init();
        first.shuffle(seed);

        let mut second = Deck::new();
        second.init();
        second.shuffle(seed);

        prop_assert_eq!(first.cards(), second.cards());
        let unique: HashSet<Card> = first.cards().iter().copied().collect();
        prop_assert_eq!(unique.len(), DECK_SIZE);
    }

    /// Property: a forced card is the next one drawn
    #[test]
    fn prop_force_next_is_drawn_next(seed in 1_u64.., card in card_strategy(), draws in 0_usize..52) {
        let mut deck = Deck::new();
        deck.init();
        deck.shuffle(seed);
        for _ in 0..draws {
            deck.pop();
        }

        deck.force_next(card);
        prop_assert_eq!(deck.pop(), Some(card));
    }
}
