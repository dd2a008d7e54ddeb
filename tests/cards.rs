//! Card catalog, hand scoring, shoe and dealer policy tests.

use std::collections::{HashMap, HashSet};

use bjtable::{
    Card, CardCatalog, CatalogError, DECK_SIZE, DealerPolicy, GameOptions, Hand, HandCard,
    HandTotals, Rank, RankValue, Shoe, ShoeError, Suit,
};

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new();
    for &rank in ranks {
        hand.push(HandCard::up(Card::new(rank, Suit::Clubs)));
    }
    hand
}

fn sorted(mut scores: Vec<u8>) -> Vec<u8> {
    scores.sort_unstable();
    scores
}

#[test]
fn catalog_resolves_raw_rank_and_suit() {
    let catalog = CardCatalog::new();

    assert_eq!(
        catalog.get(1, 0).unwrap(),
        Card::new(Rank::Ace, Suit::Hearts)
    );
    assert_eq!(
        catalog.get(13, 3).unwrap(),
        Card::new(Rank::King, Suit::Spades)
    );
    assert_eq!(catalog.get(7, 2).unwrap(), catalog.get(7, 2).unwrap());
    assert_eq!(
        catalog.get(7, 2).unwrap(),
        catalog.card(Rank::Seven, Suit::Clubs)
    );

    assert_eq!(catalog.get(0, 0).unwrap_err(), CatalogError::InvalidRank(0));
    assert_eq!(catalog.get(14, 0).unwrap_err(), CatalogError::InvalidRank(14));
    assert_eq!(catalog.get(1, 4).unwrap_err(), CatalogError::InvalidSuit(4));
}

#[test]
fn catalog_deck_is_ordered_and_complete() {
    let catalog = CardCatalog::new();
    let deck = catalog.deck();

    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck[0], Card::new(Rank::Ace, Suit::Hearts));
    assert_eq!(deck[12], Card::new(Rank::King, Suit::Hearts));
    assert_eq!(deck[13], Card::new(Rank::Ace, Suit::Diamonds));
    assert_eq!(deck[51], Card::new(Rank::King, Suit::Spades));

    let distinct: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(distinct.len(), DECK_SIZE);
}

#[test]
fn rank_values() {
    assert_eq!(Rank::Ace.values(), RankValue::Either(1, 11));
    assert_eq!(Rank::Two.values(), RankValue::Single(2));
    assert_eq!(Rank::Ten.values(), RankValue::Single(10));
    assert_eq!(Rank::Queen.values(), RankValue::Single(10));
    assert_eq!(Rank::Nine.number(), 9);
    assert_eq!(Rank::King.number(), 13);
}

#[test]
fn soft_hand_scores_follow_each_card() {
    let mut hand = hand_of(&[Rank::Ace, Rank::Eight]);
    assert_eq!(sorted(hand.scores()), [9, 19]);
    assert!(hand.is_soft());

    hand.push(HandCard::up(Card::new(Rank::Two, Suit::Hearts)));
    assert_eq!(sorted(hand.scores()), [11, 21]);
    assert!(hand.has_21());

    hand.push(HandCard::up(Card::new(Rank::King, Suit::Hearts)));
    assert_eq!(sorted(hand.scores()), [21, 31]);
    assert_eq!(hand.legal_scores(), [21]);
    assert!(hand.has_21());
    assert!(!hand.has_busted());

    hand.push(HandCard::up(Card::new(Rank::Two, Suit::Spades)));
    assert!(hand.scores().iter().all(|&total| total > 21));
    assert!(hand.has_busted());
    assert_eq!(hand.best_score(), None);
}

#[test]
fn empty_hand_scores_zero() {
    let hand = Hand::new();
    assert_eq!(hand.scores(), [0]);
    assert_eq!(hand.min_score(), 0);
    assert!(!hand.has_busted());
    assert!(!hand.has_21());
}

#[test]
fn aces_branch_and_keep_duplicates() {
    let hand = hand_of(&[Rank::Ace, Rank::Ace]);
    assert_eq!(sorted(hand.scores()), [2, 12, 12, 22]);
    assert_eq!(hand.legal_scores(), [2, 12]);
    assert_eq!(hand.best_score(), Some(12));
}

#[test]
fn totals_agree_with_individual_checks() {
    let cases: [&[Rank]; 5] = [
        &[],
        &[Rank::Ace, Rank::King],
        &[Rank::Ace, Rank::Eight, Rank::Two, Rank::King],
        &[Rank::King, Rank::Queen, Rank::Five],
        &[Rank::Ace, Rank::Ace, Rank::Nine],
    ];

    for ranks in cases {
        let hand = hand_of(ranks);
        assert_eq!(
            hand.totals(),
            HandTotals {
                has_21: hand.has_21(),
                busted: hand.has_busted(),
                best: hand.best_score(),
            },
            "{ranks:?}"
        );
    }

    let busted = hand_of(&[Rank::King, Rank::Queen, Rank::Five]).totals();
    assert!(busted.busted);
    assert_eq!(busted.best, None);
}

#[test]
fn replace_cards_and_reveal() {
    let mut hand = hand_of(&[Rank::Two]);
    hand.replace_cards([
        HandCard::down(Card::new(Rank::Nine, Suit::Hearts)),
        HandCard::up(Card::new(Rank::Queen, Suit::Hearts)),
    ]);
    assert_eq!(hand.len(), 2);
    assert_eq!(hand.scores(), [19]);
    assert!(!hand.cards()[0].face_up);

    hand.reveal();
    assert!(hand.cards().iter().all(|held| held.face_up));
}

#[test]
fn dealer_policies() {
    let soft_18 = hand_of(&[Rank::Ace, Rank::Seven]);
    let soft_17 = hand_of(&[Rank::Ace, Rank::Six]);
    let hard_17 = hand_of(&[Rank::Ten, Rank::Seven]);
    let hard_16 = hand_of(&[Rank::Ten, Rank::Six]);

    let literal = DealerPolicy::default();
    assert_eq!(literal, DealerPolicy::AnyTotalBelow(18));
    assert!(literal.should_hit(&soft_18));
    assert!(literal.should_hit(&hard_17));
    assert!(!literal.should_hit(&hand_of(&[Rank::Ten, Rank::Eight])));

    assert!(!DealerPolicy::StandOnSoft17.should_hit(&soft_17));
    assert!(!DealerPolicy::StandOnSoft17.should_hit(&hard_17));
    assert!(DealerPolicy::StandOnSoft17.should_hit(&hard_16));

    assert!(DealerPolicy::HitSoft17.should_hit(&soft_17));
    assert!(!DealerPolicy::HitSoft17.should_hit(&hard_17));
    assert!(!DealerPolicy::HitSoft17.should_hit(&soft_18));
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_decks(4)
        .with_dealer_policy(DealerPolicy::HitSoft17)
        .with_penetration(0.5);

    assert_eq!(options.decks, 4);
    assert_eq!(options.dealer_policy, DealerPolicy::HitSoft17);
    assert!((options.penetration - 0.5).abs() < f64::EPSILON);

    let defaults = GameOptions::default();
    assert_eq!(defaults.decks, 6);
    assert_eq!(defaults.dealer_policy, DealerPolicy::AnyTotalBelow(18));
}

#[test]
fn six_deck_shoe_holds_six_of_every_card() {
    let catalog = CardCatalog::new();
    let shoe = Shoe::new(&catalog, 6, 42);

    assert_eq!(shoe.len(), 6 * DECK_SIZE);
    assert_eq!(shoe.capacity(), 6 * DECK_SIZE);

    let mut counts: HashMap<Card, usize> = HashMap::new();
    for card in shoe.remaining() {
        *counts.entry(*card).or_default() += 1;
    }
    assert_eq!(counts.len(), DECK_SIZE);
    assert!(counts.values().all(|&count| count == 6));
}

#[test]
fn shoe_order_depends_on_seed() {
    let catalog = CardCatalog::new();
    let a = Shoe::new(&catalog, 6, 1);
    let b = Shoe::new(&catalog, 6, 2);
    let a_again = Shoe::new(&catalog, 6, 1);

    assert_ne!(a.remaining(), b.remaining());
    assert_eq!(a.remaining(), a_again.remaining());
}

#[test]
fn draw_pops_until_exhausted() {
    let mut shoe = Shoe::stacked(&[
        Card::new(Rank::Two, Suit::Hearts),
        Card::new(Rank::Three, Suit::Hearts),
    ]);

    assert_eq!(shoe.draw().unwrap(), Card::new(Rank::Two, Suit::Hearts));
    assert_eq!(shoe.len(), 1);
    assert_eq!(shoe.draw().unwrap(), Card::new(Rank::Three, Suit::Hearts));
    assert!(shoe.is_empty());
    assert_eq!(shoe.draw().unwrap_err(), ShoeError::Exhausted);
    assert!((shoe.used_ratio() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn reshuffle_keeps_remaining_cards() {
    let catalog = CardCatalog::new();
    let mut shoe = Shoe::new(&catalog, 1, 9);
    for _ in 0..10 {
        shoe.draw().unwrap();
    }

    let mut before = shoe.remaining().to_vec();
    shoe.reshuffle();
    let mut after = shoe.remaining().to_vec();

    assert_eq!(after.len(), DECK_SIZE - 10);
    let key = |card: &Card| (card.suit, card.rank);
    before.sort_by_key(key);
    after.sort_by_key(key);
    assert_eq!(before, after);
}
