//! Property tests for deck invariants.
//!
//! - Conservation across deal / discard / shuffle
//! - Shuffle is a permutation and is deterministic per seed
//! - Deal exhaustion
//! - Round-robin fairness bound of `deal_all`

use card_deck::cards::{Card, Hand};
use card_deck::deck::Deck;
use proptest::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct Numbered(u16);

impl Card for Numbered {
    fn label(&self) -> String {
        format!("#{}", self.0)
    }
}

fn numbered(n: usize) -> Vec<Numbered> {
    (0..n as u16).map(Numbered).collect()
}

fn sorted_ids(cards: &[Numbered]) -> Vec<u16> {
    let mut ids: Vec<u16> = cards.iter().map(|c| c.0).collect();
    ids.sort_unstable();
    ids
}

#[derive(Clone, Debug)]
enum Op {
    Deal(usize),
    Discard(usize),
    Shuffle(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..4).prop_map(Op::Deal),
        (0usize..4).prop_map(Op::Discard),
        any::<u64>().prop_map(Op::Shuffle),
    ]
}

proptest! {
    /// Property: undealt + discarded + held stays constant.
    #[test]
    fn prop_conservation(
        n in 0usize..60,
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut deck = Deck::new(numbered(n));
        let mut hands: Vec<Hand<Numbered>> = (0..4).map(|i| Hand::new(format!("P{}", i))).collect();

        for op in ops {
            match op {
                Op::Deal(i) => {
                    deck.deal(&mut hands[i]);
                }
                Op::Discard(i) => {
                    deck.discard(hands[i].drain()).unwrap();
                }
                Op::Shuffle(seed) => {
                    deck.shuffle(seed);
                }
            }

            let held: usize = hands.iter().map(Hand::len).sum();
            prop_assert_eq!(deck.len() + deck.discard_count() + held, n);
            prop_assert_eq!(deck.outstanding_count(), held);
        }

        let mut everything = deck.cards();
        everything.extend(deck.discards());
        for hand in &hands {
            everything.extend(hand.cards().iter().cloned());
        }
        prop_assert_eq!(sorted_ids(&everything), (0..n as u16).collect::<Vec<_>>());
    }

    /// Property: shuffle keeps the multiset of undealt + discarded and empties discards.
    #[test]
    fn prop_shuffle_is_permutation(
        n in 0usize..80,
        returned in 0usize..20,
        seed in any::<u64>(),
    ) {
        let mut deck = Deck::new(numbered(n));
        let mut hand = Hand::new("P1");
        deck.deal_hand(&mut hand, returned);
        deck.discard(hand.drain()).unwrap();

        let mut before = deck.cards();
        before.extend(deck.discards());

        deck.shuffle(seed);

        prop_assert!(deck.discards().is_empty());
        prop_assert_eq!(sorted_ids(&deck.cards()), sorted_ids(&before));
    }

    /// Property: same seed, same cards, same order.
    #[test]
    fn prop_shuffle_deterministic(n in 0usize..80, seed in any::<u64>()) {
        let mut a = Deck::new(numbered(n));
        let mut b = Deck::new(numbered(n));

        prop_assert_eq!(a.shuffle(seed), b.shuffle(seed));
        prop_assert_eq!(a.cards(), b.cards());
    }

    /// Property: deal fails exactly when the deck is empty.
    #[test]
    fn prop_deal_exhaustion(n in 0usize..30, attempts in 0usize..40) {
        let mut deck = Deck::new(numbered(n));
        let mut hand = Hand::new("P1");

        for _ in 0..attempts {
            let before = deck.len();
            let held = hand.len();
            let dealt = deck.deal(&mut hand);

            prop_assert_eq!(dealt, before > 0);
            if dealt {
                prop_assert_eq!(deck.len(), before - 1);
                prop_assert_eq!(hand.len(), held + 1);
            } else {
                prop_assert_eq!(deck.len(), 0);
                prop_assert_eq!(hand.len(), held);
            }
        }
    }

    /// Property: each recipient gets floor(n/k) or ceil(n/k), earlier ones the larger share.
    #[test]
    fn prop_round_robin_fairness(n in 0usize..100, k in 1usize..9) {
        let mut deck = Deck::new(numbered(n));
        let mut hands: Vec<Hand<Numbered>> = (0..k).map(|i| Hand::new(format!("P{}", i))).collect();

        prop_assert_eq!(deck.deal_all(&mut hands), n);
        prop_assert!(deck.is_empty());

        let (base, extra) = (n / k, n % k);
        for (i, hand) in hands.iter().enumerate() {
            let expected = if i < extra { base + 1 } else { base };
            prop_assert_eq!(hand.len(), expected);
        }
    }
}
