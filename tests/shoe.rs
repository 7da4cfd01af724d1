//! Shoe dealing, reset, and shuffle tests.

use cardshoe::{
    CardId, CustomDeck, DeckError, DeckType, Shoe, ShoeState, ShuffleMode, StandardDeck,
    StandardKind,
};

fn sorted_ids(shoe: &Shoe) -> Vec<CardId> {
    let mut ids = shoe.card_ids().to_vec();
    ids.sort();
    ids
}

#[test]
fn three_deck_poker_shoe_deals_156_cards() {
    let mut shoe = Shoe::new(StandardDeck::default(), 3, 1);
    assert_eq!(shoe.num_cards(), 156);
    assert_eq!(shoe.num_decks(), 3);

    for dealt in 0..156 {
        assert!(shoe.has_more_cards(), "ran dry after {dealt} cards");
        assert!(shoe.next_card().is_some());
    }

    assert!(!shoe.has_more_cards());
    assert!(shoe.next_card().is_none());
    assert_eq!(shoe.num_cards_remaining(), 0);

    shoe.reset();
    assert!(shoe.has_more_cards());
    assert_eq!(shoe.num_cards_remaining(), 156);
}

#[test]
fn decks_are_concatenated_in_composed_order() {
    let shoe = Shoe::new(StandardKind::Euchre, 2, 1);
    let ids = shoe.card_ids();
    let deck = shoe.deck().card_ids();

    assert_eq!(&ids[..24], deck);
    assert_eq!(&ids[24..], deck);
}

#[test]
fn state_follows_cursor() {
    let mut shoe = Shoe::single(CustomDeck::new(["S"], ["a", "b"], [1, 2]), 1);
    assert_eq!(shoe.state(), ShoeState::Fresh);

    shoe.next_card().unwrap();
    assert_eq!(shoe.state(), ShoeState::Dealing);

    shoe.next_card().unwrap();
    assert_eq!(shoe.state(), ShoeState::Exhausted);

    shoe.reset();
    assert_eq!(shoe.state(), ShoeState::Fresh);
}

#[test]
fn reset_keeps_order() {
    let mut shoe = Shoe::poker(5);
    shoe.shuffle();
    let first: Vec<CardId> = (0..10).map(|_| shoe.next_card().unwrap().id()).collect();

    shoe.reset();
    let again: Vec<CardId> = (0..10).map(|_| shoe.next_card().unwrap().id()).collect();

    assert_eq!(first, again);
}

#[test]
fn shuffle_preserves_cards_and_resets_cursor() {
    let mut shoe = Shoe::new(StandardDeck::default().with_jokers(2), 2, 9);
    let before = sorted_ids(&shoe);
    let unshuffled = shoe.card_ids().to_vec();

    shoe.next_card().unwrap();
    shoe.next_card().unwrap();
    shoe.shuffle();

    assert_eq!(shoe.num_cards(), 108);
    assert_eq!(shoe.num_cards_remaining(), shoe.num_cards());
    assert_eq!(sorted_ids(&shoe), before);
    assert_ne!(shoe.card_ids(), &unshuffled[..]);

    shoe.shuffle();
    shoe.reset();
    assert_eq!(shoe.num_cards_remaining(), 108);
    assert_eq!(sorted_ids(&shoe), before);
}

#[test]
fn shuffle_is_reproducible_per_seed() {
    let mut a = Shoe::poker(42);
    let mut b = Shoe::poker(42);
    let mut c = Shoe::poker(43);

    a.shuffle();
    b.shuffle();
    c.shuffle();

    assert_eq!(a.card_ids(), b.card_ids());
    assert_ne!(a.card_ids(), c.card_ids());
}

#[test]
fn fisher_yates_mode_preserves_cards() {
    let mut shoe =
        Shoe::new(StandardKind::Pinochle, 2, 3).with_shuffle_mode(ShuffleMode::FisherYates);
    let before = sorted_ids(&shoe);

    shoe.shuffle();
    assert_eq!(sorted_ids(&shoe), before);
    assert_eq!(shoe.num_cards(), 96);
}

#[test]
fn ace_high_toggle_only_affects_later_cards() {
    let mut shoe = Shoe::poker(1);
    assert!(shoe.is_ace_high());

    let ace_of_hearts = shoe.next_card().unwrap();
    shoe.set_ace_high(false);
    assert!(!shoe.is_ace_high());
    let two_of_hearts = shoe.next_card().unwrap();

    assert!(ace_of_hearts.is_ace_high());
    assert!(!two_of_hearts.is_ace_high());
    assert!(ace_of_hearts.is_greater_than(&two_of_hearts));

    shoe.reset();
    let ace_again = shoe.next_card().unwrap();
    assert_eq!(ace_again.id(), ace_of_hearts.id());
    assert!(!ace_again.is_ace_high());
    assert!(!ace_again.is_greater_than(&two_of_hearts));
    assert_eq!(ace_again, ace_of_hearts);
    assert_ne!(ace_again, two_of_hearts);
}

#[test]
fn custom_shoe_reports_custom_flags() {
    let mut shoe = Shoe::new(
        CustomDeck::new(["Red", "Black"], ["Low", "High", "Joker"], [1, 2, 0])
            .with_unsuited_pips([2]),
        2,
        1,
    );

    assert_eq!(shoe.deck_type(), DeckType::Custom);
    assert_eq!(shoe.num_cards(), 10);
    assert!(!shoe.is_ace_high());
    assert!(!shoe.are_faces_ten());

    let names: Vec<String> = core::iter::from_fn(|| shoe.next_card())
        .map(|card| card.name().to_owned())
        .collect();
    assert_eq!(names[4], "Joker (Unsuited)");
    assert_eq!(names[9], "Joker (Unsuited)");
}

#[test]
fn try_new_validates() {
    assert_eq!(
        Shoe::try_new(StandardDeck::default(), 0, 1).unwrap_err(),
        DeckError::NoDecks
    );

    let broken = CustomDeck::new(Vec::<String>::new(), ["a"], [1]);
    assert_eq!(Shoe::try_new(broken, 1, 1).unwrap_err(), DeckError::NoSuits);

    let shoe = Shoe::try_new(StandardKind::Euchre, 4, 1).unwrap();
    assert_eq!(shoe.num_cards(), 96);
}

#[test]
fn empty_shoe_is_exhausted() {
    let mut shoe = Shoe::new(StandardDeck::default(), 0, 1);
    assert_eq!(shoe.num_cards(), 0);
    assert_eq!(shoe.state(), ShoeState::Exhausted);
    assert!(shoe.next_card().is_none());
    shoe.shuffle();
    assert!(!shoe.has_more_cards());
}
