//! Face-value comparison and ranking tests.

use core::cmp::Ordering;

use cardshoe::{Card, CardId, CustomDeck, Deck, Face, StandardDeck, Suit, compare_cards};

fn card(deck: &Deck, suit: Suit, face: Face) -> Card {
    deck.card(CardId::encode(suit.index(), face.index()))
}

fn joker(deck: &Deck) -> Card {
    deck.card(CardId::encode(4, Face::Joker.index()))
}

#[test]
fn ace_high_beats_king_but_not_joker() {
    let deck = Deck::new(StandardDeck::default().with_jokers(1));
    let ace = card(&deck, Suit::Spades, Face::Ace);
    let king = card(&deck, Suit::Spades, Face::King);
    let joker = joker(&deck);

    assert!(ace.is_greater_than(&king));
    assert!(!ace.is_less_than(&king));
    assert!(!ace.is_greater_than(&joker));
    assert!(ace.is_less_than(&joker));
    assert!(joker.is_greater_than(&ace));
}

#[test]
fn aces_of_different_suits_are_equal() {
    let deck = Deck::default();
    let spades = card(&deck, Suit::Spades, Face::Ace);
    let hearts = card(&deck, Suit::Hearts, Face::Ace);

    assert!(spades.is_equal_to(&hearts));
    assert!(!spades.is_greater_than(&hearts));
    assert!(!spades.is_less_than(&hearts));
    assert_ne!(spades, hearts);
}

#[test]
fn ace_low_compares_numerically() {
    let deck = Deck::new(StandardDeck::default().with_ace_high(false));
    let ace = card(&deck, Suit::Clubs, Face::Ace);
    let two = card(&deck, Suit::Clubs, Face::Two);

    assert!(ace.is_less_than(&two));
    assert!(!ace.is_greater_than(&two));
}

#[test]
fn single_card_methods_only_check_left_ace() {
    let deck = Deck::default();
    let ace = card(&deck, Suit::Hearts, Face::Ace);
    let king = card(&deck, Suit::Hearts, Face::King);

    // The king's own check is plain numeric: 13 > 1.
    assert!(king.is_greater_than(&ace));
    assert!(ace.is_greater_than(&king));
}

#[test]
fn compare_cards_checks_both_sides_for_aces() {
    let deck = Deck::new(StandardDeck::default().with_jokers(1));
    let ace = card(&deck, Suit::Diamonds, Face::Ace);
    let other_ace = card(&deck, Suit::Clubs, Face::Ace);
    let king = card(&deck, Suit::Diamonds, Face::King);
    let five = card(&deck, Suit::Hearts, Face::Five);
    let joker = joker(&deck);

    assert_eq!(compare_cards(&ace, &king), Ordering::Less);
    assert_eq!(compare_cards(&king, &ace), Ordering::Greater);
    assert_eq!(compare_cards(&ace, &other_ace), Ordering::Equal);
    assert_eq!(compare_cards(&king, &five), Ordering::Less);
    assert_eq!(compare_cards(&five, &king), Ordering::Greater);
    assert_eq!(compare_cards(&joker, &ace), Ordering::Less);
    assert_eq!(compare_cards(&ace, &joker), Ordering::Greater);
}

#[test]
fn compare_cards_sorts_highest_first() {
    let deck = Deck::new(StandardDeck::default().with_jokers(1));
    let mut hand = vec![
        card(&deck, Suit::Hearts, Face::Three),
        card(&deck, Suit::Spades, Face::Ace),
        joker(&deck),
        card(&deck, Suit::Clubs, Face::Queen),
        card(&deck, Suit::Diamonds, Face::Ten),
    ];

    hand.sort_by(compare_cards);
    let names: Vec<&str> = hand.iter().map(Card::name).collect();

    assert_eq!(
        names,
        [
            "Joker (Unsuited)",
            "Ace of Spades",
            "Queen of Clubs",
            "Ten of Diamonds",
            "Three of Hearts"
        ]
    );
}

#[test]
fn compare_cards_with_ace_low() {
    let deck = Deck::new(StandardDeck::default().with_ace_high(false));
    let ace = card(&deck, Suit::Hearts, Face::Ace);
    let two = card(&deck, Suit::Hearts, Face::Two);

    assert_eq!(compare_cards(&ace, &two), Ordering::Greater);
}

#[test]
fn faces_ten_court_cards_tie() {
    let deck = Deck::new(StandardDeck::default().with_faces_ten(true));
    let jack = card(&deck, Suit::Hearts, Face::Jack);
    let king = card(&deck, Suit::Spades, Face::King);

    assert!(jack.is_equal_to(&king));
    assert_eq!(compare_cards(&jack, &king), Ordering::Equal);
}

#[test]
fn custom_first_pip_is_never_ace_high() {
    let deck = Deck::new(CustomDeck::new(["Only"], ["Low", "High"], [1, 2]));
    let low = deck.card(CardId::encode(0, 0));
    let high = deck.card(CardId::encode(0, 1));

    assert!(!low.is_greater_than(&high));
    assert!(high.is_greater_than(&low));
    assert_eq!(compare_cards(&high, &low), Ordering::Less);
}
