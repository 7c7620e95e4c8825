use poker_hand_eval::cards::{Card, Rank, Suit};
use poker_hand_eval::engine::{evaluate, Evaluator};
use poker_hand_eval::evaluator::HandCategory;
use poker_hand_eval::pool::{EvalError, PoolConfig};

#[test]
fn royal_flush() {
    let best = evaluate(&["10H", "JH", "QH", "KH", "AH"]).unwrap();
    assert_eq!(best.category(), HandCategory::RoyalFlush);
    assert_eq!(best.label(), "Royal Flush");
}

#[test]
fn wheel_ranks_below_six_high_straight() {
    let wheel = evaluate(&["2C", "3D", "4H", "5S", "AC"]).unwrap();
    let six_high = evaluate(&["6C", "7D", "8H", "9S", "10C"]).unwrap();
    assert_eq!(wheel.category(), HandCategory::Straight);
    assert_eq!(six_high.category(), HandCategory::Straight);
    assert_eq!(wheel.signature().strengths(), vec![5]);
    assert!(wheel.hand() < six_high.hand());
}

#[test]
fn four_of_a_kind_queens() {
    let best = evaluate(&["QS", "QH", "QD", "QC", "2H"]).unwrap();
    assert_eq!(best.category(), HandCategory::FourOfAKind);
    assert_eq!(best.signature().ranks(), &[Rank::Queen, Rank::Two]);
}

#[test]
fn pair_of_twos_with_kickers() {
    let best = evaluate(&["2H", "2D", "5C", "9S", "KH"]).unwrap();
    assert_eq!(best.category(), HandCategory::OnePair);
    assert_eq!(best.signature().strengths(), vec![2, 13, 9, 5]);
}

#[test]
fn four_cards_are_insufficient() {
    let err = evaluate(&["2H", "2D", "2S", "2C"]).unwrap_err();
    assert_eq!(err, EvalError::InsufficientCards(4));
}

#[test]
fn repeated_token_is_duplicate() {
    let err = evaluate(&["AH", "AH", "KD", "7C", "3S"]).unwrap_err();
    assert_eq!(err, EvalError::DuplicateCard(Card::new(Rank::Ace, Suit::Hearts)));
}

#[test]
fn eight_cards_exceed_default_maximum() {
    let err = evaluate(&["2H", "3H", "4H", "5H", "6H", "7H", "8H", "9H"]).unwrap_err();
    assert_eq!(err, EvalError::TooManyCards(8));
}

#[test]
fn unknown_token_is_reported_verbatim() {
    let err = evaluate(&["2H", "3H", "4H", "5H", "11H"]).unwrap_err();
    assert_eq!(err, EvalError::InvalidCardFormat("11H".to_string()));
    assert_eq!(err.to_string(), "invalid card format: '11H'");
}

#[test]
fn raised_maximum_accepts_larger_pools() {
    let evaluator = Evaluator::new(PoolConfig::with_max_cards(9).unwrap());
    let tokens = ["2C", "7D", "9S", "QC", "QD", "QH", "5S", "5H", "KD"];
    let best = evaluator.evaluate(&tokens).unwrap();
    assert_eq!(best.category(), HandCategory::FullHouse);
    assert_eq!(best.description(), "Full House: Q full of 5");
    assert_eq!(best.subsets_examined(), 126);
}

#[test]
fn pool_flush_beats_straight_on_board() {
    let best = evaluate(&["4H", "5D", "6H", "7C", "8H", "KH", "2H"]).unwrap();
    assert_eq!(best.category(), HandCategory::Flush);
    assert_eq!(best.signature().strengths(), vec![13, 8, 6, 4, 2]);
}

#[test]
fn two_pair_keeps_best_kicker_from_pool() {
    let best = evaluate(&["KS", "KH", "9D", "9C", "2H", "AS", "3D"]).unwrap();
    assert_eq!(best.category(), HandCategory::TwoPair);
    assert_eq!(best.signature().strengths(), vec![13, 9, 14]);
}

#[test]
fn three_pairs_play_top_two() {
    let best = evaluate(&["KS", "KH", "9D", "9C", "4H", "4S", "2D"]).unwrap();
    assert_eq!(best.category(), HandCategory::TwoPair);
    assert_eq!(best.signature().strengths(), vec![13, 9, 4]);
}

#[test]
fn tokens_with_inner_whitespace_are_rejected() {
    let err = evaluate(&["A H", "10 D", "Q\tS", "KC", "2H"]).unwrap_err();
    assert_eq!(err, EvalError::InvalidCardFormat("A H".to_string()));
}

#[test]
fn straight_flush_description_names_suit() {
    let best = evaluate(&["5C", "6C", "7C", "8C", "9C", "9H", "2D"]).unwrap();
    assert_eq!(best.category(), HandCategory::StraightFlush);
    assert_eq!(best.description(), "Straight Flush: 9 high of C");
}
