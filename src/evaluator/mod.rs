pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

pub use combinations::{choose, Combinations};

use crate::cards::{Card, Rank};
use core::cmp::Ordering;
use serde::{Serialize, Serializer};
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }

    /// Length of the tie-break signature for this category.
    pub const fn signature_len(self) -> usize {
        match self {
            HandCategory::RoyalFlush | HandCategory::StraightFlush | HandCategory::Straight => 1,
            HandCategory::FourOfAKind | HandCategory::FullHouse => 2,
            HandCategory::ThreeOfAKind | HandCategory::TwoPair => 3,
            HandCategory::OnePair => 4,
            HandCategory::Flush | HandCategory::HighCard => 5,
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for HandCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Tie-break ranks within a category, most significant first.
///
/// Signatures of the same category always have the same length, so the
/// derived lexicographic order compares them element by element.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature(Vec<Rank>);

impl Signature {
    pub fn new(ranks: Vec<Rank>) -> Self {
        Self(ranks)
    }

    pub fn ranks(&self) -> &[Rank] {
        &self.0
    }

    /// Rank strengths (2..=14).
    pub fn strengths(&self) -> Vec<u8> {
        self.0.iter().map(|r| r.value()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Rank> for Signature {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(|r| r.value()))
    }
}

/// A classified 5-card hand. Ordering looks only at category and signature;
/// which suits make up the hand never matters.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluatedHand {
    category: HandCategory,
    cards: [Card; 5],
    signature: Signature,
}

impl EvaluatedHand {
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The five cards, highest rank first.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EvaluatedHand {}

/// Classify exactly five cards into a category and tie-break signature.
///
/// ```
/// use poker_hand_eval::cards::parse_cards;
/// use poker_hand_eval::evaluator::{classify, HandCategory};
///
/// let cards: [_; 5] = parse_cards("QS QH QD QC 2H").unwrap().try_into().unwrap();
/// let (category, signature) = classify(&cards);
/// assert_eq!(category, HandCategory::FourOfAKind);
/// assert_eq!(signature.strengths(), vec![12, 2]);
/// ```
pub fn classify(cards: &[Card; 5]) -> (HandCategory, Signature) {
    let hand = evaluate_five(cards);
    (hand.category, hand.signature)
}

/// Evaluate exactly five cards; detects category and builds the signature.
pub fn evaluate_five(cards: &[Card; 5]) -> EvaluatedHand {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);

    // First detector to match wins; HighCard always matches
    let (category, signature) = DETECTORS
        .iter()
        .find_map(|d| d.signature(&analysis).map(|sig| (d.category(), sig)))
        .unwrap_or_else(|| (HandCategory::HighCard, Signature::new(analysis.ranks.to_vec())));

    debug_assert_eq!(signature.len(), category.signature_len());
    EvaluatedHand {
        category,
        cards: analysis.sorted_cards,
        signature,
    }
}

/// Total order over evaluated hands: category first, then signature.
///
/// ```
/// use poker_hand_eval::cards::parse_cards;
/// use poker_hand_eval::evaluator::{compare, evaluate_five};
/// use std::cmp::Ordering;
///
/// let wheel: [_; 5] = parse_cards("2C 3D 4H 5S AC").unwrap().try_into().unwrap();
/// let six_high: [_; 5] = parse_cards("2C 3D 4H 5S 6C").unwrap().try_into().unwrap();
/// let ord = compare(&evaluate_five(&wheel), &evaluate_five(&six_high));
/// assert_eq!(ord, Ordering::Less);
/// ```
pub fn compare(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    a.category.cmp(&b.category).then_with(|| a.signature.cmp(&b.signature))
}

/// Reduce hands to the strongest one. On ties the earliest hand is kept.
pub fn best_of<I>(hands: I) -> Option<EvaluatedHand>
where
    I: IntoIterator<Item = EvaluatedHand>,
{
    hands.into_iter().reduce(|best, hand| match compare(&hand, &best) {
        Ordering::Greater => hand,
        _ => best,
    })
}
