use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{HandCategory, Signature};

/// Strategy pattern: each detector recognizes one category and builds its
/// tie-break signature. `None` means the hand is not of this category.
pub trait CategoryDetector: Sync {
    fn category(&self) -> HandCategory;
    fn signature(&self, analysis: &HandAnalysis) -> Option<Signature>;
}

fn straight_top(analysis: &HandAnalysis) -> Option<Rank> {
    analysis.straight_info.top_rank
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: Ten through Ace, all same suit
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn category(&self) -> HandCategory {
        HandCategory::RoyalFlush
    }

    fn signature(&self, analysis: &HandAnalysis) -> Option<Signature> {
        match straight_top(analysis) {
            Some(Rank::Ace) if analysis.suit_info.is_flush() => {
                Some(Signature::new(vec![Rank::Ace]))
            }
            _ => None,
        }
    }
}

/// Straight Flush: five consecutive ranks, all same suit, below Ace high
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> HandCategory {
        HandCategory::StraightFlush
    }

    fn signature(&self, analysis: &HandAnalysis) -> Option<Signature> {
        let top = straight_top(analysis)?;
        analysis.suit_info.is_flush().then(|| Signature::new(vec![top]))
    }
}

/// Four of a Kind: quad rank, then the kicker
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> HandCategory {
        HandCategory::FourOfAKind
    }

    fn signature(&self, analysis: &HandAnalysis) -> Option<Signature> {
        let quad = analysis.rank_groups.quad()?;
        Some(Signature::from_iter(std::iter::once(quad).chain(analysis.rank_groups.kickers())))
    }
}

/// Full House: triple rank, then pair rank
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> HandCategory {
        HandCategory::FullHouse
    }

    fn signature(&self, analysis: &HandAnalysis) -> Option<Signature> {
        let trips = analysis.rank_groups.trips()?;
        let pair = analysis.rank_groups.pairs().first().copied()?;
        Some(Signature::new(vec![trips, pair]))
    }
}

/// Flush: all five ranks, highest first
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> HandCategory {
        HandCategory::Flush
    }

    fn signature(&self, analysis: &HandAnalysis) -> Option<Signature> {
        analysis.suit_info.is_flush().then(|| Signature::new(analysis.ranks.to_vec()))
    }
}

/// Straight: top card only; the wheel counts Five as top
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> HandCategory {
        HandCategory::Straight
    }

    fn signature(&self, analysis: &HandAnalysis) -> Option<Signature> {
        straight_top(analysis).map(|top| Signature::new(vec![top]))
    }
}

/// Three of a Kind: triple rank, then two kickers
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> HandCategory {
        HandCategory::ThreeOfAKind
    }

    fn signature(&self, analysis: &HandAnalysis) -> Option<Signature> {
        let trips = analysis.rank_groups.trips()?;
        if !analysis.rank_groups.pairs().is_empty() {
            return None;
        }
        Some(Signature::from_iter(std::iter::once(trips).chain(analysis.rank_groups.kickers())))
    }
}

/// Two Pair: higher pair, lower pair, kicker
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> HandCategory {
        HandCategory::TwoPair
    }

    fn signature(&self, analysis: &HandAnalysis) -> Option<Signature> {
        let pairs = analysis.rank_groups.pairs();
        if pairs.len() != 2 {
            return None;
        }
        Some(Signature::from_iter(pairs.into_iter().chain(analysis.rank_groups.kickers())))
    }
}

/// One Pair: pair rank, then three kickers
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> HandCategory {
        HandCategory::OnePair
    }

    fn signature(&self, analysis: &HandAnalysis) -> Option<Signature> {
        let pairs = analysis.rank_groups.pairs();
        if pairs.len() != 1 || analysis.rank_groups.trips().is_some() {
            return None;
        }
        Some(Signature::from_iter(pairs.into_iter().chain(analysis.rank_groups.kickers())))
    }
}

/// High Card: all five ranks, highest first
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> HandCategory {
        HandCategory::HighCard
    }

    fn signature(&self, analysis: &HandAnalysis) -> Option<Signature> {
        // fallback: always matches
        Some(Signature::new(analysis.ranks.to_vec()))
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
