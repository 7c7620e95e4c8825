//! Evaluation entry point: raw tokens in, best five-card hand out.
//!
//! Nothing here holds state between calls, so one [`Evaluator`] can be shared
//! freely across threads or requests.

use crate::cards::Card;
use crate::evaluator::suit_info::SuitInfo;
use crate::evaluator::{best_of, evaluate_five, EvaluatedHand, HandCategory, Signature};
use crate::pool::{parse, CardPool, EvalError, PoolConfig};
use log::debug;
use serde::Serialize;

/// The winning hand of a pool, shaped for display.
#[derive(Debug, Clone, Serialize)]
pub struct BestHand {
    label: &'static str,
    description: String,
    #[serde(flatten)]
    hand: EvaluatedHand,
    subsets_examined: usize,
}

impl BestHand {
    fn new(hand: EvaluatedHand, subsets_examined: usize) -> Self {
        Self {
            label: hand.category().label(),
            description: describe(&hand),
            hand,
            subsets_examined,
        }
    }

    /// Category label, e.g. "Full House".
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Label with the deciding ranks, e.g. "Full House: K full of Q".
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> HandCategory {
        self.hand.category()
    }

    pub fn signature(&self) -> &Signature {
        self.hand.signature()
    }

    /// The five cards making up the hand, highest rank first.
    pub fn cards(&self) -> &[Card; 5] {
        self.hand.cards()
    }

    pub fn hand(&self) -> &EvaluatedHand {
        &self.hand
    }

    /// How many 5-card subsets of the pool were classified.
    pub fn subsets_examined(&self) -> usize {
        self.subsets_examined
    }
}

fn describe(hand: &EvaluatedHand) -> String {
    let label = hand.category().label();
    let ranks = hand.signature().ranks();
    let (Some(first), second) = (ranks.first(), ranks.get(1)) else {
        return label.to_string();
    };
    match (hand.category(), second) {
        (HandCategory::RoyalFlush, _) => label.to_string(),
        (HandCategory::StraightFlush, _) => match SuitInfo::detect(hand.cards()).flush_suit() {
            Some(suit) => format!("{label}: {first} high of {}", suit.to_char()),
            None => format!("{label}: {first} high"),
        },
        (HandCategory::Straight | HandCategory::Flush, _) => format!("{label}: {first} high"),
        (HandCategory::FullHouse, Some(pair)) => format!("{label}: {first} full of {pair}"),
        (HandCategory::TwoPair, Some(low)) => format!("{label}: {first} and {low}"),
        _ => format!("{label}: {first}"),
    }
}

/// Evaluates card pools under a fixed [`PoolConfig`].
///
/// ```
/// use poker_hand_eval::engine::Evaluator;
/// use poker_hand_eval::pool::PoolConfig;
///
/// let evaluator = Evaluator::new(PoolConfig::with_max_cards(6).unwrap());
/// let best = evaluator.evaluate(&["KS", "KH", "KD", "QC", "QS", "2H"]).unwrap();
/// assert_eq!(best.description(), "Full House: K full of Q");
/// assert_eq!(best.subsets_examined(), 6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    config: PoolConfig,
}

impl Evaluator {
    pub fn new(config: PoolConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Parse `tokens` and return the best hand they contain.
    /// Any parse failure is returned as-is without evaluating anything.
    pub fn evaluate<S: AsRef<str>>(&self, tokens: &[S]) -> Result<BestHand, EvalError> {
        let pool = parse(tokens, &self.config)?;
        self.evaluate_pool(&pool)
    }

    /// Evaluate an already validated pool.
    pub fn evaluate_pool(&self, pool: &CardPool) -> Result<BestHand, EvalError> {
        let subsets = pool.subsets();
        let examined = subsets.len();
        let hand = best_of(subsets.map(|five| evaluate_five(&five)))
            .ok_or(EvalError::InsufficientCards(pool.len()))?;

        debug!(
            "pool of {} cards: {} subsets examined, best is {} {:?}",
            pool.len(),
            examined,
            hand.category(),
            hand.signature().strengths()
        );
        Ok(BestHand::new(hand, examined))
    }
}

/// Evaluate tokens with the default pool bounds (5 to 7 cards).
///
/// ```
/// use poker_hand_eval::engine::evaluate;
/// use poker_hand_eval::evaluator::HandCategory;
///
/// let best = evaluate(&["10H", "JH", "QH", "KH", "AH"]).unwrap();
/// assert_eq!(best.category(), HandCategory::RoyalFlush);
/// assert_eq!(best.label(), "Royal Flush");
/// ```
pub fn evaluate<S: AsRef<str>>(tokens: &[S]) -> Result<BestHand, EvalError> {
    Evaluator::default().evaluate(tokens)
}
