use crate::cards::Card;
use crate::evaluator::combinations::Combinations;
use log::debug;
use std::collections::HashSet;

/// Smallest pool that forms a hand.
pub const MIN_CARDS: usize = 5;

/// Default upper bound on pool size, enough for hold'em style input (2 + 5).
pub const DEFAULT_MAX_CARDS: usize = 7;

/// Largest pool a standard deck can supply without duplicates.
pub const DECK_SIZE: usize = 52;

/// Failures surfaced while turning raw tokens into a [`CardPool`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid card format: '{0}'")]
    InvalidCardFormat(String),
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("not enough cards: got {0}, need at least 5")]
    InsufficientCards(usize),
    #[error("too many cards: got {0}")]
    TooManyCards(usize),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("max cards must be between 5 and 52, got {0}")]
    MaxCardsOutOfRange(usize),
}

/// Size bounds applied when validating a pool.
///
/// ```
/// use poker_hand_eval::pool::PoolConfig;
///
/// let config = PoolConfig::default();
/// assert_eq!(config.max_cards(), 7);
/// assert!(PoolConfig::with_max_cards(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    max_cards: usize,
}

impl PoolConfig {
    pub fn with_max_cards(max_cards: usize) -> Result<Self, ConfigError> {
        if !(MIN_CARDS..=DECK_SIZE).contains(&max_cards) {
            return Err(ConfigError::MaxCardsOutOfRange(max_cards));
        }
        Ok(Self { max_cards })
    }

    pub const fn min_cards(&self) -> usize {
        MIN_CARDS
    }

    pub const fn max_cards(&self) -> usize {
        self.max_cards
    }

    fn check_count(&self, count: usize) -> Result<(), EvalError> {
        if count < self.min_cards() {
            return Err(EvalError::InsufficientCards(count));
        }
        if count > self.max_cards {
            return Err(EvalError::TooManyCards(count));
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self { max_cards: DEFAULT_MAX_CARDS }
    }
}

/// An ordered pool of unique cards whose size fits a [`PoolConfig`].
///
/// ```
/// use poker_hand_eval::pool::{CardPool, PoolConfig};
///
/// let pool = CardPool::parse(&["10H", "JH", "QH", "KH", "AH"], &PoolConfig::default()).unwrap();
/// assert_eq!(pool.len(), 5);
/// assert_eq!(pool.subsets().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPool {
    cards: Vec<Card>,
}

impl CardPool {
    /// Validate already-typed cards: size bounds first, then uniqueness.
    pub fn try_new(cards: Vec<Card>, config: &PoolConfig) -> Result<Self, EvalError> {
        config.check_count(cards.len())?;
        let mut seen = HashSet::with_capacity(cards.len());
        if let Some(dup) = cards.iter().copied().find(|c| !seen.insert(*c)) {
            return Err(EvalError::DuplicateCard(dup));
        }
        Ok(Self { cards })
    }

    /// Parse raw tokens into a pool. See [`parse`].
    pub fn parse<S: AsRef<str>>(tokens: &[S], config: &PoolConfig) -> Result<Self, EvalError> {
        parse(tokens, config)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Every 5-card subset, lexicographic by position in the pool.
    /// Each call starts over from the first subset.
    pub fn subsets(&self) -> impl ExactSizeIterator<Item = [Card; 5]> + '_ {
        Combinations::new(self.cards.len()).map(move |idx| idx.map(|i| self.cards[i]))
    }
}

/// Turn raw tokens into a validated [`CardPool`].
///
/// Checks run in order and stop at the first failure: pool size, then each
/// token's format, then duplicates. Invalid tokens are never skipped.
///
/// ```
/// use poker_hand_eval::pool::{parse, EvalError, PoolConfig};
///
/// let err = parse(&["2H", "2D", "2S", "2C"], &PoolConfig::default()).unwrap_err();
/// assert_eq!(err, EvalError::InsufficientCards(4));
/// ```
pub fn parse<S: AsRef<str>>(tokens: &[S], config: &PoolConfig) -> Result<CardPool, EvalError> {
    config.check_count(tokens.len())?;
    let cards = tokens
        .iter()
        .map(|t| {
            let token = t.as_ref();
            token.parse::<Card>().map_err(|e| {
                debug!("rejecting token '{token}': {e}");
                EvalError::InvalidCardFormat(token.to_string())
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    CardPool::try_new(cards, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn config() -> PoolConfig {
        PoolConfig::default()
    }

    #[test]
    fn parses_five_tokens_in_order() {
        let pool = parse(&["10H", "jh", "QH", "kH", "AH"], &config()).unwrap();
        assert_eq!(pool.len(), 5);
        assert_eq!(pool.as_slice()[0], Card::new(Rank::Ten, Suit::Hearts));
        assert_eq!(pool.as_slice()[4], Card::new(Rank::Ace, Suit::Hearts));
    }

    #[test]
    fn size_bounds_are_enforced() {
        let four = ["2H", "3H", "4H", "5H"];
        assert_eq!(parse(&four, &config()), Err(EvalError::InsufficientCards(4)));

        let empty: [&str; 0] = [];
        assert_eq!(parse(&empty, &config()), Err(EvalError::InsufficientCards(0)));

        let eight = ["2H", "3H", "4H", "5H", "6H", "7H", "8H", "9H"];
        assert_eq!(parse(&eight, &config()), Err(EvalError::TooManyCards(8)));

        let seven = ["2H", "3H", "4H", "5H", "6H", "7H", "8H"];
        assert_eq!(parse(&seven, &config()).unwrap().len(), 7);
    }

    #[test]
    fn invalid_token_is_named() {
        let err = parse(&["2H", "3H", "1H", "5H", "6H"], &config()).unwrap_err();
        assert_eq!(err, EvalError::InvalidCardFormat("1H".to_string()));

        let err = parse(&["2H", "", "4H", "5H", "6H"], &config()).unwrap_err();
        assert_eq!(err, EvalError::InvalidCardFormat(String::new()));
    }

    #[test]
    fn whitespace_inside_token_is_invalid() {
        let err = parse(&["A H", "10 D", "Q\tS", "KC", "2H"], &config()).unwrap_err();
        assert_eq!(err, EvalError::InvalidCardFormat("A H".to_string()));

        let err = parse(&["AH", "10 D", "QS", "KC", "2H"], &config()).unwrap_err();
        assert_eq!(err, EvalError::InvalidCardFormat("10 D".to_string()));
    }

    #[test]
    fn duplicate_is_reported_case_insensitively() {
        let err = parse(&["AH", "ah", "2C", "3C", "4C"], &config()).unwrap_err();
        assert_eq!(err, EvalError::DuplicateCard(Card::new(Rank::Ace, Suit::Hearts)));
    }

    #[test]
    fn format_errors_win_over_duplicates() {
        let err = parse(&["AH", "AH", "ZZ", "3C", "4C"], &config()).unwrap_err();
        assert_eq!(err, EvalError::InvalidCardFormat("ZZ".to_string()));
    }

    #[test]
    fn custom_max_cards() {
        let cfg = PoolConfig::with_max_cards(5).unwrap();
        let six = ["2H", "3H", "4H", "5H", "6H", "7H"];
        assert_eq!(parse(&six, &cfg), Err(EvalError::TooManyCards(6)));

        assert_eq!(PoolConfig::with_max_cards(53), Err(ConfigError::MaxCardsOutOfRange(53)));
        assert_eq!(PoolConfig::with_max_cards(52).unwrap().max_cards(), 52);
        assert_eq!(cfg.min_cards(), 5);
    }

    #[test]
    fn subsets_restart_and_cover_pool() {
        let pool = parse(&["2H", "3H", "4H", "5H", "6H", "7H", "8H"], &config()).unwrap();
        let first: Vec<[Card; 5]> = pool.subsets().collect();
        let second: Vec<[Card; 5]> = pool.subsets().collect();
        assert_eq!(first.len(), 21);
        assert_eq!(first, second);
        let cards = pool.as_slice();
        assert_eq!(first[0], [cards[0], cards[1], cards[2], cards[3], cards[4]]);
        assert_eq!(first[20], [cards[2], cards[3], cards[4], cards[5], cards[6]]);
    }
}
