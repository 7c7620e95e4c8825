use crate::cards::{Card, Suit};

/// The set of distinct suits in a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    mask: u8,
}

impl SuitInfo {
    pub fn detect(cards: &[Card]) -> Self {
        let mask = cards.iter().fold(0u8, |m, c| m | (1u8 << c.suit() as u8));
        Self { mask }
    }

    pub fn distinct(&self) -> u32 {
        self.mask.count_ones()
    }

    pub fn contains(&self, suit: Suit) -> bool {
        self.mask & (1u8 << suit as u8) != 0
    }

    /// All cards share one suit.
    pub fn is_flush(&self) -> bool {
        self.distinct() == 1
    }

    pub fn flush_suit(&self) -> Option<Suit> {
        if !self.is_flush() {
            return None;
        }
        Suit::ALL.into_iter().find(|&s| self.contains(s))
    }
}
