use crate::cards::Rank;

/// Whether five ranks form a straight, and its top card.
///
/// Ace plays high (T-J-Q-K-A) or low (A-2-3-4-5, the wheel). The wheel's top
/// card is Five so it ranks below a six-high straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut values = ranks.map(Rank::value);
        values.sort_unstable();

        let distinct = values.windows(2).all(|w| w[0] != w[1]);
        if !distinct {
            return Self { top_rank: None };
        }

        if values[4] - values[0] == 4 {
            return Self { top_rank: Some(ranks_max(ranks)) };
        }

        if values == [2, 3, 4, 5, 14] {
            return Self { top_rank: Some(Rank::Five) };
        }

        Self { top_rank: None }
    }

    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }

    pub fn is_wheel(&self) -> bool {
        self.top_rank == Some(Rank::Five)
    }
}

fn ranks_max(ranks: &[Rank; 5]) -> Rank {
    ranks.iter().copied().fold(Rank::Two, Rank::max)
}
