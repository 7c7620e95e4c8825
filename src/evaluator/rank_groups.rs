use crate::cards::Rank;

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: QQQ72 groups as [(Queen, 3), (Seven, 1), (Two, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 15];
        for rank in ranks {
            counts[rank.value() as usize] += 1;
        }

        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .filter_map(|&rank| match counts[rank.value() as usize] {
                0 => None,
                n => Some((rank, n)),
            })
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    fn with_count(&self, count: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, c)| *c == count).map(|(rank, _)| *rank)
    }

    /// Rank appearing four times, if any.
    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    /// Rank appearing three times, if any.
    pub fn trips(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    /// Ranks appearing exactly twice, highest first.
    pub fn pairs(&self) -> Vec<Rank> {
        self.with_count(2).collect()
    }

    /// Singleton ranks, highest first.
    pub fn kickers(&self) -> Vec<Rank> {
        self.with_count(1).collect()
    }

    /// Number of distinct ranks.
    pub fn distinct(&self) -> usize {
        self.groups.len()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
