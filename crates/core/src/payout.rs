use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Smallest reachable line sum: 1+2+3.
pub const MIN_LINE_SUM: u8 = 6;
/// Largest reachable line sum: 7+8+9.
pub const MAX_LINE_SUM: u8 = 24;

/// Maps a line's three-cell sum to its reward. A sum without an entry
/// pays 0; lookups never fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayoutTable {
    by_sum: BTreeMap<u8, i64>,
}

impl PayoutTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: &[(u8, i64)]) -> Self {
        Self {
            by_sum: entries.iter().copied().collect(),
        }
    }

    pub fn set(&mut self, sum: u8, payout: i64) {
        self.by_sum.insert(sum, payout);
    }

    pub fn payout(&self, sum: u8) -> i64 {
        self.by_sum.get(&sum).copied().unwrap_or(0)
    }

    /// Entries in ascending sum order.
    pub fn entries(&self) -> impl Iterator<Item = (u8, i64)> + '_ {
        self.by_sum.iter().map(|(&sum, &payout)| (sum, payout))
    }

    pub fn is_empty(&self) -> bool {
        self.by_sum.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sum_pays_zero() {
        let table = PayoutTable::from_entries(&[(6, 10_000), (24, 3_600)]);
        assert_eq!(table.payout(6), 10_000);
        assert_eq!(table.payout(24), 3_600);
        assert_eq!(table.payout(15), 0);
    }

    #[test]
    fn entries_are_sum_ordered() {
        let mut table = PayoutTable::new();
        table.set(24, 3_600);
        table.set(6, 10_000);
        table.set(15, 180);
        let sums: Vec<u8> = table.entries().map(|(sum, _)| sum).collect();
        assert_eq!(sums, vec![6, 15, 24]);
    }
}
