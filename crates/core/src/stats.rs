use crate::{Board, LineId, PayoutTable, CELL_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Aggregated statistics for one scoring line across every candidate
/// board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineReport {
    pub line: LineId,
    /// Occurrences of each three-cell sum across the candidate set.
    pub sum_counts: BTreeMap<u8, u64>,
    /// Occurrences of each payout across the candidate set.
    pub payout_counts: BTreeMap<i64, u64>,
    pub sum_probabilities: BTreeMap<u8, f64>,
    pub payout_probabilities: BTreeMap<i64, f64>,
    /// For each payout, the distinct sorted value tuples the line's
    /// originally-empty cells must take to realize it. A line with no
    /// empty cells has a single empty tuple.
    pub winning_scenarios: BTreeMap<i64, Vec<Vec<u8>>>,
    pub expected_value: f64,
    pub max_payout: i64,
}

/// Scans the full candidate set for one line. The payout total is
/// accumulated in integers and divided once, so the expected value does
/// not depend on summation order.
pub fn aggregate_line(
    line: LineId,
    board: &Board,
    candidates: &[[u8; CELL_COUNT]],
    payouts: &PayoutTable,
) -> LineReport {
    // A valid board always yields at least one completion, the empty
    // ordering included.
    assert!(!candidates.is_empty(), "empty candidate set");

    let cells = line.cells();
    let open: Vec<usize> = cells
        .iter()
        .copied()
        .filter(|&index| !board.is_revealed(index))
        .collect();

    let mut sum_counts: BTreeMap<u8, u64> = BTreeMap::new();
    let mut payout_counts: BTreeMap<i64, u64> = BTreeMap::new();
    let mut scenarios: BTreeMap<i64, BTreeSet<Vec<u8>>> = BTreeMap::new();
    let mut payout_total: i64 = 0;
    let mut max_payout: i64 = 0;

    for filled in candidates {
        let sum: u8 = cells.iter().map(|&index| filled[index]).sum();
        let payout = payouts.payout(sum);
        payout_total += payout;
        max_payout = max_payout.max(payout);
        *sum_counts.entry(sum).or_insert(0) += 1;
        *payout_counts.entry(payout).or_insert(0) += 1;

        // Candidates that only differ outside this line collapse to the
        // same sorted tuple.
        let mut missing: Vec<u8> = open.iter().map(|&index| filled[index]).collect();
        missing.sort_unstable();
        scenarios.entry(payout).or_default().insert(missing);
    }

    let total = candidates.len() as u64;
    LineReport {
        line,
        sum_probabilities: probabilities(&sum_counts, total),
        payout_probabilities: probabilities(&payout_counts, total),
        sum_counts,
        payout_counts,
        winning_scenarios: scenarios
            .into_iter()
            .map(|(payout, tuples)| (payout, tuples.into_iter().collect()))
            .collect(),
        expected_value: payout_total as f64 / total as f64,
        max_payout,
    }
}

fn probabilities<K: Ord + Copy>(counts: &BTreeMap<K, u64>, total: u64) -> BTreeMap<K, f64> {
    counts
        .iter()
        .map(|(&key, &count)| (key, count as f64 / total as f64))
        .collect()
}
