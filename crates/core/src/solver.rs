use crate::{
    aggregate_line, Board, Completions, LineId, LineReport, PayoutTable, SolverError, CELL_COUNT,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Full solver output for one board state. `lines` follows the canonical
/// order of [`LineId::ALL`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub lines: Vec<LineReport>,
    /// How many equally likely completions the board has (k! for k empty
    /// cells).
    pub candidates: u64,
    pub best_line: LineId,
    /// Recommended next cell to scratch; None once everything is
    /// revealed.
    pub best_scratch: Option<usize>,
    /// Every sum some line can still reach. Lets a caller grey out
    /// payout rows that are provably unreachable.
    pub possible_sums: BTreeSet<u8>,
}

impl Analysis {
    pub fn line(&self, line: LineId) -> &LineReport {
        &self.lines[line as usize]
    }
}

/// Validates raw cells and analyzes the resulting board.
pub fn solve(cells: &[u8], payouts: &PayoutTable) -> Result<Analysis, SolverError> {
    let board = Board::from_cells(cells)?;
    Ok(analyze(&board, payouts))
}

/// Analyzes an already validated board: enumerate every completion once,
/// aggregate the 8 lines over that set, then derive the two
/// recommendations.
pub fn analyze(board: &Board, payouts: &PayoutTable) -> Analysis {
    let candidates: Vec<[u8; CELL_COUNT]> = Completions::of(board).collect();

    let lines: Vec<LineReport> = LineId::ALL
        .iter()
        .map(|&line| aggregate_line(line, board, &candidates, payouts))
        .collect();

    let possible_sums: BTreeSet<u8> = lines
        .iter()
        .flat_map(|report| report.sum_counts.keys().copied())
        .collect();

    Analysis {
        candidates: candidates.len() as u64,
        best_line: best_line(&lines),
        best_scratch: best_scratch(board, &lines),
        possible_sums,
        lines,
    }
}

/// Ties go to the earliest line in canonical order: the running best is
/// only replaced on a strictly greater expected value.
fn best_line(lines: &[LineReport]) -> LineId {
    let mut best = 0;
    for (index, report) in lines.iter().enumerate() {
        if report.expected_value > lines[best].expected_value {
            best = index;
        }
    }
    LineId::ALL[best]
}

/// Scores each empty cell by the summed expected value of its incident
/// lines, scanning in ascending index order so ties resolve to the
/// lowest cell. A heuristic, not a full lookahead.
fn best_scratch(board: &Board, lines: &[LineReport]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for cell in board.empty_cells() {
        let score: f64 = lines
            .iter()
            .filter(|report| report.line.contains(cell))
            .map(|report| report.expected_value)
            .sum();
        if best.map(|(_, top)| score > top).unwrap_or(true) {
            best = Some((cell, score));
        }
    }
    best.map(|(cell, _)| cell)
}
