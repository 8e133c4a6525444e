use serde::{Deserialize, Serialize};

/// The 8 scoring lines of the board, in canonical scan order. Cell
/// indices run row-major:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineId {
    Row0,
    Row1,
    Row2,
    Col0,
    Col1,
    Col2,
    DiagMain,
    DiagAnti,
}

impl LineId {
    pub const ALL: [LineId; 8] = [
        LineId::Row0,
        LineId::Row1,
        LineId::Row2,
        LineId::Col0,
        LineId::Col1,
        LineId::Col2,
        LineId::DiagMain,
        LineId::DiagAnti,
    ];

    /// The three cell indices this line scores.
    pub fn cells(self) -> [usize; 3] {
        match self {
            LineId::Row0 => [0, 1, 2],
            LineId::Row1 => [3, 4, 5],
            LineId::Row2 => [6, 7, 8],
            LineId::Col0 => [0, 3, 6],
            LineId::Col1 => [1, 4, 7],
            LineId::Col2 => [2, 5, 8],
            LineId::DiagMain => [0, 4, 8],
            LineId::DiagAnti => [2, 4, 6],
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            LineId::Row0 => "row0",
            LineId::Row1 => "row1",
            LineId::Row2 => "row2",
            LineId::Col0 => "col0",
            LineId::Col1 => "col1",
            LineId::Col2 => "col2",
            LineId::DiagMain => "diag_main",
            LineId::DiagAnti => "diag_anti",
        }
    }

    pub fn from_id(id: &str) -> Option<LineId> {
        LineId::ALL.iter().copied().find(|line| line.id() == id)
    }

    pub fn contains(self, cell: usize) -> bool {
        self.cells().contains(&cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_matches_discriminants() {
        for (index, line) in LineId::ALL.iter().enumerate() {
            assert_eq!(*line as usize, index);
        }
    }

    #[test]
    fn cell_membership_counts() {
        // Center sits on 4 lines, corners on 3, edge midpoints on 2.
        let expected = [3, 2, 3, 2, 4, 2, 3, 2, 3];
        for cell in 0..9 {
            let incident = LineId::ALL
                .iter()
                .filter(|line| line.contains(cell))
                .count();
            assert_eq!(incident, expected[cell], "cell {cell}");
        }
    }

    #[test]
    fn ids_round_trip() {
        for line in LineId::ALL {
            assert_eq!(LineId::from_id(line.id()), Some(line));
        }
        assert_eq!(LineId::from_id("row9"), None);
    }
}
