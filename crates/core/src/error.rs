use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolverError {
    #[error("board must hold exactly 9 cells, got {found}")]
    CellCount { found: usize },
    #[error("cell {index} holds {value}, outside 0..=9")]
    CellRange { index: usize, value: u8 },
    #[error("value {value} is revealed more than once")]
    DuplicateValue { value: u8 },
}
