use crate::{Board, LineId, PayoutTable, CELL_COUNT, MAX_CELL_VALUE};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Seeded randomness for dealing tickets. The same seed always deals the
/// same ticket.
#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

/// A fully dealt game ticket: the hidden layout plus which cells the
/// player has scratched so far. The solver only ever sees the masked
/// [`Board`] view.
#[derive(Debug, Clone)]
pub struct Ticket {
    hidden: [u8; CELL_COUNT],
    revealed: [bool; CELL_COUNT],
}

impl Ticket {
    /// Deals a fresh ticket: 1..=9 shuffled into the grid, every cell
    /// face down.
    pub fn deal(rng: &mut RngState) -> Self {
        let mut hidden: [u8; CELL_COUNT] = std::array::from_fn(|index| index as u8 + 1);
        rng.shuffle(&mut hidden);
        Self {
            hidden,
            revealed: [false; CELL_COUNT],
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed[index]
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|&&revealed| revealed).count()
    }

    /// Scratches a cell and returns the value underneath. Scratching a
    /// cell twice just returns it again.
    pub fn scratch(&mut self, index: usize) -> u8 {
        self.revealed[index] = true;
        self.hidden[index]
    }

    /// The solver's view of the ticket: revealed values in place, zeros
    /// everywhere else. Always a valid board since the hidden layout is
    /// a permutation of 1..=9.
    pub fn board(&self) -> Board {
        let mut cells = [0u8; CELL_COUNT];
        for index in 0..CELL_COUNT {
            if self.revealed[index] {
                cells[index] = self.hidden[index];
            }
        }
        Board::from_array(cells)
    }

    /// Sum and payout a line settles for once committed, read from the
    /// hidden layout.
    pub fn settle_line(&self, line: LineId, payouts: &PayoutTable) -> (u8, i64) {
        let sum: u8 = line.cells().iter().map(|&index| self.hidden[index]).sum();
        (sum, payouts.payout(sum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dealt_ticket_is_a_permutation() {
        let mut rng = RngState::from_seed(7);
        let ticket = Ticket::deal(&mut rng);
        let mut values: Vec<u8> = (0..CELL_COUNT).map(|index| ticket.hidden[index]).collect();
        values.sort_unstable();
        let expected: Vec<u8> = (1..=MAX_CELL_VALUE).collect();
        assert_eq!(values, expected);
        assert_eq!(ticket.revealed_count(), 0);
    }

    #[test]
    fn same_seed_deals_the_same_ticket() {
        let first = Ticket::deal(&mut RngState::from_seed(42));
        let second = Ticket::deal(&mut RngState::from_seed(42));
        assert_eq!(first.hidden, second.hidden);
    }

    #[test]
    fn scratch_reveals_the_hidden_value() {
        let mut ticket = Ticket::deal(&mut RngState::from_seed(3));
        let value = ticket.scratch(4);
        assert_eq!(value, ticket.hidden[4]);
        assert!(ticket.is_revealed(4));
        let board = ticket.board();
        assert_eq!(board.cell(4), value);
        assert_eq!(board.revealed_count(), 1);
    }

    #[test]
    fn settle_line_reads_the_hidden_layout() {
        use crate::{MAX_LINE_SUM, MIN_LINE_SUM};

        let mut rng = RngState::from_seed(11);
        let ticket = Ticket::deal(&mut rng);
        let mut payouts = PayoutTable::new();
        for sum in MIN_LINE_SUM..=MAX_LINE_SUM {
            payouts.set(sum, i64::from(sum) * 10);
        }
        for line in LineId::ALL {
            let expected_sum: u8 = line.cells().iter().map(|&index| ticket.hidden[index]).sum();
            assert_eq!(
                ticket.settle_line(line, &payouts),
                (expected_sum, i64::from(expected_sum) * 10)
            );
        }
    }
}
