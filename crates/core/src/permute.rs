/// Lazy enumeration of every ordering of a set of distinct values.
///
/// Iterative Heap's algorithm: the counter array stands in for the usual
/// recursion, so walking all 9! orderings never grows the call stack and
/// callers are free to stop early. An empty input yields exactly one
/// ordering, the empty one.
#[derive(Debug, Clone)]
pub struct Permutations {
    items: Vec<u8>,
    counters: Vec<usize>,
    cursor: usize,
    started: bool,
}

impl Permutations {
    pub fn new(items: Vec<u8>) -> Self {
        let len = items.len();
        Self {
            items,
            counters: vec![0; len],
            cursor: 1,
            started: false,
        }
    }

    /// Number of orderings a set of `len` values produces.
    pub fn total(len: usize) -> u64 {
        (1..=len as u64).product()
    }
}

impl Iterator for Permutations {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        if !self.started {
            self.started = true;
            return Some(self.items.clone());
        }
        while self.cursor < self.items.len() {
            if self.counters[self.cursor] < self.cursor {
                if self.cursor % 2 == 0 {
                    self.items.swap(0, self.cursor);
                } else {
                    self.items.swap(self.counters[self.cursor], self.cursor);
                }
                self.counters[self.cursor] += 1;
                self.cursor = 1;
                return Some(self.items.clone());
            }
            self.counters[self.cursor] = 0;
            self.cursor += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn empty_input_yields_one_empty_ordering() {
        let orderings: Vec<Vec<u8>> = Permutations::new(Vec::new()).collect();
        assert_eq!(orderings, vec![Vec::<u8>::new()]);
    }

    #[test]
    fn single_value_yields_itself() {
        let orderings: Vec<Vec<u8>> = Permutations::new(vec![7]).collect();
        assert_eq!(orderings, vec![vec![7]]);
    }

    #[test]
    fn three_values_yield_six_distinct_orderings() {
        let orderings: BTreeSet<Vec<u8>> = Permutations::new(vec![1, 2, 3]).collect();
        assert_eq!(orderings.len(), 6);
        for ordering in &orderings {
            let mut sorted = ordering.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![1, 2, 3]);
        }
    }

    #[test]
    fn counts_match_factorials() {
        for len in 0..=6usize {
            let items: Vec<u8> = (1..=len as u8).collect();
            let seen: BTreeSet<Vec<u8>> = Permutations::new(items).collect();
            assert_eq!(seen.len() as u64, Permutations::total(len), "len {len}");
        }
    }
}
