//! Caller-side game data: the standard payout table and payout-table
//! loading from JSON files.

use anyhow::{Context, Result};
use cactpot_core::PayoutTable;
use std::fs;
use std::path::Path;

/// The standard payout schedule of the arcade game, keyed by line sum.
/// The low sums 6 and 24 only have one way to appear (1+2+3 and 7+8+9),
/// hence the jackpot-sized rewards at both ends.
pub const DEFAULT_PAYOUT_ENTRIES: [(u8, i64); 19] = [
    (6, 10_000),
    (7, 36),
    (8, 720),
    (9, 360),
    (10, 80),
    (11, 252),
    (12, 108),
    (13, 72),
    (14, 54),
    (15, 180),
    (16, 72),
    (17, 180),
    (18, 119),
    (19, 36),
    (20, 306),
    (21, 1_080),
    (22, 144),
    (23, 1_800),
    (24, 3_600),
];

pub fn default_payouts() -> PayoutTable {
    PayoutTable::from_entries(&DEFAULT_PAYOUT_ENTRIES)
}

/// Loads a payout table from a JSON object keyed by sum, e.g.
/// `{"6": 10000, "7": 36}`.
pub fn load_payouts(path: &Path) -> Result<PayoutTable> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("read payout table {}", path.display()))?;
    let table: PayoutTable = serde_json::from_str(&body)
        .with_context(|| format!("parse payout table {}", path.display()))?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cactpot_core::{MAX_LINE_SUM, MIN_LINE_SUM};
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn default_table_covers_every_reachable_sum() {
        let table = default_payouts();
        for sum in MIN_LINE_SUM..=MAX_LINE_SUM {
            assert!(table.payout(sum) > 0, "sum {sum}");
        }
        assert_eq!(table.payout(6), 10_000);
        assert_eq!(table.payout(18), 119);
        assert_eq!(table.payout(24), 3_600);
        assert_eq!(table.entries().count(), 19);
    }

    #[test]
    fn payout_file_round_trips() {
        let file = unique_temp_file();
        let body = serde_json::to_string_pretty(&default_payouts()).expect("serialize");
        std::fs::write(&file, body).expect("write");
        let loaded = load_payouts(&file).expect("load");
        assert_eq!(loaded, default_payouts());
        let _ = std::fs::remove_file(file);
    }

    #[test]
    fn partial_table_loads_with_silent_zeros() {
        let file = unique_temp_file();
        std::fs::write(&file, r#"{"6": 500, "24": 900}"#).expect("write");
        let loaded = load_payouts(&file).expect("load");
        assert_eq!(loaded.payout(6), 500);
        assert_eq!(loaded.payout(24), 900);
        assert_eq!(loaded.payout(15), 0);
        let _ = std::fs::remove_file(file);
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let file = unique_temp_file();
        std::fs::write(&file, "not json").expect("write");
        let err = load_payouts(&file).unwrap_err();
        assert!(err.to_string().contains("parse payout table"));
        let _ = std::fs::remove_file(file);
    }

    fn unique_temp_file() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "cactpot_data_test_{}_{}.json",
            std::process::id(),
            nanos
        ))
    }
}
