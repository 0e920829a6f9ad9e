//! Collision statistics for a finished [`Table`].
//!
//! A snapshot at `p` percent looks at the first `capacity * p / 100` physical
//! slots, which approximates how the table looked when it was that full.
//! Snapshots beyond the table's actual fill are skipped.

use std::fmt;

use crate::{Probing, Table};

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub percent_full: usize,
    pub entries: usize,
    pub percent_at_home: f64,
    pub average_collisions: f64,
    pub max_collisions: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    pub probing: Probing,
    pub snapshots: Vec<Snapshot>,
}

const RULE: &str = "-----------------------------------------------------";

impl StatsReport {
    pub fn new(table: &Table, snapshot_count: usize) -> Self {
        let snapshots = (1..=snapshot_count)
            .filter_map(|i| Snapshot::take(table, 100 * i / snapshot_count))
            .collect();
        StatsReport {
            probing: table.probing(),
            snapshots,
        }
    }
}

impl Snapshot {
    fn take(table: &Table, percent_full: usize) -> Option<Self> {
        let entries = table.capacity() * percent_full / 100;
        if entries == 0 || entries > table.len() {
            return None;
        }
        let mut at_home = 0;
        let mut total = 0;
        let mut max_collisions = 0;
        for probes in table.probe_counts().take(entries) {
            if probes == 0 {
                at_home += 1;
            }
            total += probes;
            max_collisions = max_collisions.max(probes);
        }
        Some(Snapshot {
            percent_full,
            entries,
            percent_at_home: at_home as f64 * 100.0 / entries as f64,
            average_collisions: total as f64 / entries as f64,
            max_collisions,
        })
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:4} {:10} {:10.1} {:10.2} {:11}",
            self.percent_full,
            self.entries,
            self.percent_at_home,
            self.average_collisions,
            self.max_collisions
        )
    }
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n{}\n", self.probing)?;
        writeln!(f, "Percent   Current   Percent    Average      Maximum")?;
        writeln!(f, " Full     Entries   At Home   Collisions   Collisions")?;
        writeln!(f, "{RULE}")?;
        for snapshot in &self.snapshots {
            writeln!(f, "{snapshot}")?;
        }
        writeln!(f, "{RULE}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collided_table() -> Table {
        let mut table = Table::new(7, Probing::Linear).unwrap();
        for word in ["bat", "pat", "wat"] {
            table.insert(word).unwrap();
        }
        table
    }

    #[test]
    fn test_snapshots() {
        let report = collided_table().stats(10);
        let summary: Vec<_> = report
            .snapshots
            .iter()
            .map(|s| (s.percent_full, s.entries, s.max_collisions))
            .collect();
        assert_eq!(summary, vec![(20, 1, 0), (30, 2, 0), (40, 2, 0), (50, 3, 1)]);

        let last = &report.snapshots[3];
        assert!((last.percent_at_home - 200.0 / 3.0).abs() < 1e-9);
        assert!((last.average_collisions - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_table_has_no_snapshots() {
        let table = Table::new(113, Probing::Double).unwrap();
        assert!(table.stats(10).snapshots.is_empty());
        assert!(table.stats(0).snapshots.is_empty());
    }

    #[test]
    fn test_entries_non_decreasing() {
        for probing in [Probing::Linear, Probing::Double] {
            let mut table = Table::new(211, probing).unwrap();
            for i in 0..200 {
                table.insert(&format!("key{i}")).unwrap();
            }
            let report = table.stats(20);
            assert!(!report.snapshots.is_empty());
            assert!(
                report
                    .snapshots
                    .windows(2)
                    .all(|w| w[0].entries <= w[1].entries && w[0].percent_full < w[1].percent_full)
            );
            assert!(report.snapshots.iter().all(|s| s.entries <= table.len()));
        }
    }

    #[test]
    fn test_report_does_not_mutate() {
        let table = collided_table();
        let before: Vec<_> = table.probe_counts().collect();
        let _ = table.stats(5);
        let _ = table.stats(100);
        assert_eq!(table.probe_counts().collect::<Vec<_>>(), before);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_display() {
        let mut out = Vec::new();
        collided_table().print_stats(&mut out, 2).unwrap();
        // only the 50% snapshot fits: 7 * 50 / 100 = 3 entries
        let expected = "\nLinear Probing\n\n\
            Percent   Current   Percent    Average      Maximum\n \
            Full     Entries   At Home   Collisions   Collisions\n\
            -----------------------------------------------------\n  \
            50          3       66.7       0.33           1\n\
            -----------------------------------------------------\n\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
