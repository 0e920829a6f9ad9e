pub mod error;
pub mod hash;
pub mod prime;
pub mod probing;
pub mod stats;
pub mod words;

use std::{io, iter};

pub use error::TableError;
pub use probing::Probing;
pub use stats::{Snapshot, StatsReport};

/// Fixed-capacity open-addressing table counting how often each word occurs.
///
/// The table never grows and never forgets a key. One slot always stays
/// empty, so at most `capacity - 1` distinct words fit.
pub struct Table {
    slots: Vec<Slot>,
    count: usize,
    probing: Probing,
}

enum Slot {
    Empty,
    Occupied(Entry),
}

struct Entry {
    key: String,
    frequency: u64,
    /// Probe steps taken when the key was placed. Frozen afterwards.
    probes: usize,
}

/// Outcome of walking a key's probe sequence.
enum Probe {
    Match(usize),
    Vacant { index: usize, probes: usize },
    Exhausted,
}

impl Table {
    pub fn new(capacity: usize, probing: Probing) -> Result<Self, TableError> {
        if capacity < 2 {
            return Err(TableError::InvalidCapacity { capacity });
        }
        tracing::debug!(capacity, %probing, "created table");
        Ok(Table {
            slots: iter::repeat_with(|| Slot::Empty).take(capacity).collect(),
            count: 0,
            probing,
        })
    }

    /// Records one occurrence of `word` and returns its frequency so far.
    ///
    /// Fails with [`TableError::Full`] when `word` is new and no slot can take
    /// it; the table is left untouched in that case.
    pub fn insert(&mut self, word: &str) -> Result<u64, TableError> {
        match self.probe(word) {
            Probe::Match(i) => {
                let entry = self.slots[i].as_mut().unwrap();
                entry.frequency = entry.frequency.saturating_add(1);
                Ok(entry.frequency)
            }
            Probe::Vacant { index, probes } if !self.is_full() => {
                if probes > 0 {
                    tracing::trace!(word, index, probes, "placed after collisions");
                }
                self.slots[index] = Slot::Occupied(Entry {
                    key: word.to_owned(),
                    frequency: 1,
                    probes,
                });
                self.count += 1;
                Ok(1)
            }
            Probe::Vacant { .. } | Probe::Exhausted => {
                tracing::warn!(word, capacity = self.capacity(), "table full, word dropped");
                Err(TableError::Full {
                    capacity: self.capacity(),
                    count: self.count,
                })
            }
        }
    }

    /// Frequency of `word`, or 0 when it was never inserted.
    pub fn search(&self, word: &str) -> u64 {
        match self.probe(word) {
            Probe::Match(i) => self.slots[i].as_ref().unwrap().frequency,
            _ => 0,
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        matches!(self.probe(word), Probe::Match(_))
    }

    /// Probe steps it took to place `word`, if it is stored.
    pub fn probe_count(&self, word: &str) -> Option<usize> {
        match self.probe(word) {
            Probe::Match(i) => Some(self.slots[i].as_ref().unwrap().probes),
            _ => None,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// True once no new key can be inserted.
    pub fn is_full(&self) -> bool {
        self.count >= self.capacity() - 1
    }

    pub fn probing(&self) -> Probing {
        self.probing
    }

    /// Probe count of every slot in physical order; empty slots report 0.
    pub fn probe_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .map(|slot| slot.as_ref().map_or(0, |entry| entry.probes))
    }

    /// Occupied slots in physical order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { table: self, i: 0 }
    }

    pub fn stats(&self, snapshots: usize) -> StatsReport {
        StatsReport::new(self, snapshots)
    }

    /// Writes each stored word and its frequency, one pair per two lines.
    pub fn print<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        for (key, frequency) in self.iter() {
            writeln!(out, "{key}\n {frequency}")?;
        }
        Ok(())
    }

    /// Writes every slot, empty or not, with its position and probe count.
    pub fn print_entire_table<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "  Pos  Freq  Stats  Word")?;
        writeln!(out, "----------------------------------------")?;
        for (pos, slot) in self.slots.iter().enumerate() {
            match slot.as_ref() {
                Some(entry) => writeln!(
                    out,
                    "{pos:5} {:5} {:5}   {}",
                    entry.frequency, entry.probes, entry.key
                )?,
                None => writeln!(out, "{pos:5} {:5} {:5}", 0, 0)?,
            }
        }
        Ok(())
    }

    pub fn print_stats<W: io::Write>(&self, mut out: W, snapshots: usize) -> io::Result<()> {
        write!(out, "{}", self.stats(snapshots))
    }

    fn probe(&self, word: &str) -> Probe {
        let capacity = self.capacity();
        let hashed = hash::hash(word);
        let stride = self.probing.stride(hashed, capacity);
        let mut i = hashed as usize % capacity;
        for probes in 0..capacity {
            match &self.slots[i] {
                Slot::Empty => return Probe::Vacant { index: i, probes },
                Slot::Occupied(entry) if entry.key == word => return Probe::Match(i),
                Slot::Occupied(_) => {}
            }
            i = (i + stride) % capacity;
        }
        Probe::Exhausted
    }
}

impl Slot {
    fn as_ref(&self) -> Option<&Entry> {
        match self {
            Self::Empty => None,
            Self::Occupied(entry) => Some(entry),
        }
    }

    fn as_mut(&mut self) -> Option<&mut Entry> {
        match self {
            Self::Empty => None,
            Self::Occupied(entry) => Some(entry),
        }
    }
}

pub struct Iter<'a> {
    table: &'a Table,
    i: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, u64);

    fn next(&mut self) -> Option<Self::Item> {
        while self.i < self.table.slots.len() {
            let slot = &self.table.slots[self.i];
            self.i += 1;
            if let Some(entry) = slot.as_ref() {
                return Some((entry.key.as_str(), entry.frequency));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = (&'a str, u64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
