use std::collections::BTreeMap;
use std::io;

use super::Symbol;
use crate::{error::Error, Result};

/// Occurrence count of every symbol seen in an input.
///
/// Symbols that never occurred are not recorded, so every stored count is at least one.
/// Entries are kept in ascending symbol order, which makes tree construction from two
/// tables with equal contents produce identical trees.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<Symbol, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count<I: IntoIterator<Item = Symbol>>(symbols: I) -> Self {
        symbols.into_iter().collect()
    }

    /// Drains `stream` and counts its symbols. The first read error aborts counting.
    pub fn count_stream<I>(stream: I) -> Result<Self>
    where
        I: IntoIterator<Item = io::Result<Symbol>>,
    {
        let mut table = Self::new();
        for symbol in stream {
            table.increment(symbol.map_err(Error::FailedToReadInput)?);
        }
        log::debug!(
            "Counted {} symbols, {} of them distinct",
            table.total(),
            table.len()
        );
        Ok(table)
    }

    /// Adds `count` occurrences of `symbol`, e.g. from statistics gathered elsewhere.
    pub fn insert(&mut self, symbol: Symbol, count: usize) -> Result<()> {
        if count == 0 {
            return Err(Error::InvalidFrequency(count));
        }
        let stored = self.counts.entry(symbol).or_default();
        *stored = stored
            .checked_add(count)
            .ok_or(Error::FrequencyOverflow)?;
        Ok(())
    }

    fn increment(&mut self, symbol: Symbol) {
        *self.counts.entry(symbol).or_default() += 1;
    }

    pub fn get(&self, symbol: Symbol) -> Option<usize> {
        self.counts.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, saturating at `usize::MAX`.
    pub fn total(&self) -> usize {
        self.counts
            .values()
            .fold(0, |total, &count| total.saturating_add(count))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, usize)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}

impl FromIterator<Symbol> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = Symbol>>(symbols: T) -> Self {
        let mut table = Self::new();
        for symbol in symbols {
            table.increment(symbol);
        }
        table
    }
}

impl TryFrom<&[(Symbol, usize)]> for FrequencyTable {
    type Error = Error;

    fn try_from(symbols_and_frequencies: &[(Symbol, usize)]) -> Result<Self> {
        let mut table = Self::new();
        for &(symbol, count) in symbols_and_frequencies {
            table.insert(symbol, count)?;
        }
        Ok(table)
    }
}

#[cfg(test)]
mod test {
    use std::io;

    use super::FrequencyTable;
    use crate::error::Error;

    #[test]
    fn test_count_symbols() {
        let table = FrequencyTable::count("mississippi".chars());
        assert_eq!(table.len(), 4);
        assert_eq!(table.get('i'), Some(4));
        assert_eq!(table.get('s'), Some(4));
        assert_eq!(table.get('p'), Some(2));
        assert_eq!(table.get('m'), Some(1));
        assert_eq!(table.get('x'), None);
        assert_eq!(table.total(), 11);
    }

    #[test]
    fn test_empty_input_yields_empty_table() {
        let table = FrequencyTable::count("".chars());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_iteration_is_ordered_by_symbol() {
        let table = FrequencyTable::count("cabbca".chars());
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![('a', 2), ('b', 2), ('c', 2)]);
    }

    #[test]
    fn test_count_stream_stops_at_first_error() {
        let stream = vec![
            Ok('a'),
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "gone")),
            Ok('b'),
        ];
        match FrequencyTable::count_stream(stream) {
            Err(Error::FailedToReadInput(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("Expected read failure, got {:?}", other),
        }
    }

    #[test]
    fn test_insert_accumulates_counts() {
        let mut table = FrequencyTable::new();
        table.insert('a', 3).unwrap();
        table.insert('a', 2).unwrap();
        assert_eq!(table.get('a'), Some(5));
    }

    #[test]
    fn test_insert_rejects_zero_count() {
        let mut table = FrequencyTable::new();
        assert!(matches!(
            table.insert('a', 0),
            Err(Error::InvalidFrequency(0))
        ));
        assert!(table.is_empty());
    }

    #[test]
    fn test_insert_rejects_overflowing_count() {
        let mut table = FrequencyTable::new();
        table.insert('a', usize::MAX).unwrap();
        assert!(matches!(
            table.insert('a', 1),
            Err(Error::FrequencyOverflow)
        ));
        assert_eq!(table.get('a'), Some(usize::MAX));
    }

    #[test]
    fn test_total_saturates() {
        let mut table = FrequencyTable::new();
        table.insert('a', usize::MAX).unwrap();
        table.insert('b', 1).unwrap();
        assert_eq!(table.total(), usize::MAX);
    }

    #[test]
    fn test_try_from_pairs() {
        let pairs: &[(char, usize)] = &[('a', 24), ('b', 12)];
        let table = FrequencyTable::try_from(pairs).unwrap();
        assert_eq!(table.get('a'), Some(24));
        assert_eq!(table.get('b'), Some(12));

        let invalid: &[(char, usize)] = &[('a', 1), ('b', 0)];
        assert!(FrequencyTable::try_from(invalid).is_err());
    }
}
