use std::io::{BufReader, Read};

use super::frequency::FrequencyTable;
use super::symbols::SymbolReader;
use super::tree::HuffmanTree;
use super::Symbol;
use crate::{error::Error, Result};

/// Entry point for building Huffman trees from text or from precounted frequencies.
///
/// The encoder keeps no state between calls, so one value can be shared freely across
/// threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct HuffmanEncoder;

impl HuffmanEncoder {
    pub fn new() -> Self {
        HuffmanEncoder
    }

    /// Reads `reader` to its end as UTF-8 text and builds the tree for its characters.
    pub fn encode_reader<R: Read>(&self, reader: R) -> Result<HuffmanTree> {
        let (_, tree) = self.encode_reader_with_frequencies(reader)?;
        Ok(tree)
    }

    /// Like [`encode_reader`](Self::encode_reader), but also hands back the counted table.
    pub fn encode_reader_with_frequencies<R: Read>(
        &self,
        reader: R,
    ) -> Result<(FrequencyTable, HuffmanTree)> {
        let symbols = SymbolReader::new(BufReader::new(reader));
        let frequencies = FrequencyTable::count_stream(symbols)?;
        let tree = self.encode_frequencies(&frequencies)?;
        Ok((frequencies, tree))
    }

    pub fn encode_symbols<I: IntoIterator<Item = Symbol>>(&self, symbols: I) -> Result<HuffmanTree> {
        self.encode_frequencies(&FrequencyTable::count(symbols))
    }

    pub fn encode_frequencies(&self, frequencies: &FrequencyTable) -> Result<HuffmanTree> {
        Self::validate_frequencies(frequencies)?;
        HuffmanTree::new(frequencies)
    }

    fn validate_frequencies(frequencies: &FrequencyTable) -> Result<()> {
        if frequencies.is_empty() {
            log::warn!("Refusing to build a Huffman tree without any symbols");
            return Err(Error::InvalidAlphabet);
        }
        Ok(())
    }
}
