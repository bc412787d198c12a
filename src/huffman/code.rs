use std::collections::BTreeMap;
use std::fmt;

use super::frequency::FrequencyTable;
use super::node::HuffmanNode;
use super::tree::HuffmanTree;
use super::Symbol;

/// Bit pattern assigned to a symbol; `false` is a left edge, `true` a right edge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn pop(&mut self) -> Option<bool> {
        self.bits.pop()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Mapping from every symbol of a tree to the path leading to its leaf.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, Code>,
}

impl CodeTable {
    pub fn new(tree: &HuffmanTree) -> CodeTable {
        let mut codes = BTreeMap::new();
        // The lone leaf of a single-symbol tree sits in the left slot of the root and
        // therefore receives the conventional code "0".
        fill_table(&mut codes, tree.root(), &mut Code::new());
        CodeTable { codes }
    }

    pub fn get(&self, symbol: Symbol) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Code)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Number of bits needed to encode the text the frequencies were counted from.
    pub fn weighted_length(&self, frequencies: &FrequencyTable) -> usize {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| code.len() * count))
            .sum()
    }
}

fn fill_table(table: &mut BTreeMap<Symbol, Code>, node: &HuffmanNode, current_code: &mut Code) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            table.insert(*symbol, current_code.clone());
        }
        HuffmanNode::Internal { left, right, .. } => {
            current_code.push(false);
            fill_table(table, left, current_code);
            current_code.pop();
            if let Some(right) = right {
                current_code.push(true);
                fill_table(table, right, current_code);
                current_code.pop();
            }
        }
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.iter() {
            writeln!(f, "'{}': {}", symbol.escape_debug(), code)?;
        }
        Ok(())
    }
}
