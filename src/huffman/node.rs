use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};

use super::Symbol;
use crate::{error::Error, Result};

/// A node of a Huffman tree.
///
/// Nodes compare by frequency only; two nodes of different shape but equal frequency
/// are equal as far as `Ord` and `PartialEq` are concerned.
#[derive(Clone, Debug)]
pub enum HuffmanNode {
    Leaf {
        symbol: Symbol,
        frequency: usize,
    },
    /// `right` is absent only at the root of a tree over a single symbol.
    Internal {
        frequency: usize,
        left: Box<HuffmanNode>,
        right: Option<Box<HuffmanNode>>,
    },
}

impl HuffmanNode {
    pub fn leaf(symbol: Symbol, frequency: usize) -> Result<Self> {
        if frequency == 0 {
            return Err(Error::InvalidFrequency(frequency));
        }
        Ok(Self::Leaf { symbol, frequency })
    }

    pub fn internal(left: HuffmanNode, right: HuffmanNode) -> Result<Self> {
        let frequency = left
            .frequency()
            .checked_add(right.frequency())
            .ok_or(Error::FrequencyOverflow)?;
        Ok(Self::Internal {
            frequency,
            left: Box::new(left),
            right: Some(Box::new(right)),
        })
    }

    /// Builds the single-child node that roots a one-symbol tree.
    pub fn wrap(node: HuffmanNode) -> Self {
        Self::Internal {
            frequency: node.frequency(),
            left: Box::new(node),
            right: None,
        }
    }

    pub fn frequency(&self) -> usize {
        match self {
            Self::Leaf { frequency, .. } | Self::Internal { frequency, .. } => *frequency,
        }
    }

    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Self::Leaf { symbol, .. } => Some(*symbol),
            Self::Internal { .. } => None,
        }
    }

    pub fn left(&self) -> Option<&HuffmanNode> {
        match self {
            Self::Leaf { .. } => None,
            Self::Internal { left, .. } => Some(&**left),
        }
    }

    pub fn right(&self) -> Option<&HuffmanNode> {
        match self {
            Self::Leaf { .. } => None,
            Self::Internal { right, .. } => right.as_deref(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }
}

impl Ord for HuffmanNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency().cmp(&other.frequency())
    }
}

impl PartialOrd for HuffmanNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HuffmanNode {
    fn eq(&self, other: &Self) -> bool {
        self.frequency() == other.frequency()
    }
}

impl Eq for HuffmanNode {}
