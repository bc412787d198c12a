use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

use super::format::format_tree;
use super::frequency::FrequencyTable;
use super::node::HuffmanNode;
use super::Symbol;
use crate::{error::Error, Result};

/// A Huffman tree built once from a frequency table and never modified afterwards.
#[derive(Clone, Debug)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

// Queue entry; among nodes of equal frequency the one queued first is taken first.
struct QueuedNode {
    sequence: usize,
    node: HuffmanNode,
}

impl Ord for QueuedNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .cmp(&other.node)
            .then(self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for QueuedNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueuedNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedNode {}

impl HuffmanTree {
    pub fn new(frequencies: &FrequencyTable) -> Result<HuffmanTree> {
        let mut leaves = frequencies
            .iter()
            .map(|(symbol, frequency)| HuffmanNode::leaf(symbol, frequency))
            .collect::<Result<Vec<_>>>()?;
        let root = match leaves.len() {
            0 => None,
            1 => leaves.pop().map(HuffmanNode::wrap),
            _ => Self::merge_least_frequent(leaves)?,
        }
        .ok_or(Error::InvalidAlphabet)?;
        log::debug!(
            "Built Huffman tree over {} symbols with total frequency {}",
            frequencies.len(),
            root.frequency()
        );
        Ok(HuffmanTree { root })
    }

    fn merge_least_frequent(leaves: Vec<HuffmanNode>) -> Result<Option<HuffmanNode>> {
        let mut heap = BinaryHeap::with_capacity(leaves.len());
        for (sequence, node) in leaves.into_iter().enumerate() {
            heap.push(Reverse(QueuedNode { sequence, node }));
        }
        let mut next_sequence = heap.len();
        while let Some(Reverse(first)) = heap.pop() {
            let Some(Reverse(second)) = heap.pop() else {
                return Ok(Some(first.node));
            };
            heap.push(Reverse(QueuedNode {
                sequence: next_sequence,
                node: HuffmanNode::internal(first.node, second.node)?,
            }));
            next_sequence += 1;
        }
        Ok(None)
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Whether the tree encodes a single symbol, i.e. its root has no right child.
    pub fn is_trivial(&self) -> bool {
        matches!(self.root, HuffmanNode::Internal { right: None, .. })
    }

    pub fn frequency(&self) -> usize {
        self.root.frequency()
    }

    pub fn leaf_count(&self) -> usize {
        count_nodes(&self.root, &HuffmanNode::is_leaf)
    }

    pub fn internal_count(&self) -> usize {
        count_nodes(&self.root, &|node: &HuffmanNode| !node.is_leaf())
    }

    /// Number of edges between the root and the leaf holding `symbol`.
    pub fn depth_of(&self, symbol: Symbol) -> Option<usize> {
        find_depth(&self.root, symbol, 0)
    }

    pub fn to_canonical_string(&self) -> String {
        format_tree(&self.root)
    }
}

fn count_nodes(node: &HuffmanNode, predicate: &dyn Fn(&HuffmanNode) -> bool) -> usize {
    let own = usize::from(predicate(node));
    let children: usize = [node.left(), node.right()]
        .into_iter()
        .flatten()
        .map(|child| count_nodes(child, predicate))
        .sum();
    own + children
}

fn find_depth(node: &HuffmanNode, symbol: Symbol, depth: usize) -> Option<usize> {
    match node {
        HuffmanNode::Leaf { symbol: s, .. } => (*s == symbol).then_some(depth),
        HuffmanNode::Internal { left, right, .. } => find_depth(left, symbol, depth + 1)
            .or_else(|| {
                right
                    .as_deref()
                    .and_then(|right| find_depth(right, symbol, depth + 1))
            }),
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";
const ABSENT_CHILD: &str = "#";

// Tree visualization. Labels escape non-ASCII symbols so every character takes one column.
fn diagram_lines(node: &HuffmanNode) -> Vec<String> {
    match node {
        HuffmanNode::Leaf { symbol, frequency } => {
            vec![format!("('{}':{})", symbol.escape_default(), frequency)]
        }
        HuffmanNode::Internal { left, right, .. } => {
            let left_box = diagram_lines(left);
            let right_box = match right {
                Some(right) => diagram_lines(right),
                None => vec![ABSENT_CHILD.to_string()],
            };
            join_below_parent(left_box, right_box)
        }
    }
}

fn center_of(first_line: &str) -> usize {
    let indent = first_line.chars().position(|c| c != ' ').unwrap_or(0);
    (indent * 2 + first_line.trim().chars().count()) / 2
}

fn join_below_parent(left_box: Vec<String>, right_box: Vec<String>) -> Vec<String> {
    let left_width = left_box[0].chars().count();
    let right_width = right_box[0].chars().count();
    let mut result: Vec<String> = Vec::new();

    result.push(format!(
        "{}•{}",
        SPACE.repeat(left_width),
        SPACE.repeat(right_width)
    ));
    result.push(format!(
        "{}║{}",
        SPACE.repeat(left_width),
        SPACE.repeat(right_width)
    ));

    let left_pos = center_of(&left_box[0]);
    let right_pos = center_of(&right_box[0]);
    result.push(format!(
        "{}╔{}╩{}╗{}",
        SPACE.repeat(left_pos),
        BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_pos - 1),
        BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(right_pos),
        SPACE.repeat(right_width - right_pos - 1)
    ));

    let left_depth = left_box.len();
    let right_depth = right_box.len();
    for i in 0..std::cmp::max(left_depth, right_depth) {
        let left_str = left_box
            .get(i)
            .cloned()
            .unwrap_or_else(|| SPACE.repeat(left_width));
        let right_str = right_box
            .get(i)
            .cloned()
            .unwrap_or_else(|| SPACE.repeat(right_width));
        result.push(format!("{} {}", left_str, right_str));
    }
    result
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in diagram_lines(&self.root) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
