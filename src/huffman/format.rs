//! Textual renderings of a tree. The single-line form is used to compare tree shapes.
//!
//! An internal node renders as `(<left> <right>)`, a leaf as its quoted symbol and an
//! absent child as `#`.

use clap::{builder::PossibleValue, ValueEnum};

use super::node::HuffmanNode;
use super::tree::HuffmanTree;

const ABSENT_CHILD: char = '#';

/// How a tree is rendered in a report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TreeFormat {
    Canonical,
    Diagram,
}

impl ValueEnum for TreeFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Canonical, Self::Diagram]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Canonical => Some(PossibleValue::new("canonical")),
            Self::Diagram => Some(PossibleValue::new("diagram")),
        }
    }
}

impl TreeFormat {
    pub fn render(&self, tree: &HuffmanTree) -> String {
        match self {
            Self::Canonical => format!("{}\n", tree.to_canonical_string()),
            Self::Diagram => tree.to_string(),
        }
    }
}

pub fn format_tree(node: &HuffmanNode) -> String {
    let mut output = String::new();
    write_node(&mut output, Some(node));
    output
}

fn write_node(output: &mut String, node: Option<&HuffmanNode>) {
    match node {
        None => output.push(ABSENT_CHILD),
        Some(HuffmanNode::Leaf { symbol, .. }) => {
            output.push('\'');
            output.push(*symbol);
            output.push('\'');
        }
        Some(HuffmanNode::Internal { left, right, .. }) => {
            output.push('(');
            write_node(output, Some(&**left));
            output.push(' ');
            write_node(output, right.as_deref());
            output.push(')');
        }
    }
}

#[cfg(test)]
mod test {
    use super::{format_tree, TreeFormat};
    use crate::huffman::{frequency::FrequencyTable, node::HuffmanNode, tree::HuffmanTree};

    #[test]
    fn test_format_leaf() {
        let leaf = HuffmanNode::leaf('n', 2).unwrap();
        assert_eq!(format_tree(&leaf), "'n'");
    }

    #[test]
    fn test_format_nested_nodes() {
        let node = HuffmanNode::internal(
            HuffmanNode::leaf('a', 1).unwrap(),
            HuffmanNode::internal(
                HuffmanNode::leaf(' ', 2).unwrap(),
                HuffmanNode::leaf('c', 2).unwrap(),
            )
            .unwrap(),
        )
        .unwrap();
        assert_eq!(format_tree(&node), "('a' (' ' 'c'))");
    }

    #[test]
    fn test_format_absent_child() {
        let node = HuffmanNode::wrap(HuffmanNode::leaf('#', 4).unwrap());
        assert_eq!(format_tree(&node), "('#' #)");
    }

    #[test]
    fn test_render_canonical_format() {
        let tree = HuffmanTree::new(&FrequencyTable::count("abb".chars())).unwrap();
        assert_eq!(TreeFormat::Canonical.render(&tree), "('a' 'b')\n");
    }

    #[test]
    fn test_render_diagram_format() {
        let tree = HuffmanTree::new(&FrequencyTable::count("abb".chars())).unwrap();
        let rendered = TreeFormat::Diagram.render(&tree);
        assert_eq!(rendered.lines().count(), 4);
        assert!(rendered.ends_with("('a':1) ('b':2)\n"));
    }
}
