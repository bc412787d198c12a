pub mod code;
pub mod encoder;
pub mod format;
pub mod frequency;
pub mod node;
pub mod symbols;
pub mod tree;

/// A single character of the encoded text.
pub type Symbol = char;
