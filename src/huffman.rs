pub mod heap;
mod tree;

pub use tree::{DecodeError, HuffmanTree};

/// One symbol's codeword: the root-to-leaf path through the tree,
/// `false` for a left turn and `true` for a right turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCode {
    pub symbol: char,
    pub bits: Vec<bool>,
}

impl From<(char, Vec<bool>)> for SymbolCode {
    fn from(value: (char, Vec<bool>)) -> Self {
        SymbolCode {
            symbol: value.0,
            bits: value.1,
        }
    }
}
