use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::fmt;

use super::heap::MinHeap;
use super::SymbolCode;

/// Errors raised by the decode traversal.
#[derive(Debug)]
pub enum DecodeError {
    EmptyTree,
    DegenerateTree,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::EmptyTree => {
                write!(f, "Cannot decode against an empty tree")
            }
            DecodeError::DegenerateTree => {
                write!(
                    f,
                    "Cannot decode bits against a single-symbol tree with no internal structure"
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}

enum Node {
    Leaf {
        symbol: char,
        frequency: u64,
    },
    Internal {
        frequency: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    fn leaf(symbol: char, frequency: u64) -> Node {
        Node::Leaf { symbol, frequency }
    }

    /// Merges two nodes into an internal node owning both. The first
    /// argument becomes the left child.
    fn merge(left: Node, right: Node) -> Node {
        Node::Internal {
            frequency: left.frequency() + right.frequency(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn frequency(&self) -> u64 {
        match self {
            Node::Leaf { frequency, .. } => *frequency,
            Node::Internal { frequency, .. } => *frequency,
        }
    }

    fn describe(&self) -> String {
        match self {
            Node::Leaf { symbol, frequency } => format!("({}:{})", symbol, frequency),
            Node::Internal { frequency, .. } => format!("(internal:{})", frequency),
        }
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency().cmp(&other.frequency())
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.frequency() == other.frequency()
    }
}

impl Eq for Node {}

/// One Huffman coding session: a queue of pending nodes and, once
/// [`build`](HuffmanTree::build) has run, the root of the finished tree.
///
/// The expected call order is any number of `insert_frequency` calls,
/// one `build`, then any number of `decode` calls. Sequencing is the
/// caller's responsibility; symbols inserted after `build` sit in the
/// queue without affecting the existing tree until a further `build`.
pub struct HuffmanTree {
    queue: MinHeap<Node>,
    root: Option<Node>,
}

impl HuffmanTree {
    pub fn new() -> HuffmanTree {
        HuffmanTree {
            queue: MinHeap::new(),
            root: None,
        }
    }

    /// Queues one symbol with its frequency as a leaf node.
    pub fn insert_frequency(&mut self, symbol: char, frequency: u64) {
        self.queue.insert(Node::leaf(symbol, frequency));
    }

    /// Drains the queue into a single tree: the two lowest-frequency
    /// nodes are merged (first extracted on the left) and the merge
    /// result is reinserted, until one node remains and becomes the
    /// root. Building from an empty queue leaves the existing root
    /// untouched, so a repeated call after a completed build is a
    /// no-op.
    ///
    /// Which of several equal-frequency nodes is extracted first is up
    /// to the heap, so the exact shape of the tree may vary with
    /// insertion history. Code lengths stay optimal in aggregate and
    /// the code stays prefix-free under every such tie-break.
    pub fn build(&mut self) {
        while let Some(first) = self.queue.extract_min() {
            match self.queue.extract_min() {
                Some(second) => {
                    let merged = Node::merge(first, second);
                    self.queue.insert(merged);
                }
                None => {
                    self.root = Some(first);
                    return;
                }
            }
        }
    }

    /// Walks the tree once per bit: right on `true`, left on `false`.
    /// Whenever a leaf is reached its symbol is appended to the result
    /// and the walk restarts at the root. Trailing bits that end on an
    /// internal node are discarded without error.
    ///
    /// Decoding fails with [`DecodeError::EmptyTree`] before a root
    /// exists, and with [`DecodeError::DegenerateTree`] on every call
    /// against a single-leaf tree (such a tree assigns the empty
    /// codeword, so no bit-driven traversal is meaningful).
    pub fn decode(&self, bits: &[bool]) -> Result<String, DecodeError> {
        let root = match &self.root {
            Some(root) => root,
            None => return Err(DecodeError::EmptyTree),
        };
        if let Node::Leaf { .. } = root {
            return Err(DecodeError::DegenerateTree);
        }
        let mut decoded = String::new();
        let mut current = root;
        for &bit in bits {
            current = match current {
                Node::Internal { left, right, .. } => {
                    if bit {
                        right
                    } else {
                        left
                    }
                }
                Node::Leaf { .. } => {
                    unreachable!("the walk resets to the root after every emitted symbol")
                }
            };
            if let Node::Leaf { symbol, .. } = current {
                decoded.push(*symbol);
                current = root;
            }
        }
        Ok(decoded)
    }

    /// Renders the queue contents in raw heap-array order, one entry
    /// per pending node. The order is the backing array's layout, not
    /// sorted order. After a completed build the final node has moved
    /// out of the queue into the tree, so the listing reports an empty
    /// heap.
    pub fn heap_listing(&self) -> String {
        if self.queue.is_empty() {
            return String::from("Heap is empty.");
        }
        let entries: Vec<String> = self.queue.iter().map(Node::describe).collect();
        entries.join(" ")
    }

    /// Collects the root-to-leaf path of every symbol, left before
    /// right. Empty before a root exists; a single-leaf root yields one
    /// entry with an empty bit path.
    pub fn code_table(&self) -> Vec<SymbolCode> {
        let mut table = Vec::new();
        if let Some(root) = &self.root {
            collect_codes(root, Vec::new(), &mut table);
        }
        table
    }
}

impl Default for HuffmanTree {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_codes(node: &Node, path: Vec<bool>, table: &mut Vec<SymbolCode>) {
    match node {
        Node::Leaf { symbol, .. } => {
            table.push(SymbolCode {
                symbol: *symbol,
                bits: path,
            });
        }
        Node::Internal { left, right, .. } => {
            let mut left_path = path.clone();
            left_path.push(false);
            collect_codes(left, left_path, table);
            let mut right_path = path;
            right_path.push(true);
            collect_codes(right, right_path, table);
        }
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

// Node & Tree visualization
impl Node {
    fn render_lines(&self) -> Vec<String> {
        match self {
            Node::Leaf { symbol, frequency } => vec![format!("({}:{})", symbol, frequency)],
            Node::Internal { left, right, .. } => {
                let left_box = left.render_lines();
                let right_box = right.render_lines();
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

                let left_pos = (left_box[0].chars().position(|c| c != ' ').unwrap_or(0) * 2
                    + left_box[0].trim().chars().count())
                    / 2;
                let right_pos = (right_box[0].chars().position(|c| c != ' ').unwrap_or(0) * 2
                    + right_box[0].trim().chars().count())
                    / 2;
                result.push(format!(
                    "{}╔{}╩{}╗{}",
                    SPACE.repeat(left_pos),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_pos - 1),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(right_pos),
                    SPACE.repeat(right_width - right_pos - 1)
                ));

                for index in 0..std::cmp::max(left_box.len(), right_box.len()) {
                    let left_line = match left_box.get(index) {
                        Some(line) => line.clone(),
                        None => SPACE.repeat(left_width),
                    };
                    let right_line = match right_box.get(index) {
                        Some(line) => line.clone(),
                        None => SPACE.repeat(right_width),
                    };
                    result.push(format!("{} {}", left_line, right_line));
                }
                result
            }
        }
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => {
                for line in root.render_lines() {
                    writeln!(f, "{}", line)?;
                }
                Ok(())
            }
            None => writeln!(f, "(empty)"),
        }
    }
}
