//! Dynamic-insertion trie builder used only while constructing a
//! [`Lexicon`](super::Lexicon). Not part of the public API: lookups against
//! a built lexicon go through the flattened node arrays in `lexicon.rs`
//! instead.
use crate::labelset::Label;

#[derive(Debug, Default)]
pub(super) struct TrieNode {
    children: Vec<(Label, Box<TrieNode>)>,
    terminal: bool,
}

impl TrieNode {
    pub(super) fn new() -> TrieNode {
        TrieNode {
            children: Vec::new(),
            terminal: false,
        }
    }

    pub(super) fn insert(&mut self, word: &[Label]) {
        let mut node = self;
        for &label in word {
            let pos = node.children.iter().position(|(l, _)| *l == label);
            let idx = match pos {
                Some(i) => i,
                None => {
                    node.children.push((label, Box::new(TrieNode::new())));
                    node.children.len() - 1
                }
            };
            node = &mut { node }.children[idx].1;
        }
        node.terminal = true;
    }

    pub(super) fn children(&self) -> &[(Label, Box<TrieNode>)] {
        &self.children
    }

    pub(super) fn terminal(&self) -> bool {
        self.terminal
    }
}
