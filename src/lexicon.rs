//! The lexicon index: a trie over `a..z` keyed by word, with a flattened
//! node-array representation for fast, allocation-free traversal once
//! built.
//!
//! Nodes are stored as `(first_child_index, LabelSet)` pairs produced by a
//! breadth-first walk of a dynamic-insertion trie (`lexicon::trie`).
mod trie;

use crate::codec::{encode_char, Label};
use crate::labelset::LabelSet;
use crate::Error;
use std::collections::VecDeque;
use std::fs::read_to_string;
use trie::TrieNode;

/// Index of the root node, always 0.
pub const ROOT: usize = 0;

#[derive(Debug, Clone)]
pub struct Lexicon {
    /// `(index of first child, set of child labels)` per node.
    nodes: Vec<(u32, LabelSet)>,
    /// Label of each node, indexed by node id (root's is unused).
    labels: Vec<Label>,
    /// Whether each node's path spells a complete word.
    terminal: Vec<bool>,
    /// Union of every label that appears anywhere in the lexicon.
    all_labels: LabelSet,
    word_count: usize,
}

impl Lexicon {
    /// Build a lexicon from an in-memory list of words.
    ///
    /// Words are lowercased; an entry containing a non-`a..z` character is
    /// rejected (skipped), not an error for the whole load.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Lexicon {
        let mut root = TrieNode::new();
        for word in words {
            if let Some(labels) = encode_word(word.as_ref()) {
                if !labels.is_empty() {
                    root.insert(&labels);
                }
            }
        }
        Lexicon::flatten(&root)
    }

    /// Build a lexicon from a newline-delimited word list file.
    pub fn from_file(path: &str) -> Result<Lexicon, Error> {
        let text = read_to_string(path).map_err(|source| Error::LexiconLoadError {
            path: path.to_string(),
            source,
        })?;
        Ok(Lexicon::from_words(
            &text.lines().collect::<Vec<&str>>(),
        ))
    }

    /// `node.children()` in ascending label order. `Lexicon::step` locates a
    /// child via `LabelSet::index_of`, which ranks a label by how many
    /// smaller labels are present — so children must be laid out in that
    /// same ascending order, not the trie's insertion order.
    fn sorted_children(node: &TrieNode) -> Vec<(Label, &TrieNode)> {
        let mut children: Vec<(Label, &TrieNode)> =
            node.children().iter().map(|(l, n)| (*l, n.as_ref())).collect();
        children.sort_by_key(|(label, _)| *label);
        children
    }

    fn flatten(root: &TrieNode) -> Lexicon {
        let mut nodes: Vec<(u32, LabelSet)> = Vec::new();
        let mut labels: Vec<Label> = Vec::new();
        let mut terminal: Vec<bool> = Vec::new();
        let mut all_labels = LabelSet::new();
        let mut word_count = 0;

        let mut queue: VecDeque<(&TrieNode, Label)> = VecDeque::new();
        queue.push_back((root, 0));
        while let Some((node, label)) = queue.pop_front() {
            let mut children_set = LabelSet::new();
            for (child_label, child_node) in Lexicon::sorted_children(node) {
                children_set.insert(child_label);
                all_labels.insert(child_label);
                queue.push_back((child_node, child_label));
            }
            if node.terminal() {
                word_count += 1;
            }
            nodes.push((0, children_set));
            terminal.push(node.terminal());
            labels.push(label);
        }
        // Second pass: now that every node has a final position, walk the
        // trie again in the same breadth-first, label-sorted order to fill
        // in each node's first-child index.
        Lexicon::assign_first_children(root, &mut nodes);
        Lexicon {
            nodes,
            labels,
            terminal,
            all_labels,
            word_count,
        }
    }

    fn assign_first_children(root: &TrieNode, nodes: &mut [(u32, LabelSet)]) {
        let mut queue: VecDeque<&TrieNode> = VecDeque::new();
        queue.push_back(root);
        let mut i = 0usize;
        let mut next_free = 1usize;
        while let Some(node) = queue.pop_front() {
            let children = Lexicon::sorted_children(node);
            if !children.is_empty() {
                nodes[i].0 = next_free as u32;
            }
            for (_, child) in children {
                queue.push_back(child);
                next_free += 1;
            }
            i += 1;
        }
    }

    pub fn root(&self) -> usize {
        ROOT
    }

    /// Follow the edge labeled `label` from `node`, if present.
    pub fn step(&self, node: usize, label: Label) -> Option<usize> {
        let (start, children) = &self.nodes[node];
        children.index_of(label).map(|offset| *start as usize + offset)
    }

    pub fn terminal(&self, node: usize) -> bool {
        self.terminal[node]
    }

    /// The set of labels for which `node` has an outgoing edge.
    pub fn children_of(&self, node: usize) -> LabelSet {
        self.nodes[node].1
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn all_labels(&self) -> LabelSet {
        self.all_labels
    }

    /// Convenience: is `word` (a-z, case-insensitive) a legal word?
    pub fn contains(&self, word: &str) -> bool {
        match encode_word(word) {
            Some(labels) if !labels.is_empty() => self.contains_labels(&labels),
            _ => false,
        }
    }

    pub fn contains_labels(&self, labels: &[Label]) -> bool {
        let mut node = self.root();
        for &label in labels {
            match self.step(node, label) {
                Some(next) => node = next,
                None => return false,
            }
        }
        self.terminal(node)
    }

    /// For every letter `c`, is `prefix + c + suffix` a legal word? Returns
    /// the set of such `c`.
    ///
    /// Walks `prefix` once, then for each child label under that node walks
    /// `suffix`.
    pub fn crossword_mask(&self, prefix: &[Label], suffix: &[Label]) -> LabelSet {
        let prefix_node = match self.walk(self.root(), prefix) {
            Some(n) => n,
            None => return LabelSet::new(),
        };
        let mut mask = LabelSet::new();
        for c in self.children_of(prefix_node).iter() {
            if let Some(child) = self.step(prefix_node, c) {
                if let Some(end) = self.walk(child, suffix) {
                    if self.terminal(end) {
                        mask.insert(c);
                    }
                }
            }
        }
        mask
    }

    fn walk(&self, from: usize, labels: &[Label]) -> Option<usize> {
        let mut node = from;
        for &label in labels {
            node = self.step(node, label)?;
        }
        Some(node)
    }
}

fn encode_word(word: &str) -> Option<Vec<Label>> {
    let word = word.trim();
    if word.is_empty() {
        return Some(Vec::new());
    }
    word.chars().map(|c| encode_char(c).ok()).collect()
}
