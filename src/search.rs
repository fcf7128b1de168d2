//! Component E: the placement search (spec §4.E) — jointly satisfies the
//! main-line lexicon constraint and every open cell's crossword constraint
//! while consuming a finite rack, producing every legal [`Placement`].
//!
//! The recursive walk follows the same shape as the teacher's
//! `Matches` iterator in `wordlist/matches.rs`: advance a lexicon node in
//! lockstep with a cursor over the line, branching over admissible letters
//! at each open square. Unlike the teacher (which walks a fixed-width board
//! row with only one crossword table for the whole row), each open cell
//! here carries its own precomputed oracle entry, and alignment is enumerated
//! explicitly rather than derived from anchor-adjacent empty runs.
use crate::labelset::Label;
use crate::lexicon::Lexicon;
use crate::oracle::CrosswordOracle;
use crate::query::{Cell, Query, WordSpec};
use crate::rack::Rack;

/// One letter newly placed on an Open cell as part of a [`Placement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedLetter {
    /// Index of this cell within the `WordSpec`.
    pub cell: usize,
    /// Index of this cell among the `WordSpec`'s Open cells, matching
    /// `Query::crossword`/`CrosswordOracle`'s indexing.
    pub open_index: usize,
    pub label: Label,
    pub is_blank: bool,
}

/// A realized candidate move (spec §3 "Placement"): an alignment, the word
/// it forms, and which of its cells were newly placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub start: usize,
    /// Exclusive end of the covered range.
    pub end: usize,
    /// The full word formed, including letters already fixed on the board.
    pub word: Vec<Label>,
    /// Newly placed letters, left to right.
    pub placed: Vec<PlacedLetter>,
}

impl Placement {
    pub fn tiles_drawn(&self) -> usize {
        self.placed.len()
    }
}

/// Enumerate every legal placement for `query` against `lexicon`, using
/// `oracle` for O(1) crossword legality tests.
pub fn search(lexicon: &Lexicon, query: &Query, oracle: &CrosswordOracle) -> Vec<Placement> {
    let word_spec = query.word_spec();
    let open_index_of_cell = open_index_map(word_spec);
    let mut out = Vec::new();

    let len = word_spec.len();
    let starts: Vec<usize> = if word_spec.anchor_left() {
        vec![0]
    } else {
        (0..=len).collect()
    };

    for &start in &starts {
        let ends: Vec<usize> = if word_spec.anchor_right() {
            vec![len]
        } else {
            (start..=len).collect()
        };
        for &end in &ends {
            if start > end {
                continue;
            }
            walk(
                lexicon,
                word_spec,
                oracle,
                &open_index_of_cell,
                start,
                end,
                start,
                lexicon.root(),
                query.rack().clone(),
                Vec::new(),
                Vec::new(),
                &mut out,
            );
        }
    }
    out
}

fn open_index_map(word_spec: &WordSpec) -> Vec<Option<usize>> {
    let mut map = Vec::with_capacity(word_spec.len());
    let mut next = 0usize;
    for cell in word_spec.cells() {
        if cell.is_open() {
            map.push(Some(next));
            next += 1;
        } else {
            map.push(None);
        }
    }
    map
}

#[allow(clippy::too_many_arguments)]
fn walk(
    lexicon: &Lexicon,
    word_spec: &WordSpec,
    oracle: &CrosswordOracle,
    open_index_of_cell: &[Option<usize>],
    start: usize,
    end: usize,
    i: usize,
    node: usize,
    rack: Rack,
    word: Vec<Label>,
    placed: Vec<PlacedLetter>,
    out: &mut Vec<Placement>,
) {
    if i == end {
        if lexicon.terminal(node) && !placed.is_empty() {
            out.push(Placement {
                start,
                end,
                word,
                placed,
            });
        }
        return;
    }

    match word_spec.cell(i) {
        Cell::Fixed(label) => {
            if let Some(next_node) = lexicon.step(node, label) {
                let mut word = word;
                word.push(label);
                walk(
                    lexicon,
                    word_spec,
                    oracle,
                    open_index_of_cell,
                    start,
                    end,
                    i + 1,
                    next_node,
                    rack,
                    word,
                    placed,
                    out,
                );
            }
        }
        cell @ (Cell::Open(_) | Cell::OpenConstrained(_, _)) => {
            let open_index = open_index_of_cell[i].expect("open cell must have an open index");
            let mut candidates = oracle
                .allowed(open_index)
                .intersection(&lexicon.children_of(node));
            if let Cell::OpenConstrained(required, _) = cell {
                candidates = if candidates.contains(required) {
                    crate::labelset::LabelSet::from(vec![required])
                } else {
                    crate::labelset::LabelSet::new()
                };
            }

            for label in candidates.iter() {
                let next_node = match lexicon.step(node, label) {
                    Some(n) => n,
                    None => continue,
                };

                if rack.has_letter(label) {
                    let next_rack = rack.take_letter(label).expect("checked has_letter");
                    recurse_branch(
                        lexicon,
                        word_spec,
                        oracle,
                        open_index_of_cell,
                        start,
                        end,
                        i,
                        open_index,
                        next_node,
                        next_rack,
                        &word,
                        &placed,
                        label,
                        false,
                        out,
                    );
                }
                if rack.has_blank() {
                    let next_rack = rack.take_blank().expect("checked has_blank");
                    recurse_branch(
                        lexicon,
                        word_spec,
                        oracle,
                        open_index_of_cell,
                        start,
                        end,
                        i,
                        open_index,
                        next_node,
                        next_rack,
                        &word,
                        &placed,
                        label,
                        true,
                        out,
                    );
                }
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn recurse_branch(
    lexicon: &Lexicon,
    word_spec: &WordSpec,
    oracle: &CrosswordOracle,
    open_index_of_cell: &[Option<usize>],
    start: usize,
    end: usize,
    i: usize,
    open_index: usize,
    next_node: usize,
    next_rack: Rack,
    word: &[Label],
    placed: &[PlacedLetter],
    label: Label,
    is_blank: bool,
    out: &mut Vec<Placement>,
) {
    let mut word = word.to_vec();
    word.push(label);
    let mut placed = placed.to_vec();
    placed.push(PlacedLetter {
        cell: i,
        open_index,
        label,
        is_blank,
    });
    walk(
        lexicon,
        word_spec,
        oracle,
        open_index_of_cell,
        start,
        end,
        i + 1,
        next_node,
        next_rack,
        word,
        placed,
        out,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_label;
    use crate::oracle::CrosswordOracle;
    use crate::query::{Cell, Query, WordSpec};
    use crate::rack::Rack;
    use crate::values::Bonus;

    fn word_string(p: &Placement) -> String {
        p.word.iter().map(|&l| decode_label(l)).collect()
    }

    #[test]
    fn test_cat_and_act_from_three_open_cells() {
        let lexicon = Lexicon::from_words(&["cat", "act"]);
        let spec = WordSpec::new(
            vec![Cell::Open(Bonus::None), Cell::Open(Bonus::None), Cell::Open(Bonus::None)],
            false,
            false,
        );
        let rack = Rack::from_pool("cat").unwrap();
        let query = Query::new(rack, spec, vec![]).unwrap();
        let oracle = CrosswordOracle::build(&lexicon, &query);
        let placements = search(&lexicon, &query, &oracle);
        let mut words: Vec<String> = placements.iter().map(word_string).collect();
        words.sort();
        words.dedup();
        assert_eq!(words, vec!["act".to_string(), "cat".to_string()]);
    }

    #[test]
    fn test_fixed_cells_constrain_without_consuming_rack() {
        let lexicon = Lexicon::from_words(&["cat"]);
        let spec = WordSpec::new(
            vec![Cell::Fixed(crate::codec::encode_char('c').unwrap()), Cell::Open(Bonus::None), Cell::Fixed(crate::codec::encode_char('t').unwrap())],
            false,
            false,
        );
        let rack = Rack::from_pool("a").unwrap();
        let query = Query::new(rack, spec, vec![]).unwrap();
        let oracle = CrosswordOracle::build(&lexicon, &query);
        let placements = search(&lexicon, &query, &oracle);
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].tiles_drawn(), 1);
        assert_eq!(word_string(&placements[0]), "cat");
    }

    #[test]
    fn test_single_main_line_letter_must_itself_be_a_word() {
        // lexicon has "cats"/"cat" and words starting with 's', but not "s"
        // as a standalone word — so the crossword "cats" is legal, but the
        // main-line single letter S is not.
        let lexicon = Lexicon::from_words(&["cats", "cat", "sun"]);
        let spec = WordSpec::new(vec![Cell::Open(Bonus::None)], false, false);
        let rack = Rack::from_pool("s").unwrap();
        let c = crate::codec::encode_char('c').unwrap();
        let a = crate::codec::encode_char('a').unwrap();
        let t = crate::codec::encode_char('t').unwrap();
        let crossword = crate::query::Crossword::new(vec![c, a, t], vec![]);
        let query = Query::new(rack, spec, vec![crossword]).unwrap();
        let oracle = CrosswordOracle::build(&lexicon, &query);
        let placements = search(&lexicon, &query, &oracle);
        assert!(placements.is_empty());
    }

    #[test]
    fn test_empty_rack_yields_no_placements() {
        let lexicon = Lexicon::from_words(&["cat"]);
        let spec = WordSpec::new(vec![Cell::Open(Bonus::None)], false, false);
        let rack = Rack::new();
        let query_result = Query::new(rack, spec, vec![]);
        // Zero open-cell-supplying rack is legal for an unconstrained Open
        // cell; the search itself must simply find nothing to place.
        let query = query_result.unwrap();
        let oracle = CrosswordOracle::build(&lexicon, &query);
        assert!(search(&lexicon, &query, &oracle).is_empty());
    }

    #[test]
    fn test_blank_and_direct_both_emitted() {
        let lexicon = Lexicon::from_words(&["at"]);
        let spec = WordSpec::new(
            vec![Cell::Open(Bonus::None), Cell::Fixed(crate::codec::encode_char('t').unwrap())],
            false,
            false,
        );
        let rack = Rack::from_pool("a*").unwrap();
        let query = Query::new(rack, spec, vec![]).unwrap();
        let oracle = CrosswordOracle::build(&lexicon, &query);
        let placements = search(&lexicon, &query, &oracle);
        // one placement with the direct 'a', one with the blank standing in for 'a'
        assert_eq!(placements.len(), 2);
        let blanks: Vec<bool> = placements.iter().map(|p| p.placed[0].is_blank).collect();
        assert!(blanks.contains(&true));
        assert!(blanks.contains(&false));
    }
}
