//! The crossword oracle: for each Open cell, precomputes the mask of
//! letters that legally complete its crossword and the fixed score
//! contribution of that crossword, moving the legality check out of the
//! search's inner loop into an O(1) mask test. See
//! [`Lexicon::crossword_mask`](crate::lexicon::Lexicon::crossword_mask) for
//! the underlying walk.
use crate::labelset::LabelSet;
use crate::lexicon::Lexicon;
use crate::query::Query;
use crate::values::letter_value;

/// Precomputed per-open-cell crossword legality and scoring data.
#[derive(Debug, Clone)]
pub struct CrosswordOracle {
    allowed: Vec<LabelSet>,
    cross_base_score: Vec<u32>,
    cross_has: Vec<bool>,
}

impl CrosswordOracle {
    /// Build an oracle for every Open cell of `query`'s word spec, in the
    /// same left-to-right order [`Query::crossword`] uses.
    pub fn build(lexicon: &Lexicon, query: &Query) -> CrosswordOracle {
        let open_count = query.crosswords().len();
        let mut allowed = Vec::with_capacity(open_count);
        let mut cross_base_score = Vec::with_capacity(open_count);
        let mut cross_has = Vec::with_capacity(open_count);

        for crossword in query.crosswords() {
            if crossword.is_unconstrained() {
                allowed.push(LabelSet::all());
                cross_base_score.push(0);
                cross_has.push(false);
            } else {
                allowed.push(lexicon.crossword_mask(&crossword.prefix, &crossword.suffix));
                let base: u32 = crossword
                    .prefix
                    .iter()
                    .chain(crossword.suffix.iter())
                    .map(|&l| letter_value(l))
                    .sum();
                cross_base_score.push(base);
                cross_has.push(true);
            }
        }

        CrosswordOracle {
            allowed,
            cross_base_score,
            cross_has,
        }
    }

    pub fn allowed(&self, open_index: usize) -> LabelSet {
        self.allowed[open_index]
    }

    pub fn cross_base_score(&self, open_index: usize) -> u32 {
        self.cross_base_score[open_index]
    }

    pub fn cross_has(&self, open_index: usize) -> bool {
        self.cross_has[open_index]
    }
}
