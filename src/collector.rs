//! The result collector: scores placements, deduplicates, and keeps the
//! top N ranked by (score desc, word asc).
use crate::codec::decode_label;
use crate::labelset::Label;
use crate::oracle::CrosswordOracle;
use crate::query::{Crossword, WordSpec};
use crate::scorer::score;
use crate::search::Placement;
use std::collections::HashSet;

/// A scored, ranked result: a placement plus its derived score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredPlacement {
    pub placement: Placement,
    pub score: u32,
}

impl ScoredPlacement {
    pub fn word(&self) -> String {
        self.placement.word.iter().map(|&l| decode_label(l)).collect()
    }

    /// The crosswords actually formed, one per newly placed letter whose
    /// cell is constrained, in the order those cells were consumed.
    pub fn crosswords_formed(&self, query_crosswords: &[Crossword]) -> Vec<String> {
        self.placement
            .placed
            .iter()
            .filter(|p| !query_crosswords[p.open_index].is_unconstrained())
            .map(|p| {
                let crossword = &query_crosswords[p.open_index];
                let mut word: Vec<Label> = crossword.prefix.clone();
                word.push(p.label);
                word.extend(crossword.suffix.iter().copied());
                word.iter().map(|&l| decode_label(l)).collect()
            })
            .collect()
    }
}

/// Score every placement, drop duplicates, and return the top `limit`
/// sorted by (score desc, word asc).
pub fn collect(
    placements: Vec<Placement>,
    word_spec: &WordSpec,
    oracle: &CrosswordOracle,
    limit: usize,
) -> Vec<ScoredPlacement> {
    let mut seen: HashSet<(usize, usize, Vec<Label>, Vec<bool>)> = HashSet::new();
    let mut scored: Vec<ScoredPlacement> = Vec::new();

    for placement in placements {
        let key = (
            placement.start,
            placement.end,
            placement.word.clone(),
            placement.placed.iter().map(|p| p.is_blank).collect(),
        );
        if !seen.insert(key) {
            continue;
        }
        let s = score(&placement, word_spec, oracle);
        scored.push(ScoredPlacement { placement, score: s });
    }

    scored.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.word().cmp(&b.word())));
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_char;
    use crate::lexicon::Lexicon;
    use crate::query::{Cell, Query, WordSpec};
    use crate::rack::Rack;
    use crate::search::search;
    use crate::values::Bonus;

    #[test]
    fn test_ranking_and_top_n() {
        let lexicon = Lexicon::from_words(&["cat", "act", "at"]);
        let spec = WordSpec::new(
            vec![Cell::Open(Bonus::None), Cell::Open(Bonus::None), Cell::Open(Bonus::None)],
            true,
            true,
        );
        let rack = Rack::from_pool("cat").unwrap();
        let query = Query::new(rack, spec, vec![]).unwrap();
        let oracle = CrosswordOracle::build(&lexicon, &query);
        let placements = search(&lexicon, &query, &oracle);
        let results = collect(placements, query.word_spec(), &oracle, 10);
        let words: Vec<String> = results.iter().map(|r| r.word()).collect();
        assert_eq!(words, vec!["act".to_string(), "cat".to_string()]);
    }

    #[test]
    fn test_top_n_is_prefix_of_full_ranking() {
        let lexicon = Lexicon::from_words(&["cat", "act"]);
        let spec = WordSpec::new(
            vec![Cell::Open(Bonus::None), Cell::Open(Bonus::None), Cell::Open(Bonus::None)],
            true,
            true,
        );
        let rack = Rack::from_pool("cat").unwrap();
        let query = Query::new(rack, spec, vec![]).unwrap();
        let oracle = CrosswordOracle::build(&lexicon, &query);
        let full = collect(search(&lexicon, &query, &oracle), query.word_spec(), &oracle, usize::MAX);
        let top1 = collect(search(&lexicon, &query, &oracle), query.word_spec(), &oracle, 1);
        assert_eq!(top1.as_slice(), &full[..1]);
    }

    #[test]
    fn test_dedup_by_start_end_word_blankmask() {
        // A single-cell spec with a blank-capable rack naturally produces
        // distinct (direct, blank) placements that must NOT be deduped
        // together, but scoring the same placement object twice must be.
        let lexicon = Lexicon::from_words(&["at"]);
        let spec = WordSpec::new(
            vec![Cell::Open(Bonus::None), Cell::Fixed(encode_char('t').unwrap())],
            true,
            true,
        );
        let rack = Rack::from_pool("a*").unwrap();
        let query = Query::new(rack, spec, vec![]).unwrap();
        let oracle = CrosswordOracle::build(&lexicon, &query);
        let placements = search(&lexicon, &query, &oracle);
        let results = collect(placements, query.word_spec(), &oracle, 10);
        assert_eq!(results.len(), 2); // direct 'a' and blank-as-'a' are distinct
    }
}
