//! A query engine that enumerates and scores legal Scrabble tile placements
//! for a rack, a word specification, and the crosswords it would form.
//!
//! The crate is organized leaves-first: static tables ([`values`]) and
//! encoding ([`codec`], [`labelset`]) at the bottom, the [`lexicon`] built
//! on top of those, the [`query`] model and [`oracle`] built on the
//! lexicon, and [`search`] + [`scorer`] + [`collector`] composing all of the
//! above into the full pipeline a caller drives from [`parse`]d CLI input.
pub mod codec;
pub mod collector;
pub mod error;
pub mod labelset;
pub mod lexicon;
pub mod oracle;
pub mod parse;
pub mod query;
pub mod rack;
pub mod scorer;
pub mod search;
pub mod values;

pub use collector::{collect, ScoredPlacement};
pub use error::Error;
pub use lexicon::Lexicon;
pub use oracle::CrosswordOracle;
pub use query::{Cell, Crossword, Query, WordSpec};
pub use rack::Rack;
pub use search::{search, Placement};

/// Run a full query end to end: build the oracle, search, score, rank.
/// This is the pipeline every caller (the CLI, tests) drives.
pub fn evaluate(lexicon: &Lexicon, query: &Query, limit: usize) -> Vec<ScoredPlacement> {
    let oracle = CrosswordOracle::build(lexicon, query);
    let placements = search(lexicon, query, &oracle);
    collect(placements, query.word_spec(), &oracle, limit)
}
