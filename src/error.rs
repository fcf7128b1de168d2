use thiserror::Error;

#[derive(Error, Debug)]
/// Errors produced while building a lexicon, constructing a query, or
/// parsing the textual query grammar.
///
/// The search engine itself never errors at runtime — an empty result set
/// is a successful outcome, not an error.
pub enum Error {
    /// Non a-z/`*` character in the letter pool.
    #[error("invalid letter pool: '{0}' is not a-z or '*'")]
    InvalidLetterPool(char),

    /// The word specification was empty, had no open cell, or used an
    /// unrecognized token.
    #[error("invalid word specification: {0}")]
    InvalidWordSpec(String),

    /// The crossword token count was nonzero but did not match the number
    /// of open cells in the word specification.
    #[error("crossword count mismatch: {given} crosswords for {expected} open cells")]
    CrosswordCountMismatch { given: usize, expected: usize },

    /// A crossword token did not match `[a-z]*\.[a-z]*`.
    #[error("invalid crossword token '{0}'")]
    InvalidCrossword(String),

    /// An `Open-constrained-to-letter` cell demands a letter the rack
    /// cannot supply, even counting blanks.
    #[error("rack cannot supply required letter '{0}'")]
    RackInsufficient(char),

    /// The dictionary word list could not be read or contained an
    /// unencodable entry.
    #[error("could not load dictionary from \"{path}\": {source}")]
    LexiconLoadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A character outside a-z (and not a codec-reserved symbol) was seen
    /// where a bare letter was expected.
    #[error("invalid letter '{0}'")]
    InvalidLetter(char),
}
