//! Textual query grammar (spec §6) — out of scope as "the implementation",
//! but specified for reference; this is the thin glue that turns the CLI's
//! positional strings into the typed query model.
//!
//! Grounded in the teacher's `Row`/`Letters` `TryFrom<&str>` impls in
//! `tiles.rs`, which take the same approach of a single left-to-right scan
//! over `chars()` building a typed collection, erroring on the first
//! unrecognized character.
use crate::codec::encode_char;
use crate::labelset::Label;
use crate::query::{Cell, Crossword, WordSpec};
use crate::values::Bonus;
use crate::Error;

/// Parse a word specification string (spec §6 "Word specification syntax").
pub fn parse_word_spec(s: &str) -> Result<WordSpec, Error> {
    let mut chars = s.chars().peekable();
    let anchor_left = chars.peek() == Some(&'/');
    if anchor_left {
        chars.next();
    }

    let body: Vec<char> = chars.collect();
    let (body, anchor_right) = match body.last() {
        Some('/') => (&body[..body.len() - 1], true),
        _ => (&body[..], false),
    };

    if body.is_empty() {
        return Err(Error::InvalidWordSpec("empty word specification".to_string()));
    }

    let mut cells = Vec::with_capacity(body.len());
    for &c in body {
        let cell = match c {
            '.' => Cell::Open(Bonus::None),
            '#' => Cell::Open(Bonus::DoubleLetter),
            '!' => Cell::Open(Bonus::TripleLetter),
            'A'..='Z' => Cell::Fixed(encode_char(c)?),
            'a'..='z' => Cell::OpenConstrained(encode_char(c)?, Bonus::None),
            other => {
                return Err(Error::InvalidWordSpec(format!(
                    "unrecognized word-spec token '{}'",
                    other
                )))
            }
        };
        cells.push(cell);
    }

    let spec = WordSpec::new(cells, anchor_left, anchor_right);
    if spec.open_cell_count() == 0 {
        return Err(Error::InvalidWordSpec(
            "word specification has no open cells".to_string(),
        ));
    }
    Ok(spec)
}

/// Parse one crossword token (spec §6 "Crossword syntax"):
/// `[a-z]*\.[a-z]*`, case-insensitive.
pub fn parse_crossword(token: &str) -> Result<Crossword, Error> {
    let lower = token.to_ascii_lowercase();
    let mut parts = lower.splitn(2, '.');
    let prefix_str = parts.next().unwrap_or("");
    let suffix_str = match parts.next() {
        Some(s) => s,
        None => return Err(Error::InvalidCrossword(token.to_string())),
    };
    if suffix_str.contains('.') {
        return Err(Error::InvalidCrossword(token.to_string()));
    }

    let prefix = encode_all(prefix_str).map_err(|_| Error::InvalidCrossword(token.to_string()))?;
    let suffix = encode_all(suffix_str).map_err(|_| Error::InvalidCrossword(token.to_string()))?;
    Ok(Crossword::new(prefix, suffix))
}

/// Parse every crossword token, or treat an empty list as all-unconstrained
/// (spec §6: "Token count must equal the number of Open cells ... or be
/// zero").
pub fn parse_crosswords(tokens: &[&str]) -> Result<Vec<Crossword>, Error> {
    tokens.iter().map(|t| parse_crossword(t)).collect()
}

fn encode_all(s: &str) -> Result<Vec<Label>, Error> {
    s.chars().map(encode_char).collect()
}
