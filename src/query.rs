//! Component C: the query model (spec §4.C) — a typed, validated
//! combination of a [`Rack`], a [`WordSpec`], and a list of [`Crossword`]s.
//!
//! The `Cell` tagged variant mirrors the teacher's approach in
//! `board.rs`/`grid.rs` of modeling a board line as a flat sequence of typed
//! squares, generalized here to the three kinds spec §3 names instead of
//! the teacher's full per-board-square state.
use crate::labelset::Label;
use crate::rack::Rack;
use crate::values::Bonus;
use crate::Error;

/// A single square of a word specification.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cell {
    /// An empty square; any rack letter admitted by the lexicon and the
    /// crossword oracle may be placed here.
    Open(Bonus),
    /// An empty square where only `label` may be placed (and must come from
    /// the rack).
    OpenConstrained(Label, Bonus),
    /// A square already holding a tile; contributes its value with no
    /// multiplier and consumes no rack tile.
    Fixed(Label),
}

impl Cell {
    pub fn is_open(&self) -> bool {
        !matches!(self, Cell::Fixed(_))
    }

    pub fn bonus(&self) -> Bonus {
        match self {
            Cell::Open(b) | Cell::OpenConstrained(_, b) => *b,
            Cell::Fixed(_) => Bonus::None,
        }
    }
}

/// An ordered line of [`Cell`]s plus anchor constraints (spec §3
/// "WordSpec").
#[derive(Debug, Clone)]
pub struct WordSpec {
    cells: Vec<Cell>,
    anchor_left: bool,
    anchor_right: bool,
}

impl WordSpec {
    pub fn new(cells: Vec<Cell>, anchor_left: bool, anchor_right: bool) -> WordSpec {
        WordSpec {
            cells,
            anchor_left,
            anchor_right,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, i: usize) -> Cell {
        self.cells[i]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn anchor_left(&self) -> bool {
        self.anchor_left
    }

    pub fn anchor_right(&self) -> bool {
        self.anchor_right
    }

    pub fn open_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }
}

/// The perpendicular-word constraint for one Open cell (spec §3
/// "Crossword"). Both halves empty means the cell is unconstrained.
#[derive(Debug, Clone, Default)]
pub struct Crossword {
    pub prefix: Vec<Label>,
    pub suffix: Vec<Label>,
}

impl Crossword {
    pub fn empty() -> Crossword {
        Crossword::default()
    }

    pub fn new(prefix: Vec<Label>, suffix: Vec<Label>) -> Crossword {
        Crossword { prefix, suffix }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty()
    }
}

/// A validated combination of rack, word specification, and per-open-cell
/// crosswords, ready to drive the placement search (spec §4.C).
#[derive(Debug, Clone)]
pub struct Query {
    rack: Rack,
    word_spec: WordSpec,
    crosswords: Vec<Crossword>,
}

impl Query {
    /// Construct and validate a query.
    ///
    /// `crosswords` may be empty, meaning every Open cell is unconstrained;
    /// otherwise its length must equal the Open cell count of `word_spec`.
    pub fn new(
        rack: Rack,
        word_spec: WordSpec,
        crosswords: Vec<Crossword>,
    ) -> Result<Query, Error> {
        let open_count = word_spec.open_cell_count();
        if open_count == 0 {
            return Err(Error::InvalidWordSpec(
                "word specification has no open cells".to_string(),
            ));
        }
        let crosswords = if crosswords.is_empty() {
            (0..open_count).map(|_| Crossword::empty()).collect()
        } else if crosswords.len() != open_count {
            return Err(Error::CrosswordCountMismatch {
                given: crosswords.len(),
                expected: open_count,
            });
        } else {
            crosswords
        };

        for cell in word_spec.cells() {
            if let Cell::OpenConstrained(label, _) = cell {
                if !rack.can_supply(*label) {
                    return Err(Error::RackInsufficient(crate::codec::decode_label(*label)));
                }
            }
        }

        Ok(Query {
            rack,
            word_spec,
            crosswords,
        })
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn word_spec(&self) -> &WordSpec {
        &self.word_spec
    }

    /// The crossword for the `open_index`-th Open cell (0-based, left to
    /// right among Open cells only).
    pub fn crossword(&self, open_index: usize) -> &Crossword {
        &self.crosswords[open_index]
    }

    pub fn crosswords(&self) -> &[Crossword] {
        &self.crosswords
    }
}
