//! Component F: the scorer (spec §4.F) — computes a [`Placement`]'s total
//! score from letter values, per-cell bonus multipliers, and crossword
//! contributions.
//!
//! Grounded in the teacher's `Board::calc_word_points_unchecked`: a running
//! word multiplier accumulated while summing letter points, a bingo bonus
//! gated on tile count, and crossing words scored separately and added in.
//! Unlike the teacher (which recomputes a crossing word's score by walking
//! the perpendicular row on the live board), this engine has no board state
//! to walk, so crossword contributions come from the precomputed
//! [`CrosswordOracle`] instead. The teacher gates its bonus on `>= 7`, which
//! is safe only because its rack is hard-capped at 7 tiles; spec §3 treats
//! the rack as arbitrary finite, so this scorer gates on exact equality
//! instead (spec §4.F step 5).
use crate::oracle::CrosswordOracle;
use crate::query::WordSpec;
use crate::search::Placement;
use crate::values::{letter_value, BINGO_BONUS, BINGO_TILE_COUNT};

/// Score `placement` against `word_spec`'s bonus cells and `oracle`'s
/// crossword data.
pub fn score(placement: &Placement, word_spec: &WordSpec, oracle: &CrosswordOracle) -> u32 {
    let mut main_line_points = 0u32;
    let mut word_multiplier = 1u32;
    let mut crossword_points = 0u32;

    for placed in &placement.placed {
        let cell = word_spec.cell(placed.cell);
        let bonus = cell.bonus();
        let (letter_mult, word_mult) = bonus.multipliers();
        let value = if placed.is_blank { 0 } else { letter_value(placed.label) };

        main_line_points += value * letter_mult;
        word_multiplier *= word_mult;

        if oracle.cross_has(placed.open_index) {
            let cross_sum = value * letter_mult + oracle.cross_base_score(placed.open_index);
            crossword_points += cross_sum * word_mult;
        }
    }

    // Fixed cells contribute their base letter value with no multiplier.
    for (i, &label) in placement.word.iter().enumerate() {
        let cell_index = placement.start + i;
        if let crate::query::Cell::Fixed(_) = word_spec.cell(cell_index) {
            main_line_points += letter_value(label);
        }
    }

    let main_score = main_line_points * word_multiplier;
    let bingo = if placement.tiles_drawn() == BINGO_TILE_COUNT {
        BINGO_BONUS
    } else {
        0
    };
    main_score + crossword_points + bingo
}
