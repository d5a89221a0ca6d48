use proptest::prelude::*;

/// Opaque board state: a fixed grid of cell weights, scored purely. No game
/// rules live here; the point is a nontrivial pure function to map over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [i8; 9],
}

impl Board {
    pub fn new(cells: [i8; 9]) -> Self {
        Board { cells }
    }
}

// corners and center count for more
const WEIGHTS: [i64; 9] = [3, 2, 3, 2, 4, 2, 3, 2, 3];

fn static_score(board: &Board) -> i64 {
    board
        .cells
        .iter()
        .zip(WEIGHTS)
        .map(|(cell, weight)| i64::from(*cell) * weight)
        .sum()
}

/// Static evaluation plus one step of lookahead: the best static value
/// reachable by raising a single empty cell. Depends only on its argument.
pub fn score(board: &Board) -> i64 {
    let here = static_score(board);
    let best_next = (0..board.cells.len())
        .filter(|i| board.cells[*i] == 0)
        .map(|i| {
            let mut next = *board;
            next.cells[i] = 1;
            static_score(&next)
        })
        .max();
    here + best_next.unwrap_or(here)
}

pub fn arb_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(-1i8..=1).prop_map(Board::new)
}
