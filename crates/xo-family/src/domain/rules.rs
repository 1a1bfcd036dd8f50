//! # Rule Engine
//!
//! Pure board-legality and outcome functions. No state, no I/O: every
//! function here is a total function of its arguments, which is what lets
//! every validating node reach the same verdict.

use crate::domain::entities::{Mark, Player, BOARD_CELLS};

// =============================================================================
// WINNING LINES
// =============================================================================

/// The eight winning lines, scanned in this fixed order: rows top to
/// bottom, then columns left to right, then the main diagonal, then the
/// anti-diagonal.
///
/// The order is part of the deterministic contract, though it is only
/// observable on boards unreachable by alternating legal play (a reachable
/// board never holds winning lines for both players).
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

// =============================================================================
// RULE FUNCTIONS
// =============================================================================

/// The player fully occupying a winning line, if any. First match in
/// [`WINNING_LINES`] order wins the scan.
#[must_use]
pub fn check_winner(board: &[Mark; BOARD_CELLS]) -> Option<Player> {
    for line in &WINNING_LINES {
        let first = board[line[0]];
        if first != Mark::Empty && board[line[1]] == first && board[line[2]] == first {
            return first.owner();
        }
    }
    None
}

/// True iff all cells are occupied and no winner exists.
#[must_use]
pub fn is_draw(board: &[Mark; BOARD_CELLS]) -> bool {
    board.iter().all(|mark| *mark != Mark::Empty) && check_winner(board).is_none()
}

/// True iff `space` indexes a board cell.
#[must_use]
pub fn is_valid_space(space: u8) -> bool {
    (space as usize) < BOARD_CELLS
}

// =============================================================================
// TESTS
// =============================================================================
