//! # Domain Invariants
//!
//! Invariants that MUST hold across every accepted transition. The pure
//! transition functions uphold these by construction; the checks here give
//! the service a debug-build safety net and the test suite a direct probe.
//!
//! | ID | Invariant | Upheld by |
//! |----|-----------|-----------|
//! | 1 | Single winner: no board holds winning lines for both players | `services::validate` (legal play only) |
//! | 2 | Turn alternation: an in-progress successor flips the turn | `services::apply` |
//! | 3 | Terminal lock: a terminal state has no successor | `services::validate` |
//! | 4 | Monotonic board: marks are added one per take, never moved | `services::apply` |
//! | 5 | Status consistency: `status` matches the rule engine's reading of the board | `services::apply` |
//! | 6 | Seat stability: `name`, `player_one`, and a bound `player_two` never change | `services::apply` |

use crate::domain::entities::{GameState, GameStatus, Mark, Player, BOARD_CELLS};
use crate::domain::rules;

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// INVARIANT-1: at most one player holds a complete winning line.
#[must_use]
pub fn check_single_winner(board: &[Mark; BOARD_CELLS]) -> bool {
    let mut one = false;
    let mut two = false;
    for line in &rules::WINNING_LINES {
        let first = board[line[0]];
        if first != Mark::Empty && board[line[1]] == first && board[line[2]] == first {
            match first.owner() {
                Some(Player::One) => one = true,
                Some(Player::Two) => two = true,
                None => {}
            }
        }
    }
    !(one && two)
}

/// INVARIANT-2: if the successor is still in progress, the turn flipped.
#[must_use]
pub fn check_turn_alternation(prev: &GameState, next: &GameState) -> bool {
    if next.status == GameStatus::InProgress {
        next.turn == prev.turn.other()
    } else {
        true
    }
}

/// INVARIANT-3: terminal states have no successors.
#[must_use]
pub fn check_terminal_lock(prev: &GameState) -> bool {
    !prev.is_terminal()
}

/// INVARIANT-4: exactly one previously-empty cell gained the mover's mark;
/// no cell was cleared or overwritten.
#[must_use]
pub fn check_monotonic_board(prev: &GameState, next: &GameState) -> bool {
    let mut added = 0;
    for (before, after) in prev.board.iter().zip(next.board.iter()) {
        match (before, after) {
            (a, b) if a == b => {}
            (Mark::Empty, _) => added += 1,
            _ => return false,
        }
    }
    added == 1
}

/// INVARIANT-5: the stored status agrees with the rule engine.
#[must_use]
pub fn check_status_consistency(state: &GameState) -> bool {
    match rules::check_winner(&state.board) {
        Some(winner) => state.status == winner.win_status(),
        None if rules::is_draw(&state.board) => state.status == GameStatus::Draw,
        None => state.status == GameStatus::InProgress,
    }
}

/// INVARIANT-6: identity bindings and the name are stable; seat two may go
/// from open to bound, never change once bound.
#[must_use]
pub fn check_seat_stability(prev: &GameState, next: &GameState) -> bool {
    next.name == prev.name
        && next.player_one == prev.player_one
        && match (&prev.player_two, &next.player_two) {
            (Some(before), Some(after)) => before == after,
            (Some(_), None) => false,
            (None, _) => true,
        }
}

/// Check every transition invariant for an accepted take.
#[must_use]
pub fn check_take_transition(prev: &GameState, next: &GameState) -> InvariantCheckResult {
    let mut violations = Vec::new();

    if !check_terminal_lock(prev) {
        violations.push(InvariantViolation::TerminalStateMutated);
    }
    if !check_single_winner(&next.board) {
        violations.push(InvariantViolation::TwoWinners);
    }
    if !check_turn_alternation(prev, next) {
        violations.push(InvariantViolation::TurnNotFlipped);
    }
    if !check_monotonic_board(prev, next) {
        violations.push(InvariantViolation::BoardNotMonotonic);
    }
    if !check_status_consistency(next) {
        violations.push(InvariantViolation::StatusInconsistent);
    }
    if !check_seat_stability(prev, next) {
        violations.push(InvariantViolation::SeatRebound);
    }

    if violations.is_empty() {
        InvariantCheckResult::Valid
    } else {
        InvariantCheckResult::Invalid(violations)
    }
}

// =============================================================================
// INVARIANT TYPES
// =============================================================================

/// Result of checking the transition invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantCheckResult {
    /// All invariants hold.
    Valid,
    /// One or more invariants violated.
    Invalid(Vec<InvariantViolation>),
}

impl InvariantCheckResult {
    /// Returns true if all invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Specific invariant violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A terminal state was given a successor.
    TerminalStateMutated,
    /// Both players hold complete winning lines.
    TwoWinners,
    /// An in-progress successor kept the same turn.
    TurnNotFlipped,
    /// A mark was moved, cleared, or more than one was added.
    BoardNotMonotonic,
    /// Stored status disagrees with the rule engine.
    StatusInconsistent,
    /// The name or a bound seat changed.
    SeatRebound,
}

// =============================================================================
// LIMITS
// =============================================================================

/// Envelope hygiene limits.
pub mod limits {
    /// Maximum accepted game name length in bytes. Names are store keys;
    /// an unbounded key is an unbounded storage obligation.
    pub const MAX_NAME_LEN: usize = 64;
}

// =============================================================================
// TESTS
// =============================================================================
