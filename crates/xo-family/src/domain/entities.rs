//! # Core Domain Entities
//!
//! The persisted representation of one game instance plus its derived
//! queries. `GameState` is a pure value type: all mutation happens in the
//! apply transition (`domain::services`), never here.

use crate::errors::StoreError;
use serde::{Deserialize, Serialize};

// =============================================================================
// PLAYERS AND MARKS
// =============================================================================

/// One of the two seats in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    /// The game creator's seat. Always moves first.
    One,
    /// The joining seat, bound by the first validated take from a second
    /// identity.
    Two,
}

impl Player {
    /// The opposing seat.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// The mark this seat places on the board.
    #[must_use]
    pub fn mark(self) -> Mark {
        match self {
            Self::One => Mark::X,
            Self::Two => Mark::O,
        }
    }

    /// The win status for this seat.
    #[must_use]
    pub fn win_status(self) -> GameStatus {
        match self {
            Self::One => GameStatus::PlayerOneWins,
            Self::Two => GameStatus::PlayerTwoWins,
        }
    }
}

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    /// Cell has not been taken.
    #[default]
    Empty,
    /// Player one's mark.
    X,
    /// Player two's mark.
    O,
}

impl Mark {
    /// The seat that placed this mark, if any.
    #[must_use]
    pub fn owner(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::X => Some(Player::One),
            Self::O => Some(Player::Two),
        }
    }
}

// =============================================================================
// GAME STATUS
// =============================================================================

/// Lifecycle status of a game. Terminal once not [`GameStatus::InProgress`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted.
    InProgress,
    /// Player one completed a winning line.
    PlayerOneWins,
    /// Player two completed a winning line.
    PlayerTwoWins,
    /// Board full with no winner.
    Draw,
}

// =============================================================================
// GAME STATE
// =============================================================================

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// Persisted state of one game, stored under the game name as key.
///
/// All validating nodes must agree on these bytes, so the codec
/// ([`GameState::encode`] / [`GameState::decode`]) must be deterministic:
/// `serde_json` with a fixed field order satisfies that, and
/// `decode(encode(s)) == s` holds for every reachable state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The game's unique store key. Immutable after creation.
    pub name: String,
    /// Nine cells, indices 0..=8, row-major from the top-left.
    pub board: [Mark; BOARD_CELLS],
    /// Lifecycle status.
    pub status: GameStatus,
    /// Seat permitted to move next. Meaningless once terminal.
    pub turn: Player,
    /// Identity bound to seat one at creation. Immutable.
    pub player_one: String,
    /// Identity bound to seat two by the first validated take from a
    /// second identity. Immutable once set.
    pub player_two: Option<String>,
}

impl GameState {
    /// A fresh game: empty board, in progress, creator seated as player one
    /// with the first move.
    #[must_use]
    pub fn new(name: String, player_one: String) -> Self {
        Self {
            name,
            board: [Mark::Empty; BOARD_CELLS],
            status: GameStatus::InProgress,
            turn: Player::One,
            player_one,
            player_two: None,
        }
    }

    /// True iff the cell at `space` holds a mark. Out-of-range spaces are
    /// never occupied; range itself is `rules::is_valid_space`'s concern.
    #[must_use]
    pub fn is_occupied(&self, space: u8) -> bool {
        self.board
            .get(space as usize)
            .is_some_and(|mark| *mark != Mark::Empty)
    }

    /// True iff the game no longer accepts moves.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// The seat held by `requester`, if any.
    ///
    /// When one identity holds both seats (self-play, if the family config
    /// permits it), the seat whose turn it is resolves the ambiguity.
    #[must_use]
    pub fn seat_of(&self, requester: &str) -> Option<Player> {
        let one = self.player_one == requester;
        let two = self.player_two.as_deref() == Some(requester);
        match (one, two) {
            (true, true) => Some(self.turn),
            (true, false) => Some(Player::One),
            (false, true) => Some(Player::Two),
            (false, false) => None,
        }
    }

    /// The unbound seat, if one remains.
    #[must_use]
    pub fn open_seat(&self) -> Option<Player> {
        if self.player_two.is_none() {
            Some(Player::Two)
        } else {
            None
        }
    }

    /// Identity bound to `seat`, if bound.
    #[must_use]
    pub fn identity_of(&self, seat: Player) -> Option<&str> {
        match seat {
            Player::One => Some(self.player_one.as_str()),
            Player::Two => self.player_two.as_deref(),
        }
    }

    // =========================================================================
    // CODEC
    // =========================================================================

    /// Serialize to the store's value representation.
    ///
    /// # Errors
    ///
    /// Serialization of an in-memory `GameState` cannot realistically fail;
    /// any failure is surfaced as a fatal store error.
    pub fn encode(&self) -> Result<Vec<u8>, StoreError> {
        serde_json::to_vec(self).map_err(|e| StoreError::Io(e.to_string()))
    }

    /// Deserialize from the store's value representation.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CorruptedState`] when the stored bytes do not
    /// decode as a game state. This is a fault in the replicated state, not
    /// a validation rejection.
    pub fn decode(key: &str, bytes: &[u8]) -> Result<Self, StoreError> {
        serde_json::from_slice(bytes).map_err(|e| StoreError::CorruptedState {
            key: key.to_string(),
            detail: e.to_string(),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
