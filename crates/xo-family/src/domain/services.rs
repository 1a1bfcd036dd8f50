//! # Transition Services
//!
//! The deterministic core: pure `validate` and `apply` functions. Validation
//! decides admission and returns a typed [`Admitted`] verdict so that apply
//! has no unreachable input shapes; apply is total on admitted verdicts and
//! never fails. Neither function touches the store.

use crate::domain::action::{Action, Play};
use crate::domain::entities::{GameState, GameStatus, Player};
use crate::domain::rules;
use crate::errors::InvalidPlay;

// =============================================================================
// FAMILY CONFIG
// =============================================================================

/// Policy knobs for the transition rules.
///
/// Seat binding is part of the validated transition, but the exact policy is
/// configuration rather than protocol: the wire format and store layout do
/// not change with these settings, so nodes configured identically stay in
/// consensus.
#[derive(Clone, Copy, Debug, Default)]
pub struct FamilyConfig {
    /// Whether the creator may claim the open second seat themselves and
    /// play both sides. Off by default: a second identity binds seat two.
    pub allow_self_play: bool,
}

// =============================================================================
// ADMISSION VERDICT
// =============================================================================

/// What an accepted play will do to the game. Produced only by
/// [`validate`]; consumed only by [`apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Admitted {
    /// Open a fresh game under the play's name.
    Create,
    /// Place the actor's mark on `space` of `state`. The actor is already
    /// resolved, including an open-seat binding decided in this same
    /// transition.
    Take {
        /// The stored state the play was validated against.
        state: GameState,
        /// Seat acting in this transition.
        actor: Player,
        /// Validated cell index.
        space: u8,
    },
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Decide whether a play is admitted against the current stored state.
///
/// Pure and idempotent: re-evaluating the same `(state, play)` pair yields
/// the same verdict, which is required when the surrounding ledger
/// re-validates during ordering or retries.
///
/// # Errors
///
/// One of the rejection reasons in [`InvalidPlay`]; the caller reports it
/// to the requester and leaves the store untouched.
pub fn validate(
    current: Option<GameState>,
    play: &Play,
    config: &FamilyConfig,
) -> Result<Admitted, InvalidPlay> {
    match play.action {
        Action::Create => match current {
            Some(_) => Err(InvalidPlay::GameAlreadyExists(play.game_name.clone())),
            None => Ok(Admitted::Create),
        },
        Action::Take { space } => {
            let Some(state) = current else {
                return Err(InvalidPlay::NoSuchGame(play.game_name.clone()));
            };
            if state.is_terminal() {
                return Err(InvalidPlay::GameAlreadyOver);
            }
            if !rules::is_valid_space(space) {
                return Err(InvalidPlay::InvalidSpace(space));
            }
            if state.is_occupied(space) {
                return Err(InvalidPlay::SpaceAlreadyTaken(space));
            }
            let Some(actor) = resolve_actor(&state, &play.requester, config) else {
                return Err(InvalidPlay::NotYourTurn(play.requester.clone()));
            };
            if actor != state.turn {
                return Err(InvalidPlay::NotYourTurn(play.requester.clone()));
            }
            Ok(Admitted::Take {
                state,
                actor,
                space,
            })
        }
    }
}

/// The seat a requester would act from, binding an open seat if unbound.
fn resolve_actor(state: &GameState, requester: &str, config: &FamilyConfig) -> Option<Player> {
    match state.seat_of(requester) {
        Some(seat) => {
            // A self-playing creator claims the open seat when it is that
            // seat's turn.
            if config.allow_self_play
                && seat == Player::One
                && state.open_seat() == Some(Player::Two)
                && state.turn == Player::Two
            {
                Some(Player::Two)
            } else {
                Some(seat)
            }
        }
        None => state.open_seat(),
    }
}

// =============================================================================
// APPLY
// =============================================================================

/// Compute the next game state for an admitted play. Total: never fails on
/// a verdict produced by [`validate`] for the same play.
#[must_use]
pub fn apply(play: &Play, admitted: Admitted) -> GameState {
    match admitted {
        Admitted::Create => GameState::new(play.game_name.clone(), play.requester.clone()),
        Admitted::Take {
            mut state,
            actor,
            space,
        } => {
            if actor == Player::Two && state.player_two.is_none() {
                state.player_two = Some(play.requester.clone());
            }
            state.board[space as usize] = actor.mark();

            if let Some(winner) = rules::check_winner(&state.board) {
                state.status = winner.win_status();
            } else if rules::is_draw(&state.board) {
                state.status = GameStatus::Draw;
            } else {
                state.turn = actor.other();
            }
            state
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
