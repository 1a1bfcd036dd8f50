//! # Actions and Envelope Payloads
//!
//! The transaction envelope itself (signing, correlation, wire encoding) is
//! owned by the surrounding ledger; this module consumes only its decoded
//! fields. [`PlayPayload`] carries those raw fields, [`Play`] is the typed
//! action after the malformed-envelope checks have passed.

use crate::domain::invariants::limits;
use crate::errors::InvalidPlay;
use serde::{Deserialize, Serialize};

// =============================================================================
// RAW PAYLOAD
// =============================================================================

/// Decoded envelope fields, as the ledger hands them over.
///
/// Field names follow the family's wire convention (`Action`, `Name`,
/// `Space`); optionality reflects the wire, not the rules. Which fields a
/// given action kind requires is decided by [`Play::from_payload`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayPayload {
    /// Action verb: `"create"` or `"take"`.
    #[serde(rename = "Action")]
    pub action: String,
    /// Target game name.
    #[serde(rename = "Name")]
    pub name: Option<String>,
    /// Cell index for takes.
    #[serde(rename = "Space", skip_serializing_if = "Option::is_none")]
    pub space: Option<u8>,
}

impl PlayPayload {
    /// Payload for a create action.
    #[must_use]
    pub fn create(name: &str) -> Self {
        Self {
            action: "create".to_string(),
            name: Some(name.to_string()),
            space: None,
        }
    }

    /// Payload for a take action.
    #[must_use]
    pub fn take(name: &str, space: u8) -> Self {
        Self {
            action: "take".to_string(),
            name: Some(name.to_string()),
            space: Some(space),
        }
    }
}

// =============================================================================
// TYPED PLAY
// =============================================================================

/// The action kind with its kind-specific fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Open a new game under a previously-absent name.
    Create,
    /// Place a mark on cell `space` of an existing game.
    Take {
        /// Cell index, 0..=8 once validated.
        space: u8,
    },
}

/// A structurally well-formed play: authenticated requester, target game,
/// action kind. Game-state-dependent rules are checked later by
/// `services::validate`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Play {
    /// Authenticated identity of the sender, supplied by the ledger.
    pub requester: String,
    /// Target game name (the store key).
    pub game_name: String,
    /// What the requester wants to do.
    pub action: Action,
}

impl Play {
    /// Check envelope structure and produce a typed play.
    ///
    /// # Errors
    ///
    /// - [`InvalidPlay::MalformedAction`] when a field required for the
    ///   action kind is missing, the name is empty, or the name exceeds
    ///   [`limits::MAX_NAME_LEN`].
    /// - [`InvalidPlay::UnknownAction`] for an unrecognized verb.
    pub fn from_payload(requester: &str, payload: &PlayPayload) -> Result<Self, InvalidPlay> {
        let game_name = match payload.name.as_deref() {
            None | Some("") => {
                return Err(InvalidPlay::MalformedAction(
                    "missing game name".to_string(),
                ))
            }
            Some(name) if name.len() > limits::MAX_NAME_LEN => {
                return Err(InvalidPlay::MalformedAction(format!(
                    "game name exceeds {} bytes",
                    limits::MAX_NAME_LEN
                )))
            }
            Some(name) => name.to_string(),
        };

        let action = match payload.action.as_str() {
            "create" => Action::Create,
            "take" => match payload.space {
                Some(space) => Action::Take { space },
                None => {
                    return Err(InvalidPlay::MalformedAction(
                        "take requires a space".to_string(),
                    ))
                }
            },
            other => return Err(InvalidPlay::UnknownAction(other.to_string())),
        };

        Ok(Self {
            requester: requester.to_string(),
            game_name,
            action,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
