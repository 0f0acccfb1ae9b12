//! Two-seat game sessions.
//!
//! A `SessionStore` keeps every open game behind one lock. The first
//! participant plays White, the second Black. Each accepted move replaces
//! the stored board with the one the mover submitted, flips the turn and
//! reports whether the side now to move has been mated or stalemated.
//!
//! The store does no I/O. A transport layer owns the connections, maps them
//! to `ParticipantId`s and relays `MoveBroadcast`s to both seats.
//!
//! # Example
//! ```
//! use chess_duel::board::{encode, Board, Color};
//! use chess_duel::session::{ParticipantId, SessionConfig, SessionStore};
//!
//! let store = SessionStore::new(SessionConfig::default());
//! let start = store.create(ParticipantId(1), encode(&Board::new())).unwrap();
//! assert_eq!(start.color, Color::White);
//!
//! let joined = store.join(start.id, ParticipantId(2)).unwrap();
//! assert_eq!(joined.color, Color::Black);
//! assert!(store.open_sessions().is_empty());
//! ```

mod config;
mod error;
mod store;

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, PlainBoard};

pub use config::SessionConfig;
pub use error::{ConfigError, SessionError};
pub use store::SessionStore;

/// Opaque random session key, shown as 32 hex digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionId(pub(crate) u128);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u128::from_str_radix(s.trim(), 16).map(SessionId)
    }
}

/// Caller-assigned identity of a connected participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParticipantId(pub u64);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Terminal result of a session's game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
}

/// Returned to a participant on `create` or `join`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionStart {
    pub id: SessionId,
    /// The seat the participant took
    pub color: Color,
    pub board: PlainBoard,
    pub to_move: Color,
}

/// What both seats should receive after an accepted move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MoveBroadcast {
    pub board: PlainBoard,
    pub to_move: Color,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub outcome: Option<GameOutcome>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// The last seat emptied and the session was removed
    Closed,
    /// The other participant is still seated and should be told
    OpponentRemains(ParticipantId),
}

/// Read-only view of one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub white: Option<ParticipantId>,
    pub black: Option<ParticipantId>,
    pub board: PlainBoard,
    pub to_move: Color,
    pub outcome: Option<GameOutcome>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_hex_round_trip() {
        let id = SessionId(0xdead_beef);
        let text = id.to_string();
        assert_eq!(text.len(), 32);
        assert_eq!(text.parse::<SessionId>(), Ok(id));
        assert!("not-hex".parse::<SessionId>().is_err());
    }
}
