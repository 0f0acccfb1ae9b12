//! Error types for the session store and its configuration.

use std::fmt;

use super::{ParticipantId, SessionId};
use crate::board::{CodecError, Color, PositionError};

/// Why a session request was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    NotFound { id: SessionId },
    /// Both seats are taken
    Full { id: SessionId },
    AlreadySeated { participant: ParticipantId },
    NotSeated { participant: ParticipantId },
    NotYourTurn { to_move: Color },
    /// Checkmate or stalemate has been reached; no further moves
    GameOver { id: SessionId },
    /// `SessionConfig::max_sessions` sessions already exist
    CapacityReached { limit: usize },
    /// The submitted board is malformed
    Codec(CodecError),
    /// The submitted board does not hold exactly one king per side
    Position(PositionError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotFound { id } => write!(f, "No session {id}"),
            SessionError::Full { id } => write!(f, "Session {id} already has two players"),
            SessionError::AlreadySeated { participant } => {
                write!(f, "Participant {participant} is already seated")
            }
            SessionError::NotSeated { participant } => {
                write!(f, "Participant {participant} is not seated in this session")
            }
            SessionError::NotYourTurn { to_move } => write!(f, "It is {to_move}'s turn"),
            SessionError::GameOver { id } => write!(f, "The game in session {id} is over"),
            SessionError::CapacityReached { limit } => {
                write!(f, "Session limit of {limit} reached")
            }
            SessionError::Codec(e) => write!(f, "Malformed board: {e}"),
            SessionError::Position(e) => write!(f, "Invalid position: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Codec(e) => Some(e),
            SessionError::Position(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CodecError> for SessionError {
    fn from(e: CodecError) -> Self {
        SessionError::Codec(e)
    }
}

impl From<PositionError> for SessionError {
    fn from(e: PositionError) -> Self {
        SessionError::Position(e)
    }
}

/// Error type for `SessionConfig::apply_option`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownOption { name: String },
    InvalidValue { name: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            ConfigError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
