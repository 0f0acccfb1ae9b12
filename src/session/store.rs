use std::collections::HashMap;
use std::time::Instant;

use log::{debug, info, warn};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    GameOutcome, LeaveOutcome, MoveBroadcast, ParticipantId, SessionConfig, SessionError,
    SessionId, SessionSnapshot, SessionStart,
};
use crate::board::{decode, encode, Board, Color, GameStatus, PlainBoard};

struct Session {
    white: Option<ParticipantId>,
    black: Option<ParticipantId>,
    board: Board,
    to_move: Color,
    outcome: Option<GameOutcome>,
    last_activity: Instant,
}

impl Session {
    fn seat_of(&self, participant: ParticipantId) -> Option<Color> {
        if self.white == Some(participant) {
            Some(Color::White)
        } else if self.black == Some(participant) {
            Some(Color::Black)
        } else {
            None
        }
    }

    fn seat_mut(&mut self, color: Color) -> &mut Option<ParticipantId> {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    fn is_open(&self) -> bool {
        self.white.is_none() || self.black.is_none()
    }
}

struct Inner {
    sessions: HashMap<SessionId, Session>,
    rng: StdRng,
}

impl Inner {
    fn fresh_id(&mut self) -> SessionId {
        loop {
            let id = SessionId(self.rng.gen());
            if !self.sessions.contains_key(&id) {
                return id;
            }
        }
    }

    fn session_mut(&mut self, id: SessionId) -> Result<&mut Session, SessionError> {
        self.sessions
            .get_mut(&id)
            .ok_or(SessionError::NotFound { id })
    }
}

/// All open sessions, shared by the transport's handlers.
///
/// Every operation takes the one lock for its whole duration, so moves on a
/// session are applied one at a time.
pub struct SessionStore {
    config: SessionConfig,
    inner: Mutex<Inner>,
}

impl SessionStore {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Store whose session ids follow from `seed`.
    #[must_use]
    pub fn with_seed(config: SessionConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SessionConfig, rng: StdRng) -> Self {
        SessionStore {
            config,
            inner: Mutex::new(Inner {
                sessions: HashMap::new(),
                rng,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().sessions.is_empty()
    }

    /// Decode and, if configured, king-check a submitted board.
    fn accept_board(&self, plain: &PlainBoard) -> Result<Board, SessionError> {
        let board = decode(plain)?;
        if self.config.verify_kings {
            board.validate_kings()?;
        }
        Ok(board)
    }

    /// Open a session seating `host` as White. White moves first.
    pub fn create(
        &self,
        host: ParticipantId,
        initial: PlainBoard,
    ) -> Result<SessionStart, SessionError> {
        let board = self.accept_board(&initial)?;
        let mut inner = self.inner.lock();
        if inner.sessions.len() >= self.config.max_sessions {
            warn!("session limit of {} reached", self.config.max_sessions);
            return Err(SessionError::CapacityReached {
                limit: self.config.max_sessions,
            });
        }

        let id = inner.fresh_id();
        let plain = encode(&board);
        inner.sessions.insert(
            id,
            Session {
                white: Some(host),
                black: None,
                board,
                to_move: Color::White,
                outcome: None,
                last_activity: Instant::now(),
            },
        );
        info!("session {id} created by {host}");
        Ok(SessionStart {
            id,
            color: Color::White,
            board: plain,
            to_move: Color::White,
        })
    }

    /// Seat `guest` in the free seat, Black unless only White is vacant.
    pub fn join(&self, id: SessionId, guest: ParticipantId) -> Result<SessionStart, SessionError> {
        let mut inner = self.inner.lock();
        let session = inner.session_mut(id)?;
        if session.seat_of(guest).is_some() {
            return Err(SessionError::AlreadySeated { participant: guest });
        }
        let color = if session.black.is_none() {
            Color::Black
        } else if session.white.is_none() {
            Color::White
        } else {
            warn!("{guest} tried to join full session {id}");
            return Err(SessionError::Full { id });
        };

        *session.seat_mut(color) = Some(guest);
        session.last_activity = Instant::now();
        info!("{guest} joined session {id} as {color}");
        Ok(SessionStart {
            id,
            color,
            board: encode(&session.board),
            to_move: session.to_move,
        })
    }

    /// Sessions with a free seat, ordered by id.
    #[must_use]
    pub fn open_sessions(&self) -> Vec<SessionId> {
        let inner = self.inner.lock();
        let mut open: Vec<SessionId> = inner
            .sessions
            .iter()
            .filter(|(_, s)| s.is_open())
            .map(|(&id, _)| id)
            .collect();
        open.sort_unstable();
        open
    }

    /// Accept the board `participant` produced with their move.
    ///
    /// The submitted board replaces the stored one as-is; only its shape and
    /// kings are checked, not the move that led to it. The turn then passes
    /// to the other side, whose status decides the outcome.
    pub fn submit_move(
        &self,
        id: SessionId,
        participant: ParticipantId,
        board: PlainBoard,
    ) -> Result<MoveBroadcast, SessionError> {
        let mut inner = self.inner.lock();
        let session = inner.session_mut(id)?;
        if session.outcome.is_some() {
            warn!("{participant} moved in finished session {id}");
            return Err(SessionError::GameOver { id });
        }
        let Some(seat) = session.seat_of(participant) else {
            warn!("{participant} is not seated in session {id}");
            return Err(SessionError::NotSeated { participant });
        };
        if seat != session.to_move {
            warn!("{participant} moved out of turn in session {id}");
            return Err(SessionError::NotYourTurn {
                to_move: session.to_move,
            });
        }

        let next = self.accept_board(&board).inspect_err(|e| {
            warn!("rejected board from {participant} in session {id}: {e}");
        })?;
        let to_move = seat.opponent();
        let outcome = match next.status(to_move) {
            GameStatus::Checkmate { winner } => Some(GameOutcome::Checkmate { winner }),
            GameStatus::Stalemate => Some(GameOutcome::Stalemate),
            GameStatus::Check | GameStatus::InProgress => None,
        };

        session.board = next;
        session.to_move = to_move;
        session.outcome = outcome;
        session.last_activity = Instant::now();

        match outcome {
            Some(GameOutcome::Checkmate { winner }) => {
                info!("session {id}: checkmate, {winner} wins");
            }
            Some(GameOutcome::Stalemate) => info!("session {id}: stalemate"),
            None => debug!("session {id}: {seat} moved, {to_move} to play"),
        }
        Ok(MoveBroadcast {
            board: encode(&session.board),
            to_move,
            outcome,
        })
    }

    /// Vacate `participant`'s seat, removing the session once it is empty.
    pub fn leave(
        &self,
        id: SessionId,
        participant: ParticipantId,
    ) -> Result<LeaveOutcome, SessionError> {
        let mut inner = self.inner.lock();
        let session = inner.session_mut(id)?;
        let Some(seat) = session.seat_of(participant) else {
            return Err(SessionError::NotSeated { participant });
        };

        *session.seat_mut(seat) = None;
        session.last_activity = Instant::now();
        let remaining = *session.seat_mut(seat.opponent());
        match remaining {
            Some(other) => {
                info!("{participant} left session {id}, {other} remains");
                Ok(LeaveOutcome::OpponentRemains(other))
            }
            None => {
                inner.sessions.remove(&id);
                info!("session {id} closed");
                Ok(LeaveOutcome::Closed)
            }
        }
    }

    /// Drop sessions idle for longer than the configured timeout at `now`.
    pub fn expire_idle(&self, now: Instant) -> Vec<SessionId> {
        let timeout = self.config.idle_timeout;
        let mut inner = self.inner.lock();
        let mut expired: Vec<SessionId> = inner
            .sessions
            .iter()
            .filter(|(_, s)| now.saturating_duration_since(s.last_activity) > timeout)
            .map(|(&id, _)| id)
            .collect();
        expired.sort_unstable();
        for id in &expired {
            inner.sessions.remove(id);
            info!("session {id} expired");
        }
        expired
    }

    #[must_use]
    pub fn snapshot(&self, id: SessionId) -> Option<SessionSnapshot> {
        let inner = self.inner.lock();
        inner.sessions.get(&id).map(|s| SessionSnapshot {
            id,
            white: s.white,
            black: s.black,
            board: encode(&s.board),
            to_move: s.to_move,
            outcome: s.outcome,
        })
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        SessionStore::new(SessionConfig::default())
    }
}
