//! The session store
//!
//! At most 3 sessions, strictly newest-expiry-first, and never an
//! expired one. The read side re-runs the full
//! validate-filter-sort-truncate pipeline on every load because
//! truncation state changes purely from time passing.

use chrono::{DateTime, Duration, Utc};

use crux_core::{ContenderSession, CruxResult, RegistrationCode};

use crate::resolver::{CodeResolver, ContestWindowResolver};
use crate::storage::KeyValueStorage;

/// Storage key holding the persisted session list
pub const STORAGE_KEY: &str = "sessions";

/// Upper bound on retained sessions
pub const MAX_SESSIONS: usize = 3;

/// Hours a session stays resumable past the contest end (or past
/// authentication, whichever is later)
pub const SESSION_TTL_HOURS: i64 = 12;

/// Bounded, expiring cache of authenticated contender sessions.
///
/// Sessions are exclusively owned by the store; callers get snapshots.
pub struct SessionStore<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        SessionStore { storage }
    }

    /// Authenticate a registration code and record the session.
    ///
    /// Resolves the code and its contest via the injected collaborators,
    /// then upserts: an existing session for the same code is replaced,
    /// never duplicated. The resulting list is bounded to the
    /// `MAX_SESSIONS` freshest-by-expiry entries and persisted in one
    /// write. Collaborator failures propagate unchanged and leave
    /// storage untouched.
    pub async fn authenticate<R, C>(
        &self,
        code: &RegistrationCode,
        now: DateTime<Utc>,
        resolver: &R,
        contests: &C,
    ) -> CruxResult<ContenderSession>
    where
        R: CodeResolver,
        C: ContestWindowResolver,
    {
        let contender = resolver.find_contender_by_code(code).await?;
        let schedule = contests.get_contest(contender.contest_id).await?;

        // Latest expiry policy: 12h past contest end, but never less
        // than 12h from now for contests already over.
        let expiry_time = schedule.end_time.max(now) + Duration::hours(SESSION_TTL_HOURS);

        let session = ContenderSession {
            contender_id: contender.id,
            contest_id: contender.contest_id,
            registration_code: code.clone(),
            expiry_time,
        };

        let mut sessions = self.load(now);
        sessions.retain(|existing| existing.registration_code != session.registration_code);
        sessions.insert(0, session.clone());
        sessions.sort_by(|a, b| b.expiry_time.cmp(&a.expiry_time));
        sessions.truncate(MAX_SESSIONS);
        self.persist(&sessions);

        Ok(session)
    }

    /// Load the resumable sessions: validated, unexpired, newest expiry
    /// first, at most `MAX_SESSIONS`.
    ///
    /// Corrupt or foreign stored data is discarded wholesale and
    /// reported as "no sessions"; this never fails.
    pub fn load(&self, now: DateTime<Utc>) -> Vec<ContenderSession> {
        let Some(raw) = self.storage.get(STORAGE_KEY) else {
            return Vec::new();
        };

        let mut sessions: Vec<ContenderSession> = match serde_json::from_str(&raw) {
            Ok(sessions) => sessions,
            Err(err) => {
                tracing::warn!("discarding corrupt session data: {err}");
                return Vec::new();
            }
        };

        sessions.retain(|session| session.expiry_time > now);
        sessions.sort_by(|a, b| b.expiry_time.cmp(&a.expiry_time));
        sessions.truncate(MAX_SESSIONS);
        sessions
    }

    /// Remove all persisted sessions (explicit logout)
    pub fn clear(&self) {
        self.storage.remove(STORAGE_KEY);
    }

    fn persist(&self, sessions: &[ContenderSession]) {
        match serde_json::to_string(sessions) {
            Ok(json) => self.storage.set(STORAGE_KEY, &json),
            Err(err) => tracing::error!("failed to encode session list: {err}"),
        }
    }
}
