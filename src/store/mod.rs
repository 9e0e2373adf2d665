//! State container that owns a live session.
//!
//! This module is the imperative shell around the pure session core. It
//! serializes dispatch through a single lock, keeps a bounded run of earlier
//! snapshots for undo, and tells subscribers about each new state in the
//! order the states were produced.

use crate::session::{transition, Action, Session, SessionError};
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use uuid::Uuid;

/// Snapshots kept for undo by [`SessionStore::new`].
pub const DEFAULT_UNDO_DEPTH: usize = 100;

/// Container that applies actions to a session it owns.
pub trait Store {
    /// Apply `action` to the current session.
    ///
    /// A rejected action leaves the current session untouched.
    fn dispatch(&self, action: Action) -> Result<(), SessionError>;

    /// Snapshot of the current session.
    fn state(&self) -> Session;
}

/// Callback run with the new session after every accepted dispatch.
pub type Listener = Arc<dyn Fn(&Session) + Send + Sync>;

/// Record of one accepted dispatch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DispatchRecord {
    /// The action that was applied
    pub action: Action,
    /// Submissions in the session after the action
    pub attempts: usize,
    /// When the action was applied
    pub timestamp: DateTime<Utc>,
}

struct Inner {
    current: Session,
    snapshots: VecDeque<Session>,
    undo_depth: usize,
    log: Vec<DispatchRecord>,
}

impl Inner {
    fn push_snapshot(&mut self, previous: Session) {
        if self.undo_depth == 0 {
            return;
        }
        if self.snapshots.len() == self.undo_depth {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(previous);
    }
}

/// Single-writer store for one session.
///
/// Every dispatch runs under one lock, so concurrent callers are applied
/// one at a time: no submission is lost or duplicated, and guesses and
/// scores never differ in length.
///
/// Listeners are called once per accepted dispatch or undo, in the same
/// order the states were produced, so the last call a listener sees is
/// always the current state. They run outside the state lock and may call
/// [`Store::state`] or [`SessionStore::subscribe`]; a listener added during a
/// notification is first called for the next state. Listeners must not
/// dispatch or undo on the same store: notification holds the ordering lock
/// that the nested call would wait on.
///
/// Only the most recent `undo_depth` snapshots are kept, so a long session
/// does not keep every earlier state alive.
///
/// # Example
///
/// ```rust
/// use codebreaker::core::{Alphabet, Code};
/// use codebreaker::session::{Action, Session};
/// use codebreaker::store::{SessionStore, Store};
///
/// let session = Session::new(Alphabet::new(5)?, Code::from(vec![1, 2, 3, 4, 0]))?;
/// let store = SessionStore::new(session);
///
/// store.dispatch(Action::CycleColor(0))?;
/// store.dispatch(Action::SubmitGuess)?;
///
/// let state = store.state();
/// assert_eq!(state.guesses().len(), 1);
/// assert_eq!(state.scores().len(), 1);
///
/// assert!(store.undo());
/// assert_eq!(store.state().attempts(), 0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct SessionStore {
    id: Uuid,
    inner: Mutex<Inner>,
    listeners: Mutex<Vec<Listener>>,
    notify_order: Mutex<()>,
}

impl SessionStore {
    /// Create a store owning `initial`, keeping [`DEFAULT_UNDO_DEPTH`]
    /// snapshots for undo.
    pub fn new(initial: Session) -> Self {
        Self::with_undo_depth(initial, DEFAULT_UNDO_DEPTH)
    }

    /// Create a store owning `initial` that keeps at most `undo_depth`
    /// snapshots. A depth of zero disables undo.
    pub fn with_undo_depth(initial: Session, undo_depth: usize) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(
            session = %id,
            code_length = initial.code_length(),
            undo_depth,
            "Session store created"
        );
        Self {
            id,
            inner: Mutex::new(Inner {
                current: initial,
                snapshots: VecDeque::new(),
                undo_depth,
                log: Vec::new(),
            }),
            listeners: Mutex::new(Vec::new()),
            notify_order: Mutex::new(()),
        }
    }

    /// Identifier used to tag this session in logs.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Register a listener for new states.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        self.listeners.lock().push(Arc::new(listener));
    }

    /// Restore the snapshot before the most recent accepted dispatch.
    ///
    /// Returns `false` when there is nothing left to undo, either because
    /// nothing was dispatched or because the undo depth was used up.
    pub fn undo(&self) -> bool {
        let (state, _order) = {
            let mut inner = self.inner.lock();
            let Some(previous) = inner.snapshots.pop_back() else {
                return false;
            };
            inner.current = previous;
            (inner.current.clone(), self.notify_order.lock())
        };

        tracing::debug!(
            session = %self.id,
            attempts = state.attempts(),
            "Undid last action"
        );
        self.notify(&state);
        true
    }

    /// Retained sessions that preceded the current one, oldest first.
    pub fn snapshots(&self) -> Vec<Session> {
        self.inner.lock().snapshots.iter().cloned().collect()
    }

    /// Most snapshots this store keeps for undo.
    pub fn undo_depth(&self) -> usize {
        self.inner.lock().undo_depth
    }

    /// Accepted dispatches, in the order they were applied.
    pub fn log(&self) -> Vec<DispatchRecord> {
        self.inner.lock().log.clone()
    }

    /// Call every listener with `state`.
    ///
    /// Callers hold the ordering lock, taken before the state lock was
    /// released. The listener list is copied out first so a listener can
    /// subscribe without waiting on itself.
    fn notify(&self, state: &Session) {
        let listeners: Vec<Listener> = self.listeners.lock().clone();
        for listener in &listeners {
            listener(state);
        }
    }

    fn apply(&self, action: &Action) -> Result<(Session, MutexGuard<'_, ()>), SessionError> {
        let mut inner = self.inner.lock();

        let next = match transition(&inner.current, action) {
            Ok(next) => next,
            Err(error) => {
                tracing::warn!(
                    session = %self.id,
                    action = action.name(),
                    error = %error,
                    "Action rejected"
                );
                return Err(error);
            }
        };

        if matches!(action, Action::Unrecognized) {
            tracing::debug!(session = %self.id, "Ignoring unrecognized action");
        }

        let previous = std::mem::replace(&mut inner.current, next.clone());
        inner.push_snapshot(previous);
        inner.log.push(DispatchRecord {
            action: action.clone(),
            attempts: next.attempts(),
            timestamp: Utc::now(),
        });

        Ok((next, self.notify_order.lock()))
    }
}

impl Store for SessionStore {
    fn dispatch(&self, action: Action) -> Result<(), SessionError> {
        let (next, _order) = self.apply(&action)?;

        tracing::debug!(
            session = %self.id,
            action = action.name(),
            attempts = next.attempts(),
            "Action applied"
        );

        if matches!(action, Action::SubmitGuess) {
            if let Some((_, score)) = next.history().last() {
                tracing::debug!(
                    session = %self.id,
                    bulls = score.bulls,
                    cows = score.cows,
                    "Guess scored"
                );
            }
            if next.is_solved() {
                tracing::info!(session = %self.id, attempts = next.attempts(), "Code cracked");
            }
        }

        self.notify(&next);
        Ok(())
    }

    fn state(&self) -> Session {
        self.inner.lock().current.clone()
    }
}
