//! # Reducer Store
//!
//! A shareable handle that owns one reducer's state.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  dispatch(action)                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  lock ──► next = R::reduce(&state, action) ──┬── Ok  ──► state = next  │
//! │                                              │                          │
//! │                                              └── Err ──► state as-is   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  unlock                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The state is wrapped in `Arc<Mutex<T>>` so clones of the handle can be
//! passed to every consumer. Only one dispatch runs at a time, and each one
//! replaces the whole state, so readers never see a half-applied transition.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use storefront_core::{CoreResult, RawAction, Reducer};
use tracing::{debug, warn};

/// Owns the state of reducer `R`.
pub struct Store<R: Reducer> {
    state: Arc<Mutex<R::State>>,
}

impl<R: Reducer> Store<R> {
    /// Creates a store holding the reducer's initial state.
    pub fn new() -> Self {
        Store::from_state(R::State::default())
    }

    /// Creates a store holding the given state.
    pub fn from_state(state: R::State) -> Self {
        Store {
            state: Arc::new(Mutex::new(state)),
        }
    }

    // A panic can only happen before the state is replaced, so a poisoned
    // lock still guards a consistent state.
    fn lock(&self) -> MutexGuard<'_, R::State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the state.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let items = cart_store.with_state(|cart| cart.total_items());
    /// ```
    pub fn with_state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&R::State) -> T,
    {
        f(&self.lock())
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> R::State {
        self.lock().clone()
    }

    /// Applies a typed action.
    pub fn dispatch(&self, action: R::Action) -> CoreResult<()> {
        self.read_then_dispatch(action, |_| ())
    }

    /// Parses and applies a wire action.
    pub fn dispatch_raw(&self, raw: RawAction) -> CoreResult<()> {
        let kind = raw.kind.clone();
        let action = R::Action::try_from(raw).map_err(|err| {
            warn!(reducer = R::NAME, %kind, error = %err, "rejected action");
            err
        })?;
        self.dispatch(action)
    }

    /// Reads the state and applies an action under one lock, so nothing can
    /// be dispatched in between. Returns what `read` produced from the state
    /// as it was before the action.
    pub fn read_then_dispatch<F, T>(&self, action: R::Action, read: F) -> CoreResult<T>
    where
        F: FnOnce(&R::State) -> T,
    {
        let mut state = self.lock();
        debug!(reducer = R::NAME, ?action, "dispatch");

        let observed = read(&state);
        match R::reduce(&state, action) {
            Ok(next) => {
                *state = next;
                Ok(observed)
            }
            Err(err) => {
                warn!(reducer = R::NAME, error = %err, "transition failed, state unchanged");
                Err(err)
            }
        }
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Store {
            state: Arc::clone(&self.state),
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("reducer", &R::NAME)
            .field("state", &*self.lock())
            .finish()
    }
}
