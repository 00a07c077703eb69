//! # Reducer Trait
//!
//! The seam shared by every state machine in this crate.
//!
//! ```text
//! ┌────────────┐   RawAction   ┌─────────────┐   Action   ┌──────────────┐
//! │ View layer │ ────────────► │  TryFrom    │ ─────────► │   reduce()   │
//! └────────────┘               │ (validate)  │            │ (pure, total)│
//!                              └─────────────┘            └──────┬───────┘
//!                                                                │
//!                                       Ok(next state) / Err ◄───┘
//! ```
//!
//! A reducer never mutates the state it is given. On error the caller keeps
//! the previous state, so a failed transition has no effect.

use std::fmt::Debug;

use crate::action::RawAction;
use crate::error::{CoreError, CoreResult};

/// A pure state machine: `(state, action) → Result<state>`.
pub trait Reducer {
    /// The state owned by this machine. `Default` is the initial state.
    type State: Clone + Default + Debug;

    /// Typed actions, parsed from the wire shape.
    type Action: TryFrom<RawAction, Error = CoreError> + Debug;

    /// Short name used in logs.
    const NAME: &'static str;

    /// Computes the next state.
    fn reduce(state: &Self::State, action: Self::Action) -> CoreResult<Self::State>;

    /// Applies actions in order, stopping at the first failure.
    fn replay<I>(initial: &Self::State, actions: I) -> CoreResult<Self::State>
    where
        I: IntoIterator<Item = Self::Action>,
    {
        actions
            .into_iter()
            .try_fold(initial.clone(), |state, action| Self::reduce(&state, action))
    }
}
