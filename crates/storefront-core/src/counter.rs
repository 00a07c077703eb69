//! # Counter Widget
//!
//! A standalone counter with its own reducer. It shares nothing with the
//! cart beyond the [`Reducer`] seam.

use serde::{Deserialize, Serialize};

use crate::action::RawAction;
use crate::error::{CoreError, CoreResult};
use crate::reducer::Reducer;

/// Counter actions. None of them carry a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
}

impl TryFrom<RawAction> for CounterAction {
    type Error = CoreError;

    fn try_from(raw: RawAction) -> CoreResult<Self> {
        match raw.kind.as_str() {
            "INCREMENT" => Ok(CounterAction::Increment),
            "DECREMENT" => Ok(CounterAction::Decrement),
            "RESET" => Ok(CounterAction::Reset),
            _ => Err(CoreError::UnrecognizedAction { kind: raw.kind }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub count: i64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    const NAME: &'static str = "counter";

    fn reduce(state: &CounterState, action: CounterAction) -> CoreResult<CounterState> {
        let count = match action {
            CounterAction::Increment => state.count.saturating_add(1),
            CounterAction::Decrement => state.count.saturating_sub(1),
            CounterAction::Reset => 0,
        };
        Ok(CounterState { count })
    }
}
