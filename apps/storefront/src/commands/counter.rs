//! # Counter Commands

use storefront_core::{CounterState, RawAction};
use tracing::debug;

use crate::error::ApiError;
use crate::state::CounterStore;

pub fn get_counter(counter: &CounterStore) -> CounterState {
    debug!("get_counter command");
    counter.snapshot()
}

/// Applies `INCREMENT`, `DECREMENT` or `RESET` and returns the new count.
pub fn dispatch_counter(counter: &CounterStore, action: RawAction) -> Result<CounterState, ApiError> {
    debug!(kind = %action.kind, "dispatch_counter command");
    counter.dispatch_raw(action)?;
    Ok(counter.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_counter_round() {
        let counter = CounterStore::new();

        dispatch_counter(&counter, RawAction::new("INCREMENT")).unwrap();
        let state = dispatch_counter(&counter, RawAction::new("INCREMENT")).unwrap();
        assert_eq!(state.count, 2);

        let state = dispatch_counter(&counter, RawAction::new("RESET")).unwrap();
        assert_eq!(state.count, 0);
    }

    #[test]
    fn test_counter_rejects_cart_actions() {
        let counter = CounterStore::new();
        let err = dispatch_counter(&counter, RawAction::new("SUBMIT")).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnrecognizedAction);
        assert_eq!(get_counter(&counter).count, 0);
    }
}
