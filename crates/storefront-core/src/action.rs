//! # Wire Actions
//!
//! The untyped action shape the view layer dispatches:
//!
//! ```json
//! { "type": "ADD", "payload": { "sku": "item0001", "name": "Widget", "price": 999 } }
//! ```
//!
//! Each reducer converts a [`RawAction`] into its own typed action enum with
//! `TryFrom`. That conversion is where unknown `type` strings and missing
//! payloads are rejected, so the reducers themselves only see well-formed
//! actions.

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;

/// An action as received from the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAction {
    /// Action type, e.g. `"ADD"`.
    #[serde(rename = "type")]
    pub kind: String,

    /// CartLine-shaped data; absent for actions that carry none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<ActionPayload>,
}

impl RawAction {
    /// An action with no payload.
    pub fn new(kind: impl Into<String>) -> Self {
        RawAction {
            kind: kind.into(),
            payload: None,
        }
    }

    /// An action carrying a payload.
    pub fn with_payload(kind: impl Into<String>, payload: ActionPayload) -> Self {
        RawAction {
            kind: kind.into(),
            payload: Some(payload),
        }
    }

    /// Returns the payload or a `MissingPayload` error naming this action.
    pub fn require_payload(self) -> Result<ActionPayload, ValidationError> {
        let kind = self.kind;
        self.payload
            .ok_or(ValidationError::MissingPayload { action: kind })
    }
}

/// CartLine-shaped payload. Every field is optional on the wire; each
/// action decides which ones it needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<i64>,
}

impl ActionPayload {
    pub fn sku(sku: impl Into<String>) -> Self {
        ActionPayload {
            sku: Some(sku.into()),
            ..Default::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    pub fn qty(mut self, qty: i64) -> Self {
        self.qty = Some(qty);
        self
    }
}

/// Takes a required payload field or reports it by name.
pub(crate) fn required<T>(value: Option<T>, field: &str) -> CoreResult<T> {
    value.ok_or_else(|| ValidationError::required(field).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action_with_payload() {
        let raw: RawAction = serde_json::from_str(
            r#"{"type":"ADD","payload":{"sku":"item0001","name":"Widget","price":999}}"#,
        )
        .unwrap();

        assert_eq!(raw.kind, "ADD");
        assert_eq!(
            raw.payload,
            Some(
                ActionPayload::sku("item0001")
                    .name("Widget")
                    .price(Money::from_cents(999))
            )
        );
    }

    #[test]
    fn test_parse_action_without_payload() {
        let raw: RawAction = serde_json::from_str(r#"{"type":"SUBMIT"}"#).unwrap();
        assert_eq!(raw, RawAction::new("SUBMIT"));
    }

    #[test]
    fn test_require_payload_names_action() {
        let err = RawAction::new("REMOVE").require_payload().unwrap_err();
        assert_eq!(err.to_string(), "payload is required for REMOVE action");
    }
}
