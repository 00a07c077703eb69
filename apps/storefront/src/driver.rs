//! # Command Driver
//!
//! Line-oriented JSON front end: one request per input line, one response
//! per output line.
//!
//! ```text
//! stdin  → {"command":"add_to_cart","sku":"item0001"}
//! stdout ← {"ok":{"totalItems":1,"totalPrice":"$9.99","cart":[...]}}
//!
//! stdin  → {"command":"dispatch","action":{"type":"UNKNOWN"}}
//! stdout ← {"error":{"code":"UNRECOGNIZED_ACTION","message":"..."}}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use storefront_core::RawAction;
use tracing::debug;

use crate::commands;
use crate::error::ApiError;
use crate::state::{CartContext, CatalogState, ConfigState, CounterStore};

/// A request from the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Request {
    ListCatalog,
    GetCart,
    AddToCart { sku: String },
    Dispatch { action: RawAction },
    SubmitOrder,
    GetCounter,
    DispatchCounter { action: RawAction },
    GetConfig,
}

/// One response line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Response {
    Ok(Value),
    Error(ApiError),
}

impl From<Result<Value, ApiError>> for Response {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(value) => Response::Ok(value),
            Err(err) => Response::Error(err),
        }
    }
}

/// Every state handle, created once at startup.
#[derive(Debug, Clone)]
pub struct Driver {
    catalog: CatalogState,
    cart: CartContext,
    counter: CounterStore,
    config: ConfigState,
}

impl Driver {
    pub fn new(config: ConfigState, catalog: CatalogState) -> Self {
        Driver {
            cart: CartContext::new(config.currency_symbol.clone()),
            counter: CounterStore::new(),
            catalog,
            config,
        }
    }

    /// Routes a request to its command.
    pub fn handle(&self, request: Request) -> Result<Value, ApiError> {
        match request {
            Request::ListCatalog => to_value(commands::catalog::list_catalog(&self.catalog)),
            Request::GetCart => to_value(commands::cart::get_cart(&self.cart)),
            Request::AddToCart { sku } => {
                to_value(commands::cart::add_to_cart(&self.catalog, &self.cart, &sku)?)
            }
            Request::Dispatch { action } => to_value(commands::cart::dispatch(&self.cart, action)?),
            Request::SubmitOrder => to_value(commands::cart::submit_order(&self.cart)?),
            Request::GetCounter => to_value(commands::counter::get_counter(&self.counter)),
            Request::DispatchCounter { action } => {
                to_value(commands::counter::dispatch_counter(&self.counter, action)?)
            }
            Request::GetConfig => to_value(commands::config::get_config(&self.config)),
        }
    }

    /// Parses and handles one input line.
    pub fn handle_line(&self, line: &str) -> Response {
        debug!(line, "request");
        serde_json::from_str::<Request>(line)
            .map_err(ApiError::from)
            .and_then(|request| self.handle(request))
            .into()
    }
}

fn to_value<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use serde_json::json;

    fn driver() -> Driver {
        Driver::new(ConfigState::default(), CatalogState::builtin().unwrap())
    }

    fn ok(response: Response) -> Value {
        match response {
            Response::Ok(value) => value,
            Response::Error(err) => panic!("unexpected error: {}", err),
        }
    }

    fn err(response: Response) -> ApiError {
        match response {
            Response::Error(err) => err,
            Response::Ok(value) => panic!("unexpected success: {}", value),
        }
    }

    #[test]
    fn test_list_catalog() {
        let value = ok(driver().handle_line(r#"{"command":"list_catalog"}"#));
        assert_eq!(value[1], json!({ "sku": "item0002", "name": "Premium Widget", "price": 1999 }));
    }

    #[test]
    fn test_shopping_session() {
        let d = driver();

        d.handle_line(r#"{"command":"dispatch","action":{"type":"ADD","payload":{"sku":"item0003","name":"Deluxe Widget","price":2999}}}"#);
        d.handle_line(r#"{"command":"add_to_cart","sku":"item0001"}"#);
        let cart = ok(d.handle_line(r#"{"command":"add_to_cart","sku":"item0002"}"#));

        assert_eq!(cart["totalItems"], 3);
        assert_eq!(cart["totalPrice"], "$59.97");
        let skus: Vec<&str> = cart["cart"]
            .as_array()
            .unwrap()
            .iter()
            .map(|l| l["sku"].as_str().unwrap())
            .collect();
        assert_eq!(skus, vec!["item0001", "item0002", "item0003"]);

        let receipt = ok(d.handle_line(r#"{"command":"submit_order"}"#));
        assert_eq!(receipt["totalItems"], 3);
        assert_eq!(receipt["total"], 5997);

        let cart = ok(d.handle_line(r#"{"command":"get_cart"}"#));
        assert_eq!(cart, json!({ "totalItems": 0, "totalPrice": "$0.00", "cart": [] }));
    }

    #[test]
    fn test_extreme_quantity_keeps_serving() {
        let d = driver();
        d.handle_line(r#"{"command":"add_to_cart","sku":"item0001"}"#);
        ok(d.handle_line(
            r#"{"command":"dispatch","action":{"type":"QUANTITY","payload":{"sku":"item0001","qty":9223372036854775807}}}"#,
        ));
        d.handle_line(r#"{"command":"add_to_cart","sku":"item0001"}"#);

        let cart = ok(d.handle_line(r#"{"command":"get_cart"}"#));
        assert_eq!(cart["totalItems"], i64::MAX);
        assert_eq!(cart["totalPrice"], "$92,233,720,368,547,758.07");
        assert_eq!(cart["cart"][0]["qty"], i64::MAX);

        let receipt = ok(d.handle_line(r#"{"command":"submit_order"}"#));
        assert_eq!(receipt["total"], i64::MAX);
    }

    #[test]
    fn test_unknown_action_type() {
        let d = driver();
        let e = err(d.handle_line(r#"{"command":"dispatch","action":{"type":"UNKNOWN"}}"#));
        assert_eq!(e.code, ErrorCode::UnrecognizedAction);
    }

    #[test]
    fn test_malformed_request() {
        let d = driver();
        assert_eq!(err(d.handle_line("not json")).code, ErrorCode::ValidationError);
        assert_eq!(
            err(d.handle_line(r#"{"command":"launch_rockets"}"#)).code,
            ErrorCode::ValidationError
        );

        // The driver keeps working afterwards.
        ok(d.handle_line(r#"{"command":"get_cart"}"#));
    }

    #[test]
    fn test_counter_commands() {
        let d = driver();
        d.handle_line(r#"{"command":"dispatch_counter","action":{"type":"INCREMENT"}}"#);
        let value = ok(d.handle_line(r#"{"command":"get_counter"}"#));
        assert_eq!(value, json!({ "count": 1 }));
    }

    #[test]
    fn test_response_shape() {
        let response = Response::Error(ApiError::validation("bad"));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            json!({ "error": { "code": "VALIDATION_ERROR", "message": "bad" } })
        );
    }
}
