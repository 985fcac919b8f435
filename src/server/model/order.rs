use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub(crate) const ORDER_CREATED_MSG: &str = "Order created";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
}

type OrderId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum OrderStatus {
    Paid,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateOrderResponse {
    pub message: String,
    /// the request body, echoed back untouched
    pub data: Map<String, Value>,
}

impl CreateOrderResponse {
    pub fn created(data: Map<String, Value>) -> Self {
        Self {
            message: ORDER_CREATED_MSG.to_string(),
            data,
        }
    }
}
