//! Response envelope shared by every endpoint.
//!
//! All responses carry `{status: "true"|"false", data?, message?, pagination?}`.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u64,
    pub last_page: u64,
    pub per_page: u64,
    pub total: u64,
}

impl Pagination {
    /// 1-based pagination facts for a page of `total` rows.
    pub fn new(current_page: u64, per_page: u64, total: u64) -> Self {
        let last_page = if per_page == 0 {
            1
        } else {
            (total.div_ceil(per_page)).max(1)
        };
        Self {
            current_page,
            last_page,
            per_page,
            total,
        }
    }
}

#[derive(Serialize, ToSchema, Debug)]
pub struct Envelope {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub message: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl Envelope {
    pub fn data(data: Value) -> Self {
        Self {
            status: "true".to_string(),
            data: Some(data),
            message: None,
            pagination: None,
        }
    }

    pub fn page(data: Value, pagination: Pagination) -> Self {
        Self {
            status: "true".to_string(),
            data: Some(data),
            message: None,
            pagination: Some(pagination),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: "true".to_string(),
            data: None,
            message: Some(Value::String(message.into())),
            pagination: None,
        }
    }

    pub fn fail(message: Value) -> Self {
        Self {
            status: "false".to_string(),
            data: None,
            message: Some(message),
            pagination: None,
        }
    }
}
