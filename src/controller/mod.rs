//! HTTP request handlers, access control and envelope rendering.

pub mod booking;
pub mod service;
pub mod team;

use serde::Deserialize;

/// Common pagination query parameters. Pages are 1-based.
#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    10
}

/// Query parameters for keyword search endpoints.
#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}
