use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use crate::data::{service::ServiceStore, EntityFields, LocalizedStore};

mod search;
mod translations;
