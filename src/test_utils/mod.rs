#![allow(missing_docs)]

pub(crate) mod expense;
pub(crate) mod http;
pub(crate) mod store;

pub(crate) use expense::{expense, expense_in_category};
pub(crate) use http::{assert_content_type, assert_status_ok, must_get_json};
pub(crate) use store::{FailingStore, SpyStore, StoreCall};
