//! Activity persistence (JSONL).
//!
//! The activity list is stored as a single `activities.jsonl` file with one
//! [`Activity`](crate::model::Activity) per line, in list order.

mod error;
mod manager;

pub use error::StorageError;
pub use manager::ActivityManager;
