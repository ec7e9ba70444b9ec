#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! calotrack: an offline calorie tracker for the terminal.
//!
//! Food and exercise activities are entered through a validated form,
//! folded into an [`state::ActivityState`] by a pure reducer, and
//! persisted as JSONL.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod storage;
pub mod tui;
