#![doc(test(attr(deny(warnings))))]

//! Expense Tracker records personal expenses in a local JSON store and offers
//! listing, editing, per-category and per-month summaries through an
//! interactive menu shell.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod storage;
pub mod utils;

/// Initializes global tracing and emits a startup info log. Safe to call repeatedly.
pub fn init() {
    utils::init_tracing();
}
