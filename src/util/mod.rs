//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and state
//! logic to improve reuse and testability.

pub mod routes;
pub mod storage;
pub mod timezone;
