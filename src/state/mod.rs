//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain data structs that pages wrap in `RwSignal`s and share through Leptos
//! context, plus the framework-independent schedule settings store.

pub mod feedback;
pub mod notice;
pub mod schedule_settings;
pub mod session;
pub mod students;
