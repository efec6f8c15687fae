//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and form widgets while reading/writing
//! shared state from Leptos context providers or props.

pub mod notice_toast;
pub mod page_layout;
pub mod rating_stars;
pub mod user_search;
