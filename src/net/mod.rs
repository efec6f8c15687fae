//! Networking modules for the portal REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` defines the transport seam, `task_api` and `api` are the resource
//! clients built on it, `config` resolves the server origin, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod config;
pub mod http;
pub mod task_api;
pub mod types;

#[cfg(test)]
pub(crate) mod fake_transport;
