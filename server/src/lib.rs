//! Single-page web dashboard for the decluttarr container.
//!
//! # Features
//!
//! - Settings form backed by the compose document
//!		- declarative schema of recognized environment variables
//!		- deterministic merge of schema defaults with the persisted environment
//!		- normalized, order-stable environment list on save
//!	- Container lifecycle control (start/stop/restart/recreate)
//!	- Log tail with status polling
//!	- Connectivity checks against the configured *arr services

#![forbid(unsafe_code)]

pub mod compose;
pub mod container;
pub mod core;
pub mod prelude;
pub mod probe;
pub mod routes;
pub mod settings;

pub use crate::core::app::{App, AppBuilder};

// vim: ts=4
