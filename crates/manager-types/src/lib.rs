//! Shared types for the decluttarr-manager dashboard.
//!
//! This crate contains the error taxonomy and the container adapter trait
//! that are shared between the server crate and adapter implementations.
//! Extracting these into a separate crate lets adapter crates compile
//! against the same surface without depending on the server.

pub mod container_adapter;
pub mod error;
pub mod prelude;

// vim: ts=4
