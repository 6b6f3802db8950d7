//! Settings subsystem
//!
//! # Architecture
//!
//! - **Types** (`types.rs`): setting categories, value types, definitions
//! - **Registry** (`registry.rs`): the immutable, ordered schema of recognized keys
//! - **Form** (`form.rs`): decoding of the flat HTML form submission
//! - **Reconcile** (`reconcile.rs`): merge of schema against persisted environment
//!   and of submissions back into an environment list
//! - **Handler** (`handler.rs`): dashboard rendering and save endpoint
//!
//! The registry is process-wide immutable state; every request builds its own
//! `EffectiveConfiguration` from it, so nothing leaks across requests.

pub mod form;
pub mod handler;
pub mod reconcile;
pub mod registry;
pub mod types;

pub use reconcile::{EffectiveConfiguration, EffectiveSetting};
pub use types::{Category, SettingDefinition, ValueType};

// vim: ts=4
