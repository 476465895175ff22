//! Payroll Relay Core - Shared types and message templates.
//!
//! The pieces of the relay that do no I/O, shared by:
//! - `relay` - HTTP server and Slack event listeners
//! - `cli` - Offline preview and configuration checks
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no file access,
//! no HTTP clients. Spreadsheet parsing and Slack calls live in the `relay`
//! crate; everything they need to agree on lives here.
//!
//! # Modules
//!
//! - [`types`] - Rows, column mappings, payroll entries, message handles, locales
//! - [`compose`] - Per-locale notification templates and the message composer

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod compose;
pub mod types;

pub use compose::{Composer, Quantity, Templates, compose, templates};
pub use types::*;
