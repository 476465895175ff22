//! Payroll relay library.
//!
//! Reads payroll spreadsheets, sends each recipient a Slack notification,
//! and reports acknowledgements to a supervisory channel. Exposed as a
//! library so the binary, the CLI and the integration tests share one
//! implementation.
//!
//! # Flow
//!
//! - A spreadsheet arrives by HTTP upload (`POST /upload`) or is shared in
//!   Slack (`file_shared` event)
//! - [`services::Dispatcher`] notifies every eligible row and records each
//!   sent message in the [`tracker::AckTracker`]
//! - A recipient reacting with the acknowledgement emoji triggers a
//!   confirmation in the supervisory channel

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod slack;
pub mod spreadsheet;
pub mod state;
pub mod tracker;
