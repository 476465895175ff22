//! Core types for Payroll Relay.
//!
//! This module provides type-safe wrappers for the payroll domain.

pub mod handle;
pub mod locale;
pub mod row;

pub use handle::MessageHandle;
pub use locale::{Locale, LocaleError};
pub use row::{ColumnMap, PayrollEntry, Row, parse_count};
