//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`dom`] - Browser storage, hash navigation, and scrolling
//! - [`fetch`] - Network fetching with timeout
//! - [`format`] - Display formatting and clock access
//! - [`url`] - Host validation and same-origin checks

pub mod dom;
pub mod fetch;
pub mod format;
pub mod url;
