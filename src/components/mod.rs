//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`layout`] - Root layout shell with scroll restoration
//! - [`host_form`] - Backend host entry form
//! - [`browser`] - File browser UI
//! - [`error_view`] - Error display for route failures
//! - [`link`] - Route links with hover preloading
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod error_view;
pub mod host_form;
pub mod icons;
pub mod layout;
pub mod link;
pub mod router;

pub use router::AppRouter;
