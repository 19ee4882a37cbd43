//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`AppRoute`], [`Location`] - Hash-based navigation
//! - [`PathRef`], [`extract_path_parts`] - Splitting a splat into remote and path
//! - [`FileEntry`], [`FileListing`] - rclone directory listings

mod files;
mod path;
mod route;

pub use files::{FileEntry, FileListing};
pub use path::{PathRef, extract_path_parts};
pub use route::{AppRoute, Location};
