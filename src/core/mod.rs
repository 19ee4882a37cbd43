//! Core logic for the file browser, independent of the view layer.
//!
//! This module provides:
//! - [`router`] - Route tree, guards, loader, and [`Navigator`]
//! - [`query`] - [`QueryClient`] cache of async results
//! - [`api`] - rclone directory listing queries
//! - [`host`] - [`HostStore`] persistence of the backend host
//! - [`lazy`] - Memoized async factories

pub mod api;
pub mod error;
pub mod host;
pub mod lazy;
pub mod query;
pub mod router;
pub mod scroll;

pub use api::{FilesSource, RcloneApi};
pub use host::{HostStore, LocalHostStore};
pub use lazy::Lazy;
pub use query::QueryClient;
pub use router::{Navigation, Navigator, RouteTree, RouterContext};
