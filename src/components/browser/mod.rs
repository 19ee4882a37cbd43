//! File browser UI components.
//!
//! Components:
//! - [`FileBrowser`] - Main view for a files route
//! - [`FileList`] - List of entries in the current directory
//! - [`PathBar`] - Breadcrumbs for the current remote and path

#[allow(clippy::module_inception)]
mod browser;
mod file_list;
mod pathbar;

pub use browser::FileBrowser;
pub use file_list::FileList;
pub use pathbar::PathBar;
