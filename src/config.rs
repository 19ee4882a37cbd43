//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the layout header.
pub const APP_NAME: &str = "rcd-browser";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Host Configuration
// =============================================================================

/// localStorage key holding the backend host address.
pub const HOST_STORAGE_KEY: &str = "RCD_HOST";

/// Placeholder shown in the host form input.
pub const HOST_PLACEHOLDER: &str = "http://localhost:5572";

// =============================================================================
// Routing Configuration
// =============================================================================

/// Splat value the index route redirects to once a host is configured.
pub const DEFAULT_FILES_SPLAT: &str = "fs";

/// Search parameter carrying the originally requested URL back to the index.
pub const REDIRECT_PARAM: &str = "redirect";

/// Maximum redirect hops followed for a single navigation.
pub const MAX_REDIRECTS: usize = 4;

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// rclone remote-control endpoint used for directory listings.
pub const LIST_ENDPOINT: &str = "operations/list";

/// Query cache configuration.
pub mod query {
    /// Root key segment for file listing queries.
    pub const FILES_KEY: &str = "files";

    /// How long a cached file listing is considered fresh (milliseconds).
    pub const FILES_STALE_TIME_MS: f64 = 30_000.0;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
