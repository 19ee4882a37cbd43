//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as FilePdf, LuChevronRight as ChevronRight, LuCircleAlert as Alert,
        LuFile as File, LuFileText as FileText, LuFolder as Folder, LuGlobe as Network,
        LuHardDrive as Remote, LuImage as FileImage, LuPencil as Edit,
        LuRefreshCw as Refresh,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsChevronRight as ChevronRight,
        BsExclamationTriangle as Alert, BsFileEarmark as File, BsFileEarmarkImage as FileImage,
        BsFileEarmarkPdf as FilePdf, BsFileEarmarkText as FileText, BsFolderFill as Folder,
        BsGlobe as Network, BsHddNetwork as Remote, BsPencil as Edit,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(REMOTE, Remote);
themed_icon!(NETWORK, Network);
themed_icon!(EDIT, Edit);
themed_icon!(REFRESH, Refresh);
themed_icon!(ALERT, Alert);
