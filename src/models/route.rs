//! Hash-based routing types.
//!
//! URL format: `#/` for the host form, `#/<remote>/<path...>` for the file
//! browser. Path segments are percent-encoded in the hash and decoded here.

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use url::form_urlencoded;

use crate::config::{DEFAULT_FILES_SPLAT, REDIRECT_PARAM};
use crate::models::path::{PathRef, extract_path_parts};
use crate::utils::dom;

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A matched and validated application route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Host form: `#/`, optionally carrying `?redirect=<href>`
    Index { redirect: Option<String> },
    /// File browser: `#/<splat>`
    Files { splat: String },
}

impl AppRoute {
    pub fn index() -> Self {
        Self::Index { redirect: None }
    }

    pub fn files(splat: impl Into<String>) -> Self {
        Self::Files {
            splat: splat.into(),
        }
    }

    /// Files route the index redirects to once a host is set.
    pub fn default_files() -> Self {
        Self::files(DEFAULT_FILES_SPLAT)
    }

    /// Convert route to URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Index { redirect: None } => "#/".to_string(),
            Self::Index {
                redirect: Some(href),
            } => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair(REDIRECT_PARAM, href)
                    .finish();
                format!("#/?{}", query)
            }
            Self::Files { splat } => {
                let encoded: Vec<String> = splat
                    .split('/')
                    .filter(|s| !s.is_empty())
                    .map(|s| utf8_percent_encode(s, SEGMENT).to_string())
                    .collect();
                format!("#/{}", encoded.join("/"))
            }
        }
    }

    /// Remote and path for a files route.
    pub fn path_ref(&self) -> Option<PathRef> {
        match self {
            Self::Files { splat } => Some(extract_path_parts(splat)),
            Self::Index { .. } => None,
        }
    }

    /// Child route one level deeper. Index routes are returned unchanged.
    pub fn join(&self, name: &str) -> Self {
        match self {
            Self::Files { splat } => {
                let base = splat.trim_end_matches('/');
                Self::files(format!("{}/{}", base, name.trim_matches('/')))
            }
            Self::Index { .. } => self.clone(),
        }
    }

    /// Location of this route on the page at `page_href`.
    pub fn location_on(&self, page_href: &str) -> Location {
        let base = page_href.split_once('#').map_or(page_href, |(b, _)| b);
        Location::parse(&format!("{}{}", base, self.to_hash()))
    }

    /// Navigate to this route, adding a history entry.
    pub fn push(&self) {
        dom::set_hash(&self.to_hash());
    }

    /// Navigate to this route, replacing the current history entry.
    pub fn replace(&self) {
        dom::replace_hash(&self.to_hash());
    }
}

/// Parsed view of the current URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    /// Full URL as seen by the browser
    pub href: String,
    /// Logical route path from the hash, decoded, always starting with `/`
    pub path: String,
    /// Decoded search parameters from the hash
    pub search: Vec<(String, String)>,
}

impl Location {
    /// Parse a full URL. Routing state lives in the fragment.
    pub fn parse(href: &str) -> Self {
        let hash = href.split_once('#').map(|(_, h)| h).unwrap_or_default();
        let (raw_path, raw_query) = hash.split_once('?').unwrap_or((hash, ""));

        let segments: Vec<String> = raw_path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
            .collect();

        let search = form_urlencoded::parse(raw_query.as_bytes())
            .into_owned()
            .collect();

        Self {
            href: href.to_string(),
            path: format!("/{}", segments.join("/")),
            search,
        }
    }

    /// Get current location from browser URL.
    pub fn current() -> Self {
        Self::parse(&dom::get_href())
    }

    /// First value for a search parameter.
    pub fn search_param(&self, key: &str) -> Option<&str> {
        self.search
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Key used to remember per-location state such as scroll offsets.
    pub fn key(&self) -> &str {
        self.href
            .split_once('#')
            .map(|(_, h)| h)
            .unwrap_or(self.path.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "http://localhost:8080/";

    fn at(hash: &str) -> Location {
        Location::parse(&format!("{}{}", ORIGIN, hash))
    }

    #[test]
    fn test_location_parsing() {
        assert_eq!(at("").path, "/");
        assert_eq!(at("#").path, "/");
        assert_eq!(at("#/").path, "/");
        assert_eq!(at("#/fs").path, "/fs");
        assert_eq!(at("#/gdrive/docs/2024/").path, "/gdrive/docs/2024");
    }

    #[test]
    fn test_location_decodes_segments_and_search() {
        let loc = at("#/gdrive/my%20docs?redirect=http%3A%2F%2Fx%2F%23%2Fa&x=1");
        assert_eq!(loc.path, "/gdrive/my docs");
        assert_eq!(loc.search_param("redirect"), Some("http://x/#/a"));
        assert_eq!(loc.search_param("x"), Some("1"));
        assert_eq!(loc.search_param("missing"), None);
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::index().to_hash(), "#/");
        assert_eq!(AppRoute::default_files().to_hash(), "#/fs");
        assert_eq!(
            AppRoute::files("gdrive/my docs/a#b").to_hash(),
            "#/gdrive/my%20docs/a%23b"
        );
    }

    #[test]
    fn test_redirect_survives_hash_encoding() {
        let href = "http://localhost:8080/#/gdrive/my%20docs?x=1";
        let route = AppRoute::Index {
            redirect: Some(href.to_string()),
        };
        let loc = at(&route.to_hash());
        assert_eq!(loc.path, "/");
        assert_eq!(loc.search_param(REDIRECT_PARAM), Some(href));
    }

    #[test]
    fn test_join_and_path_ref() {
        let route = AppRoute::files("gdrive/docs");
        assert_eq!(route.join("2024"), AppRoute::files("gdrive/docs/2024"));
        assert_eq!(
            route.path_ref(),
            Some(PathRef::new("gdrive", "docs"))
        );
        assert_eq!(AppRoute::index().path_ref(), None);
        assert_eq!(AppRoute::index().join("x"), AppRoute::index());
    }

    #[test]
    fn test_location_key() {
        assert_eq!(at("#/fs/a").key(), "/fs/a");
        assert_eq!(Location::parse("http://h/").key(), "/");
    }
}
