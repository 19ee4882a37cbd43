//! Splitting a files-route splat into remote and path.

/// A file location on the backend: remote name plus path inside it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PathRef {
    /// rclone remote name (first splat segment)
    pub remote: String,
    /// Path inside the remote, without leading or trailing slashes
    pub path: String,
}

impl PathRef {
    pub fn new(remote: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            remote: remote.into(),
            path: path.into(),
        }
    }

    /// rclone `fs` argument for this remote (e.g. `gdrive:`).
    pub fn fs(&self) -> String {
        format!("{}:", self.remote)
    }

    /// Path segments inside the remote.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }
}

/// Split a splat like `remote1/a/b` into `("remote1", "a/b")`.
///
/// Empty segments are dropped, so `"/remote1//a/"` gives `("remote1", "a")`.
pub fn extract_path_parts(splat: &str) -> PathRef {
    let mut segments = splat.split('/').filter(|s| !s.is_empty());
    let remote = segments.next().unwrap_or_default();
    let path = segments.collect::<Vec<_>>().join("/");
    PathRef::new(remote, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_path_parts() {
        assert_eq!(
            extract_path_parts("remote1/a/b"),
            PathRef::new("remote1", "a/b")
        );
        assert_eq!(extract_path_parts("fs"), PathRef::new("fs", ""));
        assert_eq!(extract_path_parts(""), PathRef::new("", ""));
    }

    #[test]
    fn test_extract_path_parts_normalizes_slashes() {
        assert_eq!(
            extract_path_parts("/remote1//a/b/"),
            PathRef::new("remote1", "a/b")
        );
    }

    #[test]
    fn test_fs_argument() {
        assert_eq!(PathRef::new("gdrive", "docs").fs(), "gdrive:");
        assert_eq!(
            PathRef::new("gdrive", "docs/2024").segments().collect::<Vec<_>>(),
            vec!["docs", "2024"]
        );
    }
}
