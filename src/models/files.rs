//! Directory listing types returned by the rclone `operations/list` call.

use serde::{Deserialize, Serialize};

/// One entry of a directory listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileEntry {
    /// Path relative to the remote root
    pub path: String,
    /// Base name
    pub name: String,
    /// Size in bytes (-1 when unknown, e.g. directories)
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub mime_type: String,
    /// RFC 3339 modification time
    #[serde(default)]
    pub mod_time: String,
    #[serde(default)]
    pub is_dir: bool,
}

impl FileEntry {
    /// Size in bytes, or `None` for directories and unknown sizes.
    pub fn size_bytes(&self) -> Option<u64> {
        if self.is_dir {
            None
        } else {
            u64::try_from(self.size).ok()
        }
    }

    /// Date part of the modification time (`YYYY-MM-DD`).
    pub fn modified_date(&self) -> Option<&str> {
        self.mod_time.get(..10)
    }
}

/// Response body of `operations/list`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileListing {
    #[serde(default)]
    pub list: Vec<FileEntry>,
}

impl FileListing {
    /// Entries with directories first, then by name.
    pub fn sorted(&self) -> Vec<FileEntry> {
        let mut entries = self.list.clone();
        entries.sort_by(|a, b| {
            b.is_dir
                .cmp(&a.is_dir)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rclone_listing() {
        let json = r#"{
            "list": [
                {
                    "Path": "docs/readme.md",
                    "Name": "readme.md",
                    "Size": 1204,
                    "MimeType": "text/markdown",
                    "ModTime": "2024-03-01T10:20:30.000000000Z",
                    "IsDir": false
                },
                {
                    "Path": "docs/img",
                    "Name": "img",
                    "Size": -1,
                    "MimeType": "inode/directory",
                    "ModTime": "2024-02-11T08:00:00Z",
                    "IsDir": true
                }
            ]
        }"#;
        let listing: FileListing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.list.len(), 2);
        assert_eq!(listing.list[0].size_bytes(), Some(1204));
        assert_eq!(listing.list[0].modified_date(), Some("2024-03-01"));
        assert_eq!(listing.list[1].size_bytes(), None);
    }

    #[test]
    fn test_sorted_puts_directories_first() {
        let entry = |name: &str, is_dir| FileEntry {
            name: name.to_string(),
            is_dir,
            ..Default::default()
        };
        let listing = FileListing {
            list: vec![entry("b.txt", false), entry("Zeta", true), entry("a.txt", false), entry("alpha", true)],
        };
        let names: Vec<_> = listing.sorted().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["alpha", "Zeta", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_missing_list_is_empty() {
        let listing: FileListing = serde_json::from_str("{}").unwrap();
        assert!(listing.list.is_empty());
    }
}
