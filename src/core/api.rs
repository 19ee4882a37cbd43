//! File listing queries against the rclone remote-control API.

use std::rc::Rc;

use serde::Serialize;

use crate::config::query::{FILES_KEY, FILES_STALE_TIME_MS};
use crate::config::LIST_ENDPOINT;
use crate::core::error::FetchError;
use crate::core::host::HostStore;
use crate::core::query::{QueryKey, QueryOptions};
use crate::models::{FileListing, PathRef};
use crate::utils::fetch::post_json;
use crate::utils::url::join_endpoint;

/// Builds query descriptors for directory listings.
pub trait FilesSource {
    fn files_query(&self, parts: &PathRef) -> QueryOptions<FileListing>;
}

/// Cache key for the listing of `parts`.
pub fn files_query_key(parts: &PathRef) -> QueryKey {
    vec![
        FILES_KEY.to_string(),
        parts.remote.clone(),
        parts.path.clone(),
    ]
}

/// Key prefix covering every listing of one remote.
pub fn remote_query_key(remote: &str) -> QueryKey {
    vec![FILES_KEY.to_string(), remote.to_string()]
}

/// Body of an `operations/list` call.
#[derive(Debug, PartialEq, Serialize)]
struct ListRequest {
    fs: String,
    remote: String,
}

impl From<&PathRef> for ListRequest {
    fn from(parts: &PathRef) -> Self {
        Self {
            fs: parts.fs(),
            remote: parts.path.clone(),
        }
    }
}

/// List a directory on the given host.
pub async fn list_files(host: &str, parts: &PathRef) -> Result<FileListing, FetchError> {
    let url = join_endpoint(host, LIST_ENDPOINT);
    post_json(&url, &ListRequest::from(parts)).await
}

/// [`FilesSource`] talking to the host from a [`HostStore`].
///
/// The host is read when the fetch runs, not when the descriptor is built.
#[derive(Clone)]
pub struct RcloneApi {
    host: Rc<dyn HostStore>,
}

impl RcloneApi {
    pub fn new(host: Rc<dyn HostStore>) -> Self {
        Self { host }
    }
}

impl FilesSource for RcloneApi {
    fn files_query(&self, parts: &PathRef) -> QueryOptions<FileListing> {
        let host = Rc::clone(&self.host);
        let parts = parts.clone();
        QueryOptions::new(files_query_key(&parts), move || {
            let host = host.get();
            let parts = parts.clone();
            async move {
                let host = host.ok_or(FetchError::MissingHost)?;
                list_files(&host, &parts).await
            }
        })
        .stale_time(FILES_STALE_TIME_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::host::MemoryHostStore;
    use crate::core::query::QueryClient;

    #[test]
    fn test_list_request_body() {
        let body = ListRequest::from(&PathRef::new("gdrive", "docs/2024"));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "fs": "gdrive:", "remote": "docs/2024" })
        );
    }

    #[test]
    fn test_query_keys() {
        let parts = PathRef::new("gdrive", "docs");
        assert_eq!(files_query_key(&parts), vec!["files", "gdrive", "docs"]);
        assert!(files_query_key(&parts).starts_with(&remote_query_key("gdrive")));
    }

    #[tokio::test]
    async fn test_missing_host_fails_without_network() {
        let api = RcloneApi::new(Rc::new(MemoryHostStore::default()));
        let client = QueryClient::new();
        let result = client
            .fetch_query(&api.files_query(&PathRef::new("fs", "")))
            .await;
        assert_eq!(result, Err(FetchError::MissingHost));
    }
}
