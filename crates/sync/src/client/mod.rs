//! Client for the repository-contents API.
//!
//! # Architecture
//!
//! Every public operation bottoms out in one request primitive per verb:
//! [`SyncClient::get_contents`] / [`SyncClient::get_dir`] for reads,
//! [`SyncClient::put_contents`] for writes, and a repository-metadata
//! read. There are no retries, no timeouts beyond reqwest's defaults and
//! no parallel requests; each operation is a short sequential chain.

use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::instrument;

use crate::config::{ConfigError, SyncConfig};
use crate::error::SyncError;

mod bulk;
mod categories;
mod contacts;
mod documents;
mod orders;
mod products;
mod settings;

pub use bulk::{BackupEntry, ConnectionStatus, RepoInfo};
pub use documents::PutOutcome;

const API_VERSION: &str = "2022-11-28";
const CLIENT_USER_AGENT: &str = concat!("breadbox-sync/", env!("CARGO_PKG_VERSION"));

/// Client for a single data repository.
///
/// Cheap to clone; all state lives behind an `Arc`.
#[derive(Clone)]
pub struct SyncClient {
    inner: Arc<SyncClientInner>,
}

struct SyncClientInner {
    client: reqwest::Client,
    owner: String,
    repo: String,
    api_base: String,
}

/// A file read from the contents endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ContentFile {
    /// Content hash, required on the next conditional write.
    pub sha: String,
    /// Base64 body, possibly split across lines.
    #[serde(default)]
    pub content: String,
}

/// One entry of a directory listing.
#[derive(Debug, Deserialize)]
pub(crate) struct DirEntry {
    pub name: String,
    pub path: String,
    pub size: u64,
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Body of a contents write.
#[derive(Debug, Serialize)]
pub(crate) struct PutRequest {
    /// Commit message recorded by the remote.
    pub message: String,
    /// Base64-encoded document body.
    pub content: String,
    /// Expected content hash; absent on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

/// Response of a contents write.
#[derive(Debug, Deserialize)]
pub(crate) struct PutResponse {
    #[serde(default)]
    pub content: Option<PutResponseContent>,
    #[serde(default)]
    pub commit: Option<PutResponseCommit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PutResponseContent {
    pub sha: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PutResponseCommit {
    pub sha: String,
}

/// Repository metadata from the repository root endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RepoMetadata {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    pub default_branch: String,
}

/// Error body the remote attaches to non-success responses.
#[derive(Debug, Deserialize)]
struct RemoteErrorBody {
    message: String,
}

impl SyncClient {
    /// Create a new sync client for the configured repository.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the access token cannot be used as an
    /// HTTP header value.
    pub fn new(config: &SyncConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        let mut auth = HeaderValue::from_str(&format!(
            "Bearer {}",
            config.token.expose_secret()
        ))
        .map_err(|e| {
            ConfigError::InvalidEnvVar("BREADBOX_GITHUB_TOKEN".to_string(), e.to_string())
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("BREADBOX_API_BASE".to_string(), e.to_string())
            })?;

        Ok(Self {
            inner: Arc::new(SyncClientInner {
                client,
                owner: config.owner.clone(),
                repo: config.repo.clone(),
                api_base: config.api_base.clone(),
            }),
        })
    }

    /// The account owning the data repository.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.inner.owner
    }

    /// The data repository name.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.inner.repo
    }

    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.inner.api_base, self.inner.owner, self.inner.repo, path
        )
    }

    fn repo_url(&self) -> String {
        format!(
            "{}/repos/{}/{}",
            self.inner.api_base, self.inner.owner, self.inner.repo
        )
    }

    /// Read a single file's metadata and base64 body.
    #[instrument(skip(self))]
    pub(crate) async fn get_contents(&self, path: &str) -> Result<ContentFile, SyncError> {
        let response = self
            .inner
            .client
            .get(self.contents_url(path))
            .send()
            .await?;
        decode_response(response, None).await
    }

    /// List a directory; entries for files carry name, path and size.
    #[instrument(skip(self))]
    pub(crate) async fn get_dir(&self, path: &str) -> Result<Vec<DirEntry>, SyncError> {
        let response = self
            .inner
            .client
            .get(self.contents_url(path))
            .send()
            .await?;
        decode_response(response, None).await
    }

    /// Create or update a file.
    ///
    /// The same verb serves both branches; the presence of `sha` in the
    /// request decides between create and conditional update. A rejected
    /// condition (HTTP 409) becomes [`SyncError::Conflict`].
    #[instrument(skip(self, request), fields(update = request.sha.is_some()))]
    pub(crate) async fn put_contents(
        &self,
        path: &str,
        request: &PutRequest,
    ) -> Result<PutResponse, SyncError> {
        let response = self
            .inner
            .client
            .put(self.contents_url(path))
            .json(request)
            .send()
            .await?;
        decode_response(response, Some(path)).await
    }

    /// Read repository metadata from the repository root endpoint.
    #[instrument(skip(self))]
    pub(crate) async fn repo_metadata(&self) -> Result<RepoMetadata, SyncError> {
        let response = self.inner.client.get(self.repo_url()).send().await?;
        decode_response(response, None).await
    }
}

/// Turn a response into `T`, or into the typed error for its status.
///
/// The error message prefers the server-supplied `message` field; when the
/// body is not the expected error shape the HTTP status text is used.
/// When `conflict_path` is set, a 409 maps to [`SyncError::Conflict`].
async fn decode_response<T: DeserializeOwned>(
    response: reqwest::Response,
    conflict_path: Option<&str>,
) -> Result<T, SyncError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let status_text = status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string();
    let message = response
        .json::<RemoteErrorBody>()
        .await
        .map_or(status_text, |body| body.message);

    if status == reqwest::StatusCode::CONFLICT
        && let Some(path) = conflict_path
    {
        return Err(SyncError::Conflict {
            path: path.to_string(),
            message,
        });
    }

    Err(SyncError::Remote {
        status: status.as_u16(),
        message,
    })
}
