//! Integration tests for Breadbox.
//!
//! The sync client only ever speaks to the repository-contents endpoint,
//! so the tests run against [`FakeContentsApi`]: an in-process axum server
//! implementing the handful of routes the client uses (file GET/PUT,
//! directory listing, repository metadata) over an in-memory file map.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p breadbox-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use serde_json::{Value, json};
use sha2::{Digest, Sha256};

use breadbox_sync::{SyncClient, SyncConfig};

/// Owner name the fake accepts.
pub const OWNER: &str = "breadbox-data";
/// Repository name the fake accepts.
pub const REPO: &str = "bakery-site";
/// Token the fake accepts as a bearer credential.
pub const TOKEN: &str = "ghp_x9K2mQv81LpTzWf4";

/// A file stored by the fake, as the contents endpoint represents it.
#[derive(Debug, Clone)]
struct StoredFile {
    /// Base64 body, unwrapped.
    content: String,
    /// Content hash, required on conditional writes.
    sha: String,
}

struct ApiState {
    files: Mutex<BTreeMap<String, StoredFile>>,
    put_count: AtomicUsize,
    reject_writes: AtomicBool,
    reject_auth: AtomicBool,
}

/// In-process fake of the repository-contents API.
pub struct FakeContentsApi {
    state: Arc<ApiState>,
    addr: SocketAddr,
}

impl FakeContentsApi {
    /// Bind on an ephemeral port and start serving.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot bind; tests have no way to recover.
    #[allow(clippy::unwrap_used)]
    pub async fn spawn() -> Self {
        init_tracing();

        let state = Arc::new(ApiState {
            files: Mutex::new(BTreeMap::new()),
            put_count: AtomicUsize::new(0),
            reject_writes: AtomicBool::new(false),
            reject_auth: AtomicBool::new(false),
        });

        let app = Router::new()
            .route("/repos/{owner}/{repo}", get(repo_metadata))
            .route(
                "/repos/{owner}/{repo}/contents/{*path}",
                get(get_contents).put(put_contents),
            )
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { state, addr }
    }

    /// Base URL to point a client at.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// A config targeting this fake.
    ///
    /// # Panics
    ///
    /// Panics if the baked-in test credentials fail validation.
    #[must_use]
    #[allow(clippy::unwrap_used, clippy::missing_panics_doc)]
    pub fn config(&self) -> SyncConfig {
        SyncConfig::new(OWNER, REPO, TOKEN)
            .unwrap()
            .with_api_base(self.base_url())
    }

    /// A sync client targeting this fake.
    ///
    /// # Panics
    ///
    /// Panics if client construction fails.
    #[must_use]
    #[allow(clippy::unwrap_used, clippy::missing_panics_doc)]
    pub fn client(&self) -> SyncClient {
        SyncClient::new(&self.config()).unwrap()
    }

    /// Number of writes the fake has accepted or rejected.
    #[must_use]
    pub fn put_count(&self) -> usize {
        self.state.put_count.load(Ordering::SeqCst)
    }

    /// When set, every write is rejected with a conflict response.
    pub fn set_reject_writes(&self, reject: bool) {
        self.state.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// When set, every request is rejected with 401 Bad credentials.
    pub fn set_reject_auth(&self, reject: bool) {
        self.state.reject_auth.store(reject, Ordering::SeqCst);
    }

    /// Whether a file exists at `path`.
    ///
    /// # Panics
    ///
    /// Panics if the file map lock is poisoned.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.state.files.lock().unwrap().contains_key(path)
    }

    /// Decode the stored document at `path`, if any.
    ///
    /// # Panics
    ///
    /// Panics if the stored body is not base64-wrapped JSON.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn document(&self, path: &str) -> Option<Value> {
        let files = self.state.files.lock().unwrap();
        files.get(path).map(|file| {
            let bytes = BASE64.decode(&file.content).unwrap();
            serde_json::from_slice(&bytes).unwrap()
        })
    }

    /// Preload a document, bypassing the HTTP surface.
    ///
    /// # Panics
    ///
    /// Panics if the file map lock is poisoned.
    #[allow(clippy::unwrap_used)]
    pub fn seed_document(&self, path: &str, value: &Value) {
        let text = serde_json::to_string_pretty(value).unwrap();
        let content = BASE64.encode(&text);
        let sha = content_sha(&content);
        self.state
            .files
            .lock()
            .unwrap()
            .insert(path.to_string(), StoredFile { content, sha });
    }
}

/// Initialize test logging once; respects `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn content_sha(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    // Truncate to 40 hex chars, the width of the real API's sha tokens.
    hex::encode(digest)[..40].to_string()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, axum::Json(json!({"message": "Not Found"}))).into_response()
}

fn bad_credentials() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        axum::Json(json!({"message": "Bad credentials"})),
    )
        .into_response()
}

fn check_request(
    state: &ApiState,
    headers: &HeaderMap,
    owner: &str,
    repo: &str,
) -> Result<(), Response> {
    if state.reject_auth.load(Ordering::SeqCst) {
        return Err(bad_credentials());
    }
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"));
    if !authorized {
        return Err(bad_credentials());
    }
    if owner != OWNER || repo != REPO {
        return Err(not_found());
    }
    Ok(())
}

/// Wrap base64 at 60 columns the way the real endpoint does.
fn wrap_base64(content: &str) -> String {
    let mut wrapped = String::with_capacity(content.len() + content.len() / 60 + 1);
    for (i, c) in content.chars().enumerate() {
        if i > 0 && i % 60 == 0 {
            wrapped.push('\n');
        }
        wrapped.push(c);
    }
    wrapped.push('\n');
    wrapped
}

async fn repo_metadata(
    State(state): State<Arc<ApiState>>,
    Path((owner, repo)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = check_request(&state, &headers, &owner, &repo) {
        return response;
    }
    axum::Json(json!({
        "name": REPO,
        "full_name": format!("{OWNER}/{REPO}"),
        "description": "Bakery site data",
        "html_url": format!("https://github.example/{OWNER}/{REPO}"),
        "default_branch": "main"
    }))
    .into_response()
}

#[allow(clippy::unwrap_used, clippy::significant_drop_tightening)]
async fn get_contents(
    State(state): State<Arc<ApiState>>,
    Path((owner, repo, path)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = check_request(&state, &headers, &owner, &repo) {
        return response;
    }

    let files = state.files.lock().unwrap();
    if let Some(file) = files.get(&path) {
        let size = BASE64.decode(&file.content).map(|b| b.len()).unwrap_or(0);
        let name = path.rsplit('/').next().unwrap_or(&path).to_string();
        let download_url = format!("https://raw.github.example/{OWNER}/{REPO}/main/{path}");
        return axum::Json(json!({
            "name": name,
            "path": path,
            "sha": file.sha,
            "size": size,
            "content": wrap_base64(&file.content),
            "encoding": "base64",
            "download_url": download_url
        }))
        .into_response();
    }

    // Directory listing: direct children of `path`.
    let prefix = format!("{path}/");
    let entries: Vec<Value> = files
        .iter()
        .filter(|(key, _)| {
            key.starts_with(&prefix) && !key[prefix.len()..].contains('/')
        })
        .map(|(key, file)| {
            let size = BASE64.decode(&file.content).map(|b| b.len()).unwrap_or(0);
            json!({
                "name": &key[prefix.len()..],
                "path": key,
                "sha": file.sha,
                "size": size,
                "type": "file",
                "download_url": format!("https://raw.github.example/{OWNER}/{REPO}/main/{key}")
            })
        })
        .collect();

    if entries.is_empty() {
        return not_found();
    }
    axum::Json(entries).into_response()
}

#[derive(Debug, Deserialize)]
struct PutBody {
    #[allow(dead_code)]
    message: String,
    content: String,
    #[serde(default)]
    sha: Option<String>,
}

#[allow(clippy::unwrap_used, clippy::significant_drop_tightening)]
async fn put_contents(
    State(state): State<Arc<ApiState>>,
    Path((owner, repo, path)): Path<(String, String, String)>,
    headers: HeaderMap,
    axum::Json(body): axum::Json<PutBody>,
) -> Response {
    if let Err(response) = check_request(&state, &headers, &owner, &repo) {
        return response;
    }

    state.put_count.fetch_add(1, Ordering::SeqCst);

    if state.reject_writes.load(Ordering::SeqCst) {
        return (
            StatusCode::CONFLICT,
            axum::Json(json!({"message": format!("{path} does not match the expected sha")})),
        )
            .into_response();
    }

    let mut files = state.files.lock().unwrap();
    let existing = files.get(&path).cloned();
    let created = match (&existing, &body.sha) {
        // Conditional update against the current hash.
        (Some(file), Some(sha)) if *sha == file.sha => false,
        (Some(_), Some(_)) | (Some(_), None) => {
            let status = if body.sha.is_some() {
                StatusCode::CONFLICT
            } else {
                StatusCode::UNPROCESSABLE_ENTITY
            };
            return (
                status,
                axum::Json(json!({"message": format!("{path} does not match the expected sha")})),
            )
                .into_response();
        }
        (None, Some(_)) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                axum::Json(json!({"message": "sha provided for a file that does not exist"})),
            )
                .into_response();
        }
        (None, None) => true,
    };

    let content: String = body.content.chars().filter(|c| !c.is_whitespace()).collect();
    let sha = content_sha(&content);
    files.insert(path.clone(), StoredFile { content, sha: sha.clone() });

    let status = if created { StatusCode::CREATED } else { StatusCode::OK };
    let name = path.rsplit('/').next().unwrap_or(&path).to_string();
    let commit_sha = content_sha(&format!("commit:{sha}"));
    (
        status,
        axum::Json(json!({
            "content": { "name": name, "path": path, "sha": sha },
            "commit": { "sha": commit_sha }
        })),
    )
        .into_response()
}
