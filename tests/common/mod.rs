//! Shared helpers for integration tests

use findit::client::{ApiClient, Config};
use findit::shared::config::AppConfig;
use serde_json::{json, Value};
use tempfile::TempDir;

/// An API client wired to a test server, with its token persisted in
/// a private temp dir so tests never touch the real config directory.
pub struct TestClient {
    pub api: ApiClient,
    pub token_path: std::path::PathBuf,
    // Held so the dir outlives the client
    _dir: TempDir,
}

pub fn client_for(server_url: &str) -> TestClient {
    let dir = tempfile::tempdir().expect("temp dir");
    let token_path = dir.path().join("fi_token");
    let config = Config::with_builder(
        AppConfig::builder()
            .server_url(server_url)
            .token_path(token_path.clone()),
    )
    .expect("valid test config");
    TestClient {
        api: ApiClient::new(config),
        token_path,
        _dir: dir,
    }
}

/// Like `client_for`, but with a token already persisted on disk
/// before the client is constructed, as after a previous run.
pub fn client_with_token(server_url: &str, token: &str) -> TestClient {
    let dir = tempfile::tempdir().expect("temp dir");
    let token_path = dir.path().join("fi_token");
    std::fs::write(&token_path, token).expect("seed token");
    let config = config_for(server_url, &token_path);
    TestClient {
        api: ApiClient::new(config),
        token_path,
        _dir: dir,
    }
}

/// A client config pointing at the same server/token path; used to
/// build an `AppContext` over a prepared token store.
pub fn config_for(server_url: &str, token_path: &std::path::Path) -> Config {
    Config::with_builder(
        AppConfig::builder()
            .server_url(server_url)
            .token_path(token_path.to_path_buf()),
    )
    .expect("valid test config")
}

pub fn profile_row(uid: &str, role: &str) -> Value {
    json!({
        "id": format!("id-{}", uid),
        "uid": uid,
        "name": "Amir",
        "initials": "AB",
        "color": "#4da6ff",
        "role": role,
        "is_banned": 0
    })
}

pub fn auth_response(token: &str, uid: &str) -> Value {
    json!({ "token": token, "profile": profile_row(uid, "user") })
}

pub fn post_row(id: &str, title: &str, status: &str) -> Value {
    json!({
        "id": id,
        "author_id": "id-amir_b",
        "author_uid": "amir_b",
        "author_name": "Amir",
        "author_initials": "AB",
        "author_color": "#4da6ff",
        "title": title,
        "description": format!("description of {}", title),
        "location": "Central Station",
        "category": "Misc",
        "status": status,
        "created_at": "2026-02-12T09:30:00Z",
        "comment_count": 0,
        "image_url": null
    })
}

pub fn conversation_row(other_uid: &str, last_body: &str) -> Value {
    json!({
        "other_uid": other_uid,
        "other_name": "Sara",
        "other_initials": "SK",
        "other_color": "#ff9a4d",
        "last_body": last_body,
        "last_at": "2026-02-12T10:00:00Z",
        "unread_count": 1
    })
}

pub fn dm_row(id: &str, from_uid: &str, to_uid: &str, body: &str) -> Value {
    json!({
        "id": id,
        "from_uid": from_uid,
        "to_uid": to_uid,
        "body": body,
        "created_at": "2026-02-12T10:05:00Z"
    })
}

pub fn comment_row(id: &str, post_id: &str, parent_id: Option<&str>) -> Value {
    json!({
        "id": id,
        "post_id": post_id,
        "author_uid": "sara_k",
        "author_name": "Sara",
        "author_initials": "SK",
        "author_color": "#ff9a4d",
        "body": format!("comment {}", id),
        "parent_id": parent_id,
        "created_at": "2026-02-12T10:00:00Z"
    })
}
