//! JSON request handling for the persistence endpoint.
//!
//! Transport-neutral: callers hand over the raw request body and get back a
//! status code plus a JSON body, ready for whatever HTTP layer they use.
//!
//! | Request                         | Status | Body                         |
//! |---------------------------------|--------|------------------------------|
//! | GET, store readable             | 200    | `{"description": "..."}`     |
//! | GET, store fails                | 500    | `{"error": "..."}`           |
//! | POST `{"description": "..."}`   | 200    | `{"success": true}`          |
//! | POST, bad body                  | 400    | `{"error": "..."}`           |
//! | POST, body over the size limit  | 413    | `{"error": "..."}`           |
//! | POST, store fails               | 500    | `{"error": "..."}`           |

use log::{info, warn};
use serde::Deserialize;
use serde_json::{Value, json};

use super::DescriptionStore;

/// Largest request body accepted by [`handle_post`].
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Status code and JSON body of a handled request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: u16,
    body: Value,
}

impl ApiResponse {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Body as compact JSON text.
    pub fn body_text(&self) -> String {
        self.body.to_string()
    }
}

#[derive(Debug, Deserialize)]
struct PostBody {
    description: Option<Value>,
}

/// Handles `GET`: returns the stored description.
pub fn handle_get(store: &dyn DescriptionStore) -> ApiResponse {
    match store.load() {
        Ok(text) => ApiResponse::ok(json!({ "description": text })),
        Err(err) => {
            warn!(err:%; "Failed to read description");
            ApiResponse::error(500, "Failed to read description")
        }
    }
}

/// Handles `POST`: stores the `description` string from a JSON body.
pub fn handle_post(store: &mut dyn DescriptionStore, body: &str) -> ApiResponse {
    if body.len() > MAX_BODY_BYTES {
        warn!(bytes = body.len(); "Rejected oversized description body");
        return ApiResponse::error(413, "Request body too large");
    }

    let text = match serde_json::from_str::<PostBody>(body) {
        Ok(PostBody {
            description: Some(Value::String(text)),
        }) => text,
        Ok(_) => return ApiResponse::error(400, "Invalid description"),
        Err(err) => {
            warn!(err:%; "Rejected malformed request body");
            return ApiResponse::error(400, "Invalid description");
        }
    };

    match store.save(&text) {
        Ok(()) => {
            info!(bytes = text.len(); "Stored description via API");
            ApiResponse::ok(json!({ "success": true }))
        }
        Err(err) => {
            warn!(err:%; "Failed to write description");
            ApiResponse::error(500, "Failed to write description")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FileStore, MemoryStore};

    #[test]
    fn test_get_returns_description() {
        let store = MemoryStore::with_text("kind: Fabric\n");
        let response = handle_get(&store);
        assert_eq!(response.status(), 200);
        assert_eq!(response.body()["description"], "kind: Fabric\n");
    }

    #[test]
    fn test_get_failure_is_500() {
        let response = handle_get(&MemoryStore::new());
        assert_eq!(response.status(), 500);
        assert!(response.body()["error"].is_string());
    }

    #[test]
    fn test_post_stores_string() {
        let mut store = MemoryStore::new();
        let response = handle_post(&mut store, r#"{"description": "kind: Fabric\n"}"#);
        assert!(response.is_success());
        assert_eq!(response.body_text(), r#"{"success":true}"#);
        assert_eq!(store.text(), Some("kind: Fabric\n"));
    }

    #[test]
    fn test_post_rejects_bad_bodies() {
        let mut store = MemoryStore::new();
        for body in [
            r#"{"description": 42}"#,
            r#"{"description": null}"#,
            r#"{"description": ["a"]}"#,
            r#"{"text": "kind: Fabric"}"#,
            "not json",
            "[]",
        ] {
            let response = handle_post(&mut store, body);
            assert_eq!(response.status(), 400, "body: {body}");
            assert!(response.body()["error"].is_string());
        }
        assert_eq!(store.text(), None);
    }

    #[test]
    fn test_post_rejects_oversized_body() {
        let mut store = MemoryStore::new();
        let body = format!(
            r#"{{"description": "{}"}}"#,
            "a".repeat(MAX_BODY_BYTES)
        );
        assert_eq!(handle_post(&mut store, &body).status(), 413);
        assert_eq!(store.text(), None);
    }

    #[test]
    fn test_post_write_failure_is_500() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("missing").join("fabric.yaml"));
        let response = handle_post(&mut store, r#"{"description": "x"}"#);
        assert_eq!(response.status(), 500);
    }

    #[test]
    fn test_post_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::in_dir(dir.path());
        assert!(handle_post(&mut store, r#"{"description": "metadata:\n  name: dc1\n"}"#).is_success());

        let response = handle_get(&store);
        assert_eq!(response.body()["description"], "metadata:\n  name: dc1\n");
    }
}
