//! Wire types for the shortener backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/links`. Only the original URL is required; the
/// server decides the code when no custom code is supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkCreatePayload {
    pub original_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_clicks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time: Option<bool>,
}

impl LinkCreatePayload {
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            ..Self::default()
        }
    }
}

/// Created-link descriptor returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkCreateResponse {
    pub code: String,
    pub short_url: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub password_protected: bool,
    pub max_clicks: Option<u32>,
    pub one_time: bool,
}

/// Per-link statistics for the authenticated owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkStats {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub password_protected: bool,
    pub max_clicks: Option<u32>,
    pub one_time: bool,
    pub click_count: u64,
    pub active: bool,
    pub last_accessed_at: Option<DateTime<Utc>>,
}

/// Minimal public descriptor; the original URL is withheld when the
/// link is password protected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicLinkInfo {
    pub code: String,
    pub active: bool,
    pub password_protected: bool,
    pub original_url: Option<String>,
}

/// Response of the signup and login endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user_email: String,
}

/// Envelope of `GET /api/links`.
#[derive(Debug, Deserialize)]
pub(crate) struct LinkList {
    pub items: Vec<LinkStats>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CredentialsRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResolveRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResolveResponse {
    pub original_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payload_omits_unset_fields() {
        let payload = LinkCreatePayload::new("https://example.com");
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["original_url"], "https://example.com");
        assert!(json.get("custom_code").is_none());
        assert!(json.get("password").is_none());
        assert!(json.get("one_time").is_none());
    }

    #[test]
    fn test_resolve_request_omits_missing_password() {
        let body = serde_json::to_string(&ResolveRequest { password: None }).unwrap();
        assert_eq!(body, "{}");

        let body = serde_json::to_string(&ResolveRequest {
            password: Some("pw"),
        })
        .unwrap();
        assert_eq!(body, r#"{"password":"pw"}"#);
    }

    #[test]
    fn test_link_stats_deserializes_nullable_fields() {
        let stats: LinkStats = serde_json::from_str(
            r#"{
                "code": "abc",
                "original_url": "https://example.com",
                "created_at": "2026-01-02T03:04:05Z",
                "expires_at": null,
                "password_protected": false,
                "max_clicks": null,
                "one_time": false,
                "click_count": 7,
                "active": true,
                "last_accessed_at": null
            }"#,
        )
        .unwrap();

        assert_eq!(stats.code, "abc");
        assert_eq!(stats.click_count, 7);
        assert!(stats.expires_at.is_none());
        assert!(stats.last_accessed_at.is_none());
    }
}
