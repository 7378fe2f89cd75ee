//! HTTP client for the shortener backend

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use linkshort_session::SessionStore;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::types::{
    AuthResponse, CredentialsRequest, LinkCreatePayload, LinkCreateResponse, LinkList, LinkStats,
    PublicLinkInfo, ResolveRequest, ResolveResponse,
};
use crate::Result;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: SessionStore) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::from_transport)?;

        Ok(Self {
            http,
            base_url: config.base_url,
            session,
        })
    }

    /// Create a short link. The server decides the code when the payload
    /// carries no custom code; the returned descriptor is passed through
    /// unchanged.
    pub async fn create_link(&self, payload: &LinkCreatePayload) -> Result<LinkCreateResponse> {
        let url = self.endpoint("/api/links")?;
        self.send_json(self.http.post(url).json(payload)).await
    }

    /// List all links owned by the authenticated user.
    pub async fn list_links(&self) -> Result<Vec<LinkStats>> {
        let url = self.endpoint("/api/links")?;
        let list: LinkList = self.send_json(self.http.get(url)).await?;
        Ok(list.items)
    }

    /// Delete a link by code. Whether a repeat delete of an absent code
    /// succeeds is backend-defined; any failure propagates.
    pub async fn delete_link(&self, code: &str) -> Result<()> {
        let url = self.endpoint(&format!("/api/links/{}", code))?;
        self.dispatch(self.http.delete(url)).await?;
        Ok(())
    }

    /// Fetch the stat record for a single link.
    pub async fn link_stats(&self, code: &str) -> Result<LinkStats> {
        let url = self.endpoint(&format!("/api/links/{}/stats", code))?;
        self.send_json(self.http.get(url)).await
    }

    /// Fetch the public descriptor of a link. No auth required.
    pub async fn public_link_info(&self, code: &str) -> Result<PublicLinkInfo> {
        let url = self.endpoint(&format!("/api/links/{}/public", code))?;
        self.send_json(self.http.get(url)).await
    }

    /// Resolve a code to its original destination URL. Fails when a
    /// required password is missing or wrong, or when the link is
    /// inactive, expired or click-exhausted.
    pub async fn resolve_link(&self, code: &str, password: Option<&str>) -> Result<String> {
        let url = self.endpoint(&format!("/api/links/{}/resolve", code))?;
        let resp: ResolveResponse = self
            .send_json(self.http.post(url).json(&ResolveRequest { password }))
            .await?;
        Ok(resp.original_url)
    }

    /// Create an account. On success the returned credential and email
    /// are written into the session store.
    pub async fn signup(&self, email: &str, password: &str) -> Result<()> {
        let url = self.endpoint("/api/auth/signup")?;
        let auth: AuthResponse = self
            .send_json(self.http.post(url).json(&CredentialsRequest { email, password }))
            .await?;

        self.session.set_auth(&auth.access_token, &auth.user_email)?;
        tracing::info!(email = %auth.user_email, "Signed up");
        Ok(())
    }

    /// Log in to an existing account; establishes the session like
    /// [`ApiClient::signup`].
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let url = self.endpoint("/api/auth/login")?;
        let auth: AuthResponse = self
            .send_json(self.http.post(url).json(&CredentialsRequest { email, password }))
            .await?;

        self.session.set_auth(&auth.access_token, &auth.user_email)?;
        tracing::info!(email = %auth.user_email, "Logged in");
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Attach the current bearer credential, if any.
    ///
    /// Single attachment point for every outbound request; an absent or
    /// empty token leaves the request unauthenticated.
    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Ok(Some(token)) if !token.is_empty() => req.bearer_auth(token),
            _ => req,
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T> {
        let resp = self.dispatch(req).await?;
        resp.json().await.map_err(ApiError::from_transport)
    }

    async fn dispatch(&self, req: RequestBuilder) -> Result<Response> {
        let resp = self
            .authorize(req)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let detail = error_detail(resp).await;
        tracing::debug!(status = %status, detail = %detail, "Request failed");

        Err(match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::FORBIDDEN => ApiError::Forbidden(detail),
            StatusCode::NOT_FOUND => ApiError::NotFound(detail),
            StatusCode::CONFLICT => ApiError::Conflict(detail),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::Validation(detail)
            }
            status => ApiError::Unexpected {
                status: status.as_u16(),
                detail,
            },
        })
    }
}

impl Clone for ApiClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            session: self.session.clone(),
        }
    }
}

/// Best-effort failure detail from an error response body.
async fn error_detail(resp: Response) -> String {
    let body = resp.text().await.unwrap_or_default();

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
    }

    let body = body.trim();
    if body.is_empty() {
        "no detail".to_string()
    } else {
        body.to_string()
    }
}
