//! The REST client.
//!
//! [`ApiClient`] wraps a `reqwest::Client` and knows the SplitPro endpoint
//! surface. Every request carries the session cookie (`credentials: include`
//! in the browser, a cookie jar natively) and every state-changing request
//! mirrors the CSRF cookie into its header.

use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::csrf::{requires_csrf, CsrfSource, CSRF_HEADER};
use crate::error::{ApiError, Result};
use crate::models::{
    AddFriendRequest, AuthResponse, BalanceSummary, CreateExpenseRequest, CreateGroupRequest,
    Expense, ForgotPasswordRequest, Friend, Group, LoginRequest, Page, SignupRequest,
    SupportRequest, SupportResponse, UserInfo,
};

/// Everything except RFC 3986 unreserved characters is escaped in path segments.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Handle to the SplitPro API. Cloning is cheap.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

struct Inner {
    http: reqwest::Client,
    base_url: String,
    csrf: Box<dyn CsrfSource>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ApiClient {
    /// Build a client for the configured API origin.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = resolve_base_url(&config.api.base_url, NATIVE_DEFAULT_BASE_URL)?;
        let url = reqwest::Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        let jar = Arc::new(reqwest::cookie::Jar::default());
        let http = reqwest::Client::builder()
            .cookie_provider(jar.clone())
            .build()?;
        Ok(Self::from_parts(
            http,
            base_url,
            Box::new(crate::csrf::JarCookies::new(jar, url)),
        ))
    }

    /// Build a client for the configured API origin.
    #[cfg(target_arch = "wasm32")]
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        let base_url = resolve_base_url(&config.api.base_url, &origin)?;
        Ok(Self::from_parts(
            reqwest::Client::new(),
            base_url,
            Box::new(crate::csrf::DocumentCookies),
        ))
    }

    /// Assemble a client from an existing HTTP client and CSRF source.
    pub fn from_parts(
        http: reqwest::Client,
        base_url: impl Into<String>,
        csrf: Box<dyn CsrfSource>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            inner: Arc::new(Inner {
                http,
                base_url,
                csrf,
            }),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.inner.base_url, path);
        let csrf = requires_csrf(&method);
        let mut req = self.inner.http.request(method, url);
        if csrf {
            if let Some(token) = self.inner.csrf.token() {
                req = req.header(CSRF_HEADER, token);
            }
        }
        #[cfg(target_arch = "wasm32")]
        {
            req = req.fetch_credentials_include();
        }
        req
    }

    async fn send(&self, req: RequestBuilder, label: &str) -> Result<Response> {
        tracing::debug!("{label}");
        let response = req.send().await.map_err(|e| {
            tracing::warn!("{label} failed: {e}");
            ApiError::from(e)
        })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::rejected(status.as_u16(), &body);
        tracing::warn!("{label} rejected with {status}: {err}");
        Err(err)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let label = format!("GET {path}");
        let response = self.send(self.request(Method::GET, path), &label).await?;
        Ok(response.json().await?)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let label = format!("POST {path}");
        let req = self.request(Method::POST, path).json(body);
        let response = self.send(req, &label).await?;
        Ok(response.json().await?)
    }

    /// POST whose response body is irrelevant.
    async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: Option<&B>) -> Result<()> {
        let label = format!("POST {path}");
        let mut req = self.request(Method::POST, path);
        if let Some(body) = body {
            req = req.json(body);
        }
        self.send(req, &label).await?;
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Authentication
    // ---------------------------------------------------------------------

    /// The signed-in user, or `None` when the session is missing or expired.
    pub async fn current_user(&self) -> Result<Option<UserInfo>> {
        match self.get_json::<UserInfo>("/api/auth/me").await {
            Ok(user) => Ok(Some(user)),
            Err(ApiError::Rejected { status, .. })
                if status == StatusCode::UNAUTHORIZED.as_u16()
                    || status == StatusCode::FORBIDDEN.as_u16() =>
            {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<UserInfo> {
        let response: AuthResponse = self.post_json("/api/auth/login", request).await?;
        let user = signed_in_user(response)?;
        tracing::info!("Signed in as {}", user.id);
        Ok(user)
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<UserInfo> {
        let response: AuthResponse = self.post_json("/api/auth/signup", request).await?;
        let user = signed_in_user(response)?;
        tracing::info!("Signed up as {}", user.id);
        Ok(user)
    }

    pub async fn logout(&self) -> Result<()> {
        self.post_unit::<()>("/api/auth/logout", None).await?;
        tracing::info!("Signed out");
        Ok(())
    }

    pub async fn forgot_password(&self, email: &str) -> Result<()> {
        let body = ForgotPasswordRequest {
            email: email.trim().to_string(),
        };
        self.post_unit("/api/auth/forgot-password", Some(&body)).await
    }

    // ---------------------------------------------------------------------
    // Friends
    // ---------------------------------------------------------------------

    pub async fn friends(&self) -> Result<Vec<Friend>> {
        self.get_json("/api/friends").await
    }

    pub async fn add_friend(&self, identifier: &str) -> Result<Friend> {
        let body = AddFriendRequest {
            identifier: identifier.trim().to_string(),
        };
        self.post_json("/api/friends", &body).await
    }

    pub async fn remove_friend(&self, friend_id: &str) -> Result<()> {
        let path = format!(
            "/api/friends/{}",
            utf8_percent_encode(friend_id, PATH_SEGMENT)
        );
        let label = format!("DELETE {path}");
        self.send(self.request(Method::DELETE, &path), &label)
            .await?;
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Groups, expenses, balances
    // ---------------------------------------------------------------------

    pub async fn groups(&self) -> Result<Vec<Group>> {
        self.get_json("/api/groups").await
    }

    pub async fn create_group(&self, request: &CreateGroupRequest) -> Result<Group> {
        self.post_json("/api/groups", request).await
    }

    /// One page of the user's expenses, newest first.
    pub async fn expenses(&self, page: u32, size: u32) -> Result<Page<Expense>> {
        self.get_json(&format!("/api/expenses?page={page}&size={size}"))
            .await
    }

    pub async fn create_expense(&self, request: &CreateExpenseRequest) -> Result<Expense> {
        self.post_json("/api/expenses", request).await
    }

    pub async fn balances(&self) -> Result<BalanceSummary> {
        self.get_json("/api/balances").await
    }

    // ---------------------------------------------------------------------
    // Support
    // ---------------------------------------------------------------------

    pub async fn send_support(&self, request: &SupportRequest) -> Result<SupportResponse> {
        let response: SupportResponse = self.post_json("/api/support", request).await?;
        if let Some(ticket) = &response.ticket_id {
            tracing::info!("Support ticket {ticket} created");
        }
        Ok(response)
    }
}

/// Trim a configured base URL, falling back to `default` when it is blank.
fn resolve_base_url(configured: &str, default: &str) -> Result<String> {
    let base = configured.trim();
    let base = if base.is_empty() { default.trim() } else { base };
    if base.is_empty() {
        return Err(ApiError::InvalidUrl("no API base URL".to_string()));
    }
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(ApiError::InvalidUrl(base.to_string()));
    }
    Ok(base.trim_end_matches('/').to_string())
}

/// A successful auth call must carry the user; anything else counts as a
/// rejection carrying whatever message the server sent.
fn signed_in_user(response: AuthResponse) -> Result<UserInfo> {
    response.user.ok_or(ApiError::Rejected {
        status: StatusCode::OK.as_u16(),
        message: response.message,
    })
}
