//! Mock auth helpers for integration tests.
//!
//! `MockAuth` signs a real access token with the test secret so requests pass
//! through the same `Identity` extractor as production traffic.

use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
use kala_auth_types::token::issue_access_token;
use uuid::Uuid;

/// Secret shared by test routers and [`MockAuth`].
pub const TEST_JWT_SECRET: &str = "kala-test-secret";

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub user_id: Uuid,
    pub email: String,
    pub secret: String,
}

impl MockAuth {
    pub fn new(user_id: Uuid, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
            secret: TEST_JWT_SECRET.to_string(),
        }
    }

    /// Sign with a different secret, e.g. to exercise signature rejection.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = secret.into();
        self
    }

    /// `Bearer <jwt>` header value.
    pub fn bearer(&self) -> HeaderValue {
        let token = issue_access_token(self.user_id, &self.email, &self.secret)
            .expect("test token should sign");
        HeaderValue::from_str(&format!("Bearer {token}")).expect("token is valid header text")
    }

    /// Headers carrying the bearer token.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(AUTHORIZATION, self.bearer());
        map
    }
}
