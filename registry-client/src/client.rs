//! HTTP client for the registry API

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use shared::client::{
    BirthdaysResponse, ErrorBody, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    UserInfo,
};
use shared::models::{BirthdayRow, FamilySubmission, PrimarySubmission};

use crate::{ClientError, ClientResult};

/// HTTP client for the registry server.
///
/// Holds the session token after a successful login. Report fetches are
/// cancellable by dropping the returned future (the report page drops a
/// stale fetch when the month selector changes); the write path is not.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl RegistryClient {
    /// Create a client for a server base URL
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Current session token, if logged in
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Submit a registration (public endpoint, no session needed)
    pub async fn register(
        &self,
        primary: PrimarySubmission,
        family: Vec<FamilySubmission>,
    ) -> ClientResult<RegisterResponse> {
        let req = self
            .client
            .post(format!("{}/api/member", self.base_url))
            .json(&RegisterRequest { primary, family });
        Self::handle(req.send().await?).await
    }

    /// Fetch the birthday rows for a month (1-12)
    pub async fn birthdays(&self, month: u32) -> ClientResult<Vec<BirthdayRow>> {
        let req = self
            .authorized(self.client.get(format!("{}/api/birthdays", self.base_url)))?
            .query(&[("month", month)]);
        let res: BirthdaysResponse = Self::handle(req.send().await?).await?;
        Ok(res.items)
    }

    /// Sign in; the returned session token is kept for later calls
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let req = self
            .client
            .post(format!("{}/api/auth/login", self.base_url))
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            });
        let res: LoginResponse = Self::handle(req.send().await?).await?;
        self.token = Some(res.token.clone());
        Ok(res)
    }

    /// Current session identity
    pub async fn me(&self) -> ClientResult<UserInfo> {
        let req = self.authorized(self.client.get(format!("{}/api/auth/me", self.base_url)))?;
        Self::handle(req.send().await?).await
    }

    /// Sign out and drop the stored token
    pub async fn logout(&mut self) -> ClientResult<()> {
        let req = self.authorized(
            self.client
                .post(format!("{}/api/auth/logout", self.base_url)),
        )?;
        let _: serde_json::Value = Self::handle(req.send().await?).await?;
        self.token = None;
        Ok(())
    }

    fn authorized(&self, req: reqwest::RequestBuilder) -> ClientResult<reqwest::RequestBuilder> {
        let token = self.token.as_deref().ok_or(ClientError::Unauthorized)?;
        Ok(req.bearer_auth(token))
    }

    /// Map a response to its JSON body, or to the error taxonomy
    async fn handle<T: DeserializeOwned>(res: reqwest::Response) -> ClientResult<T> {
        let status = res.status();
        if status.is_success() {
            return Ok(res.json::<T>().await?);
        }

        let message = res
            .json::<ErrorBody>()
            .await
            .map(|b| b.error)
            .unwrap_or_else(|_| status.to_string());

        Err(match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            _ => ClientError::Server(message),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = RegistryClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
        assert_eq!(client.token(), None);
    }

    #[test]
    fn authorized_requires_a_session() {
        let client = RegistryClient::new("http://localhost:3000");
        let req = client.client.get("http://localhost:3000/api/birthdays");
        assert!(matches!(
            client.authorized(req),
            Err(ClientError::Unauthorized)
        ));
    }
}
