//! Login and registration

use reqwest::Method;
use shared::{validate_credentials, AuthResponse, Credentials, Role};

use super::ApiClient;
use crate::error::{ClientError, ClientResult};

impl ApiClient {
    /// Log in and keep the issued token for subsequent requests
    pub async fn login(&mut self, credentials: &Credentials) -> ClientResult<AuthResponse> {
        validate_credentials(credentials)?;

        let path = "/api/auth/login";
        let builder = self.request(Method::POST, path).json(credentials);
        // A 401 here means bad credentials, not an expired session
        let response: AuthResponse = self
            .send_json(builder, path)
            .await
            .map_err(|err| match err {
                ClientError::Unauthorized { status, message } => {
                    ClientError::Rejected { status, message }
                }
                other => other,
            })?;

        tracing::info!("Logged in as {} ({})", response.username, response.role);
        self.token = Some(response.token.clone());
        Ok(response)
    }

    /// Register a new account; returns the server's confirmation message
    pub async fn register(&self, credentials: &Credentials, role: Role) -> ClientResult<String> {
        validate_credentials(credentials)?;

        let path = "/api/auth/register";
        let builder = self
            .request(Method::POST, path)
            .query(&[("role", role.as_str())])
            .json(credentials);
        self.send_text(builder, path).await
    }

    /// Forget the token
    pub fn logout(&mut self) {
        self.token = None;
    }
}
