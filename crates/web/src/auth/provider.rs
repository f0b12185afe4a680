use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use super::{AuthError, IdentityProvider, TokenSet, VerifiedUser};

#[derive(Debug, Serialize)]
struct SignUpPayload<'a> {
    client_id: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct ConfirmPayload<'a> {
    client_id: &'a str,
    email: &'a str,
    code: &'a str,
}

#[derive(Debug, Serialize)]
struct TokenGrant<'a> {
    client_id: &'a str,
    grant_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Client for the managed identity provider's user-pool API.
///
/// Constructed once at startup and shared by reference; every call is a
/// fresh round trip to the provider.
pub struct HttpIdentityProvider {
    client: Client,
    base_url: String,
    client_id: String,
}

impl HttpIdentityProvider {
    pub fn new(base_url: String, client_id: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            client_id,
        }
    }

    async fn rejection_message(response: Response) -> String {
        let status = response.status();
        match response.json::<ProviderErrorBody>().await {
            Ok(body) => body
                .error
                .or(body.message)
                .unwrap_or_else(|| status.to_string()),
            Err(_) => status.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(format!("{}/signup", self.base_url))
            .json(&SignUpPayload {
                client_id: &self.client_id,
                email,
                password,
            })
            .send()
            .await
            .map_err(AuthError::Transport)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AuthError::Rejected(Self::rejection_message(response).await))
        }
    }

    async fn confirm_sign_up(&self, email: &str, code: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(format!("{}/confirm", self.base_url))
            .json(&ConfirmPayload {
                client_id: &self.client_id,
                email,
                code,
            })
            .send()
            .await
            .map_err(AuthError::Transport)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AuthError::Rejected(Self::rejection_message(response).await))
        }
    }

    // Sign-in failures are indistinguishable to the caller: whatever the
    // provider said, the client learns only "invalid credentials".
    async fn sign_in(&self, email: &str, password: &str) -> Result<TokenSet, AuthError> {
        let response = self
            .client
            .post(format!("{}/token", self.base_url))
            .json(&TokenGrant {
                client_id: &self.client_id,
                grant_type: "password",
                username: Some(email),
                password: Some(password),
                refresh_token: None,
            })
            .send()
            .await
            .map_err(|_| AuthError::InvalidCredentials)?;

        if !response.status().is_success() {
            return Err(AuthError::InvalidCredentials);
        }

        response
            .json::<TokenSet>()
            .await
            .map_err(|_| AuthError::InvalidCredentials)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenSet, AuthError> {
        let response = self
            .client
            .post(format!("{}/token", self.base_url))
            .json(&TokenGrant {
                client_id: &self.client_id,
                grant_type: "refresh_token",
                username: None,
                password: None,
                refresh_token: Some(refresh_token),
            })
            .send()
            .await
            .map_err(|_| AuthError::InvalidToken)?;

        if !response.status().is_success() {
            return Err(AuthError::InvalidToken);
        }

        response
            .json::<TokenSet>()
            .await
            .map_err(|_| AuthError::InvalidToken)
    }

    async fn verify_token(&self, access_token: &str) -> Result<VerifiedUser, AuthError> {
        let response = self
            .client
            .get(format!("{}/userinfo", self.base_url))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|_| AuthError::InvalidToken)?;

        if !response.status().is_success() {
            return Err(AuthError::InvalidToken);
        }

        response
            .json::<VerifiedUser>()
            .await
            .map_err(|_| AuthError::InvalidToken)
    }
}
