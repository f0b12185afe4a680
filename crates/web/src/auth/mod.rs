mod provider;

pub use provider::HttpIdentityProvider;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Errors surfaced by the identity provider.
#[derive(Debug)]
pub enum AuthError {
    /// The provider rejected a signup/confirmation request (bad input,
    /// user already exists, wrong code...). Carries the provider's message.
    Rejected(String),
    InvalidCredentials,
    InvalidToken,
    Transport(reqwest::Error),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(msg) => write!(f, "Provider rejected request: {}", msg),
            Self::InvalidCredentials => write!(f, "Invalid credentials"),
            Self::InvalidToken => write!(f, "Invalid or expired token"),
            Self::Transport(e) => write!(f, "Provider request failed: {}", e),
        }
    }
}

/// Token material returned by the provider on sign-in and refresh. The
/// refresh grant does not return a new refresh token, so the field is
/// optional and omitted from the response body when absent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenSet {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub token_type: String,
    pub expires_in: i64,
}

/// The identity the provider vouched for. Inserted into request extensions
/// by the authentication middleware after a successful verification.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifiedUser {
    pub sub: String,
    pub email: Option<String>,
}

/// Seam over the managed identity provider. Every protected request goes
/// through `verify_token` — there is no local verification or caching.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError>;

    async fn confirm_sign_up(&self, email: &str, code: &str) -> Result<(), AuthError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<TokenSet, AuthError>;

    async fn refresh(&self, refresh_token: &str) -> Result<TokenSet, AuthError>;

    async fn verify_token(&self, access_token: &str) -> Result<VerifiedUser, AuthError>;
}

pub type SharedIdentityProvider = Arc<dyn IdentityProvider>;
