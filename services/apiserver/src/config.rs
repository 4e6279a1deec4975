use std::path::PathBuf;

use serde::Deserialize;

use vsr_core::config::Config;

use crate::infra::identity::AccessToken;

/// API server configuration loaded from environment variables.
#[derive(Deserialize)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for bearer tokens. Env var: `VSRECORDER_JWT_SECRET`.
    #[serde(rename = "vsrecorder_jwt_secret")]
    pub jwt_secret: String,
    /// TCP port for the HTTP server (default 8913). Env var: `API_PORT`.
    #[serde(default = "default_api_port")]
    pub api_port: u16,
    #[serde(default = "default_identity_provider_url")]
    pub identity_provider_url: String,
    pub identity_provider_project_id: String,
    /// Fixed bearer token for the identity provider's account lookup. Only
    /// suitable for tokens that do not expire; prefer the file variant.
    #[serde(default)]
    pub identity_provider_token: Option<String>,
    /// File holding the bearer token, re-read per lookup so it can be rotated.
    /// Takes precedence over `IDENTITY_PROVIDER_TOKEN`.
    #[serde(default)]
    pub identity_provider_token_file: Option<PathBuf>,
}

impl ApiConfig {
    /// `None` when neither token variable is set.
    pub fn identity_provider_access_token(&self) -> Option<AccessToken> {
        if let Some(path) = &self.identity_provider_token_file {
            return Some(AccessToken::File(path.clone()));
        }
        self.identity_provider_token.clone().map(AccessToken::Static)
    }
}

fn default_api_port() -> u16 {
    8913
}

fn default_identity_provider_url() -> String {
    "https://identitytoolkit.googleapis.com".to_string()
}

impl Config for ApiConfig {}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("database_url", &"..")
            .field("jwt_secret", &"..")
            .field("api_port", &self.api_port)
            .field("identity_provider_url", &self.identity_provider_url)
            .field(
                "identity_provider_project_id",
                &self.identity_provider_project_id,
            )
            .field("identity_provider_token", &"..")
            .field(
                "identity_provider_token_file",
                &self.identity_provider_token_file,
            )
            .finish()
    }
}
