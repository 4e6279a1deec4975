use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::domain::repository::UserPort;
use crate::domain::types::User;
use crate::error::ApiServiceError;

/// Bearer credential for the identity provider.
///
/// `File` is re-read on every lookup, so an external refresher can rotate a
/// short-lived access token in place.
#[derive(Clone)]
pub enum AccessToken {
    Static(String),
    File(PathBuf),
}

impl AccessToken {
    async fn current(&self) -> anyhow::Result<String> {
        match self {
            Self::Static(token) => Ok(token.clone()),
            Self::File(path) => {
                let raw = tokio::fs::read_to_string(path).await.with_context(|| {
                    format!("read identity provider token {}", path.display())
                })?;
                let token = raw.trim();
                anyhow::ensure!(!token.is_empty(), "identity provider token file is empty");
                Ok(token.to_string())
            }
        }
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self::Static(token.to_string())
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self::Static(token)
    }
}

/// Identity-provider account lookup (`accounts:lookup`) over HTTPS.
#[derive(Clone)]
pub struct HttpUserPort {
    pub client: reqwest::Client,
    pub base_url: String,
    pub project_id: String,
    pub token: AccessToken,
}

impl HttpUserPort {
    pub fn new(
        base_url: impl Into<String>,
        project_id: impl Into<String>,
        token: impl Into<AccessToken>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            token: token.into(),
        }
    }

    fn lookup_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/accounts:lookup",
            self.base_url, self.project_id
        )
    }
}

#[derive(Serialize)]
struct LookupRequest<'a> {
    #[serde(rename = "localId")]
    local_id: [&'a str; 1],
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    photo_url: String,
}

impl UserPort for HttpUserPort {
    async fn find_by_id(&self, uid: &str) -> Result<Option<User>, ApiServiceError> {
        let token = self.token.current().await?;
        let response = self
            .client
            .post(self.lookup_url())
            .bearer_auth(token)
            .json(&LookupRequest { local_id: [uid] })
            .send()
            .await
            .context("identity provider lookup request")?
            .error_for_status()
            .context("identity provider lookup status")?;
        let body: LookupResponse = response
            .json()
            .await
            .context("decode identity provider lookup response")?;

        Ok(body.users.into_iter().next().map(|u| User {
            uid: u.local_id,
            display_name: u.display_name,
            photo_url: u.photo_url,
        }))
    }
}
