use crate::token::PublicKeyToken;
use crate::types::{DirectoryError, ResolvedUser, Result};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_PRIMARY_URL: &str = "https://g1.duniter.org";
pub const DEFAULT_FALLBACK_URL: &str = "https://g1.data.presles.fr";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Directory service endpoints and the per-request timeout.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub primary_url: String,
    pub fallback_url: String,
    pub timeout: Duration,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            primary_url: DEFAULT_PRIMARY_URL.to_string(),
            fallback_url: DEFAULT_FALLBACK_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// Primary schema: { results: [ { uids: [ { uid } ] } ] }
#[derive(Deserialize)]
struct LookupResponse {
    results: Vec<LookupResult>,
}

#[derive(Deserialize)]
struct LookupResult {
    uids: Vec<UidRecord>,
}

#[derive(Deserialize)]
struct UidRecord {
    uid: String,
}

// Fallback schema: { found: bool, _source: { title } }
#[derive(Deserialize)]
struct ProfileResponse {
    found: bool,
    #[serde(rename = "_source")]
    source: Option<ProfileSource>,
}

#[derive(Deserialize)]
struct ProfileSource {
    title: String,
}

/// Client for the primary and fallback directory services.
pub struct DirectoryClient {
    http: reqwest::Client,
    config: DirectoryConfig,
}

impl DirectoryClient {
    pub fn new(config: DirectoryConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    /// Resolve a token to a display name.
    ///
    /// Tokens carrying an embedded name short-circuit without touching
    /// the network. Otherwise the primary service is queried once; on
    /// any failure the fallback service is queried once. A failed
    /// fallback is terminal for the token and yields `NotFound`.
    pub async fn resolve(&self, token: &PublicKeyToken) -> Result<ResolvedUser> {
        if let Some(name) = token.embedded_name() {
            return Ok(ResolvedUser {
                display_name: name.to_string(),
                key: token.key().to_string(),
            });
        }

        match self.lookup_primary(token.key()).await {
            Ok(uid) => {
                return Ok(ResolvedUser {
                    display_name: uid,
                    key: token.key().to_string(),
                });
            }
            Err(err) => {
                tracing::warn!("Primary lookup failed for {}: {}", token.key(), err);
            }
        }

        match self.lookup_fallback(token.key()).await {
            Ok(Some(title)) => Ok(ResolvedUser {
                display_name: title,
                key: token.key().to_string(),
            }),
            Ok(None) => Err(DirectoryError::NotFound {
                key: token.key().to_string(),
            }),
            Err(err) => {
                tracing::warn!("Fallback lookup failed for {}: {}", token.key(), err);
                Err(DirectoryError::NotFound {
                    key: token.key().to_string(),
                })
            }
        }
    }

    async fn lookup_primary(&self, key: &str) -> std::result::Result<String, LookupFailure> {
        let url = format!("{}/wot/lookup/{}", self.config.primary_url, key);
        tracing::debug!("GET {}", url);
        let response = self.http.get(&url).send().await?.error_for_status()?;
        let body: LookupResponse = response.json().await?;

        body.results
            .first()
            .and_then(|result| result.uids.first())
            .map(|record| record.uid.clone())
            .ok_or(LookupFailure::EmptyResult)
    }

    async fn lookup_fallback(&self, key: &str) -> std::result::Result<Option<String>, LookupFailure> {
        let url = format!("{}/user/profile/{}", self.config.fallback_url, key);
        tracing::debug!("GET {}", url);
        let response = self.http.get(&url).send().await?.error_for_status()?;
        let body: ProfileResponse = response.json().await?;

        if !body.found {
            return Ok(None);
        }
        match body.source {
            Some(source) => Ok(Some(source.title)),
            None => Err(LookupFailure::EmptyResult),
        }
    }
}

/// One failed attempt against a single directory service. Internal:
/// the caller recovers by falling back, then collapses to `NotFound`.
#[derive(Debug, thiserror::Error)]
enum LookupFailure {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("response carried no identifier")]
    EmptyResult,
}
