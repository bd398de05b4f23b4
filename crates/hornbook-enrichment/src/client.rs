//! Best-effort fact client
//!
//! One GET with a timeout per fetch. Every failure mode (connect, status,
//! body shape) collapses into the source's canned fallback with a warning
//! logged; callers never see an error from [`FactClient::fetch`]. Successful
//! fetches write through to the `api_cache` table and are reused within the
//! TTL.

use std::time::Duration;

use hornbook_sqlite::{ApiCacheStore, SqlitePool};
use tracing::{debug, warn};

use crate::error::{EnrichmentError, EnrichmentResult};
use crate::response::{ApodResponse, DictionaryEntry, TriviaResponse, WikipediaSummary};
use crate::source::FactSource;

/// Sent with every request; the Wikipedia API asks clients to identify
/// themselves
const USER_AGENT: &str = concat!("hornbook/", env!("CARGO_PKG_VERSION"));

/// Client tuning
#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    /// Per-request timeout
    pub timeout_secs: u64,
    /// How long cached payloads stay fresh
    pub cache_ttl_secs: u64,
    /// NASA API key; the public demo key is heavily rate limited but works
    pub nasa_api_key: String,
    pub wikipedia_base: String,
    pub dictionary_base: String,
    pub nasa_base: String,
    pub trivia_base: String,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            cache_ttl_secs: 86_400,
            nasa_api_key: "DEMO_KEY".to_string(),
            wikipedia_base: "https://en.wikipedia.org/api/rest_v1".to_string(),
            dictionary_base: "https://api.dictionaryapi.dev".to_string(),
            nasa_base: "https://api.nasa.gov".to_string(),
            trivia_base: "https://opentdb.com".to_string(),
        }
    }
}

/// Where a fact's text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactOrigin {
    Cache,
    Network,
    Fallback,
}

impl FactOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactOrigin::Cache => "cache",
            FactOrigin::Network => "network",
            FactOrigin::Fallback => "fallback",
        }
    }
}

/// A piece of supplementary display text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub text: String,
    pub origin: FactOrigin,
}

/// HTTP fact fetcher over the shared cache
pub struct FactClient {
    http: reqwest::Client,
    cache: ApiCacheStore,
    config: EnrichmentConfig,
}

impl FactClient {
    pub fn new(pool: SqlitePool, config: EnrichmentConfig) -> EnrichmentResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| EnrichmentError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            cache: ApiCacheStore::new(pool),
            config,
        })
    }

    /// Fetch a fact about `term`, never failing
    ///
    /// Order of preference: fresh cache entry, then the network (written
    /// through to the cache), then the source's canned fallback.
    pub async fn fetch(&self, source: FactSource, term: &str) -> Fact {
        let key = source.cache_key(term);

        match self.cache.get(&key, self.config.cache_ttl_secs) {
            Ok(Some(text)) => {
                return Fact {
                    text,
                    origin: FactOrigin::Cache,
                }
            }
            Ok(None) => {}
            Err(e) => warn!(key = %key, error = %e, "Cache read failed"),
        }

        match self.fetch_remote(source, term).await {
            Ok(text) => {
                if let Err(e) = self.cache.put(&key, &text) {
                    warn!(key = %key, error = %e, "Cache write failed");
                }
                Fact {
                    text,
                    origin: FactOrigin::Network,
                }
            }
            Err(reason) => {
                warn!(
                    source = source.as_str(),
                    term,
                    reason = %reason,
                    "Fetch failed, substituting fallback"
                );
                Fact {
                    text: source.fallback(term),
                    origin: FactOrigin::Fallback,
                }
            }
        }
    }

    /// One GET plus source-specific payload extraction
    ///
    /// Errors are plain strings; the caller only logs them.
    async fn fetch_remote(&self, source: FactSource, term: &str) -> Result<String, String> {
        let url = source.endpoint(term, &self.config);
        debug!(url = %url, "Fetching fact");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("status {}", response.status()));
        }

        match source {
            FactSource::Wikipedia => {
                let summary: WikipediaSummary =
                    response.json().await.map_err(|e| e.to_string())?;
                if summary.extract.is_empty() {
                    return Err("summary has no extract".to_string());
                }
                Ok(summary.extract)
            }
            FactSource::Dictionary => {
                let entries: Vec<DictionaryEntry> =
                    response.json().await.map_err(|e| e.to_string())?;
                entries
                    .iter()
                    .flat_map(|entry| &entry.meanings)
                    .flat_map(|meaning| &meaning.definitions)
                    .next()
                    .map(|d| d.definition.clone())
                    .ok_or_else(|| "no definitions in response".to_string())
            }
            FactSource::Nasa => {
                let apod: ApodResponse = response.json().await.map_err(|e| e.to_string())?;
                Ok(format!("{}: {}", apod.title, apod.explanation))
            }
            FactSource::Trivia => {
                let trivia: TriviaResponse =
                    response.json().await.map_err(|e| e.to_string())?;
                trivia
                    .results
                    .into_iter()
                    .next()
                    .map(|r| r.question)
                    .ok_or_else(|| "no trivia results".to_string())
            }
        }
    }
}
