//! Fact sources: endpoints, cache keys and canned fallbacks

use crate::client::EnrichmentConfig;
use crate::error::EnrichmentError;
use std::str::FromStr;

/// A public API the client can pull display text from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactSource {
    /// Wikipedia REST page summary
    Wikipedia,
    /// dictionaryapi.dev word definitions
    Dictionary,
    /// NASA Astronomy Picture of the Day
    Nasa,
    /// Open Trivia DB
    Trivia,
}

impl FactSource {
    pub const ALL: [FactSource; 4] = [
        FactSource::Wikipedia,
        FactSource::Dictionary,
        FactSource::Nasa,
        FactSource::Trivia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FactSource::Wikipedia => "wikipedia",
            FactSource::Dictionary => "dictionary",
            FactSource::Nasa => "nasa",
            FactSource::Trivia => "trivia",
        }
    }

    /// Request URL for a term
    ///
    /// Base URLs come from the config so tests can point a source at a
    /// local mock server. NASA and trivia endpoints ignore the term (APOD
    /// is a picture of the day, the trivia API has no search), but still
    /// cache per term.
    pub fn endpoint(&self, term: &str, config: &EnrichmentConfig) -> String {
        let encoded = urlencoding::encode(term);
        match self {
            FactSource::Wikipedia => {
                format!("{}/page/summary/{}", config.wikipedia_base, encoded)
            }
            FactSource::Dictionary => {
                format!("{}/api/v2/entries/en/{}", config.dictionary_base, encoded)
            }
            FactSource::Nasa => {
                format!("{}/planetary/apod?api_key={}", config.nasa_base, config.nasa_api_key)
            }
            FactSource::Trivia => format!("{}/api.php?amount=1", config.trivia_base),
        }
    }

    /// Key the fetched payload is cached under
    pub fn cache_key(&self, term: &str) -> String {
        format!("{}:{}", self.as_str(), term.to_lowercase())
    }

    /// Canned text substituted when the fetch fails for any reason
    pub fn fallback(&self, term: &str) -> String {
        match self {
            FactSource::Wikipedia => {
                format!("{} is a fascinating topic. Look it up together later!", term)
            }
            FactSource::Dictionary => {
                format!("'{}' is a great word to look up in a print dictionary.", term)
            }
            FactSource::Nasa => {
                "Space is full of wonders. The night sky shows something new every day."
                    .to_string()
            }
            FactSource::Trivia => "Did you know? Honey never spoils.".to_string(),
        }
    }
}

impl FromStr for FactSource {
    type Err = EnrichmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wikipedia" => Ok(FactSource::Wikipedia),
            "dictionary" => Ok(FactSource::Dictionary),
            "nasa" => Ok(FactSource::Nasa),
            "trivia" => Ok(FactSource::Trivia),
            other => Err(EnrichmentError::UnknownSource(other.to_string())),
        }
    }
}
