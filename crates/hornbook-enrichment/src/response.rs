//! Response shapes for the fact APIs
//!
//! Each struct declares only the fields the client actually reads; the
//! APIs return far more.

use serde::Deserialize;

/// Wikipedia REST `page/summary` payload
#[derive(Debug, Deserialize)]
pub struct WikipediaSummary {
    #[serde(default)]
    pub extract: String,
}

/// One dictionaryapi.dev entry (the API returns an array of these)
#[derive(Debug, Deserialize)]
pub struct DictionaryEntry {
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
pub struct Meaning {
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Deserialize)]
pub struct Definition {
    pub definition: String,
}

/// NASA Astronomy Picture of the Day payload
#[derive(Debug, Deserialize)]
pub struct ApodResponse {
    pub title: String,
    pub explanation: String,
}

/// Open Trivia DB payload
#[derive(Debug, Deserialize)]
pub struct TriviaResponse {
    #[serde(default)]
    pub results: Vec<TriviaResult>,
}

#[derive(Debug, Deserialize)]
pub struct TriviaResult {
    pub question: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wikipedia_summary_tolerates_missing_extract() {
        let summary: WikipediaSummary =
            serde_json::from_str(r#"{"title": "Gravity"}"#).unwrap();
        assert!(summary.extract.is_empty());
    }

    #[test]
    fn test_dictionary_nested_shape() {
        let json = r#"[{
            "word": "planet",
            "meanings": [{
                "partOfSpeech": "noun",
                "definitions": [
                    {"definition": "A large body orbiting a star."},
                    {"definition": "A wanderer."}
                ]
            }]
        }]"#;
        let entries: Vec<DictionaryEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(
            entries[0].meanings[0].definitions[0].definition,
            "A large body orbiting a star."
        );
    }

    #[test]
    fn test_trivia_results_default_to_empty() {
        let response: TriviaResponse = serde_json::from_str(r#"{"response_code": 1}"#).unwrap();
        assert!(response.results.is_empty());
    }
}
