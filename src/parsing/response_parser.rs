//*** START FILE: src/parsing/response_parser.rs ***//
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;

use crate::error::VocabError;

// Models like to wrap JSON in ```json ... ``` fences, sometimes with chatter around them.
static FENCED_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:json|JSON)?\s*\n?(.*?)```").expect("valid fence regex"));

/// Pulls the JSON payload out of a model response: the first fenced block if
/// there is one, otherwise the whole trimmed text.
pub fn extract_json_payload(response: &str) -> &str {
    match FENCED_BLOCK_RE.captures(response).and_then(|caps| caps.get(1)) {
        Some(m) => m.as_str().trim(),
        None => response.trim(),
    }
}

/// Decodes a model response into a list of records.
pub fn parse_records<R: DeserializeOwned>(response: &str) -> Result<Vec<R>, VocabError> {
    let payload = extract_json_payload(response);
    if payload.is_empty() {
        return Err(VocabError::DecodeFailure("response contains no JSON payload".to_string()));
    }
    serde_json::from_str::<Vec<R>>(payload)
        .map_err(|e| VocabError::DecodeFailure(format!("model response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::exercise_data::CollocationRecord;

    #[test]
    fn fenced_payload_is_extracted() {
        let response = "Sure! Here you go:\n```json\n[1, 2]\n```\nEnjoy.";
        assert_eq!(extract_json_payload(response), "[1, 2]");
    }

    #[test]
    fn bare_payload_is_used_as_is() {
        assert_eq!(extract_json_payload("  [1]\n"), "[1]");
    }

    #[test]
    fn records_decode_with_renamed_keys() {
        let response = r#"```
[{"key": "make", "category": "verb", "new example": "Make a decision.", "matching part": "make a decision"}]
```"#;
        let records: Vec<CollocationRecord> = parse_records(response).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].matching_part, "make a decision");
        assert_eq!(records[0].word, "");
    }

    #[test]
    fn malformed_json_is_decode_failure() {
        let result: Result<Vec<CollocationRecord>, _> = parse_records("[{\"key\": }]");
        assert!(matches!(result, Err(VocabError::DecodeFailure(_))));
    }

    #[test]
    fn empty_response_is_decode_failure() {
        let result: Result<Vec<CollocationRecord>, _> = parse_records("```json\n```");
        assert!(matches!(result, Err(VocabError::DecodeFailure(_))));
    }
}
//*** END FILE: src/parsing/response_parser.rs ***//
