//*** START FILE: src/entries_io.rs ***//
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::VocabError;
use crate::types::word_entry::WordEntries;

/// Loads the headword -> senses JSON store.
pub fn load_word_entries(file_path: &Path) -> Result<WordEntries, VocabError> {
    let file = File::open(file_path).map_err(|e| VocabError::io(file_path, e))?;
    let reader = BufReader::new(file);

    let entries: WordEntries = serde_json::from_reader(reader).map_err(|e| {
        VocabError::DecodeFailure(format!("word entries {}: {}", file_path.display(), e))
    })?;

    for (word, senses) in &entries {
        if senses.is_empty() {
            tracing::warn!("Word entry '{}' has no senses", word);
        }
    }
    tracing::debug!("Loaded {} word entries from {}", entries.len(), file_path.display());
    Ok(entries)
}

/// The word bank printed above a fill-in-the-gap sheet: each headword once,
/// sorted, separated by `\qquad`.
pub fn word_bank(entries: &WordEntries) -> String {
    // BTreeMap keys are already unique and sorted.
    entries.keys().map(String::as_str).collect::<Vec<_>>().join(r" \qquad ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::word_entry::Example;

    const ENTRIES: &str = r#"{
        "remind": [{
            "definition": "to make someone remember something",
            "part of speech": "verb",
            "Chinese": "提醒",
            "examples": ["Remind me to call her.", {"English": "That reminds me.", "Chinese": "这提醒了我。"}],
            "collocations": {"noun": [{"key": "reminder"}]}
        }],
        "apple": [{"definition": "a fruit"}]
    }"#;

    #[test]
    fn loads_entries_with_mixed_examples() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, ENTRIES.as_bytes()).unwrap();

        let entries = load_word_entries(file.path()).unwrap();
        let remind = &entries["remind"][0];
        assert_eq!(remind.part_of_speech.as_deref(), Some("verb"));
        assert_eq!(remind.examples[0].english(), "Remind me to call her.");
        assert!(matches!(remind.examples[1], Example::Bilingual { .. }));
        assert_eq!(remind.collocations["noun"][0].key, "reminder");
        assert!(entries["apple"][0].examples.is_empty());
    }

    #[test]
    fn word_bank_is_sorted() {
        let entries: WordEntries = serde_json::from_str(ENTRIES).unwrap();
        assert_eq!(word_bank(&entries), r"apple \qquad remind");
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_word_entries(Path::new("no_such_entries_12345.json"));
        assert!(matches!(result, Err(VocabError::Io { .. })));
    }

    #[test]
    fn malformed_file_is_decode_failure() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"{\"remind\": 3}").unwrap();
        assert!(matches!(load_word_entries(file.path()), Err(VocabError::DecodeFailure(_))));
    }
}
//*** END FILE: src/entries_io.rs ***//
