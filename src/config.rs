use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::VocabError;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MarkerConfig {
    /// Width of a `\fillin` blank per character of the answer.
    pub inches_per_char: f64,
    /// `\fillin` blanks never get narrower than this.
    pub min_inches: f64,
    /// Width of a `\rule` blank per character of the answer.
    pub rule_cm_per_char: f64,
    /// Shortest underscore run.
    pub min_underscores: usize,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            inches_per_char: 0.12,
            min_inches: 0.6,
            rule_cm_per_char: 0.25,
            min_underscores: 3,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// JSON object of `"form": "lemma"` pairs layered over the built-in lemma table.
    pub lemma_overrides: Option<PathBuf>,
    pub markers: MarkerConfig,
}

pub fn load_config_from_file(file_path: &Path) -> Result<Config, VocabError> {
    let contents = match fs::read_to_string(file_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("{} not found, using default configuration", file_path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(VocabError::io(file_path, e)),
    };

    let loaded_config = toml::from_str::<Config>(&contents)
        .map_err(|e| VocabError::Config(format!("Failed to parse {}: {}", file_path.display(), e)))?;

    if let Some(overrides) = &loaded_config.lemma_overrides {
        if !overrides.is_file() {
            return Err(VocabError::Config(format!(
                "lemma_overrides specified in {} ('{}') is not a readable file.",
                file_path.display(),
                overrides.display()
            )));
        }
    }
    if loaded_config.markers.inches_per_char <= 0.0 || loaded_config.markers.rule_cm_per_char <= 0.0 {
        return Err(VocabError::Config(format!(
            "Marker widths in {} must be positive.",
            file_path.display()
        )));
    }

    Ok(loaded_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from_file(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_marker_table_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[markers]\ninches_per_char = 0.2").unwrap();

        let config = load_config_from_file(file.path()).unwrap();
        assert_eq!(config.markers.inches_per_char, 0.2);
        assert_eq!(config.markers.min_inches, 0.6);
        assert!(config.lemma_overrides.is_none());
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "markers = [").unwrap();

        match load_config_from_file(file.path()) {
            Err(VocabError::Config(msg)) => assert!(msg.contains("Failed to parse")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn dangling_lemma_overrides_path_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lemma_overrides = \"/definitely/not/here.json\"").unwrap();

        assert!(matches!(load_config_from_file(file.path()), Err(VocabError::Config(_))));
    }
}
