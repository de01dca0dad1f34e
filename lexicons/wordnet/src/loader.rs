use std::path::Path;

use crate::dictionary::{LexiconDocument, WordNet};
use crate::error::LoadError;

const EMBEDDED: &str = include_str!("../data/sample.json");

pub struct WordNetLoader;

impl WordNetLoader {
    /// Load the compiled-in sample lexicon
    pub fn load_embedded() -> Result<WordNet, LoadError> {
        tracing::info!("Loading embedded WordNet sample...");
        let wordnet = WordNet::from_json(EMBEDDED)?;
        tracing::info!("Loaded {} synsets", wordnet.entry_count());
        Ok(wordnet)
    }

    /// Load a lexicon from a JSON export on disk
    pub fn load_from_file(path: &Path) -> Result<WordNet, LoadError> {
        let document = Self::read_document(path)?;
        let wordnet = WordNet::from_document(document);
        tracing::info!("Loaded {} synsets from file", wordnet.entry_count());
        Ok(wordnet)
    }

    fn read_document(path: &Path) -> Result<LexiconDocument, LoadError> {
        tracing::info!("Loading WordNet from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Primary lexicon (or the embedded sample) merged with additional files.
    ///
    /// A primary lexicon that fails to load falls back to the embedded
    /// sample. Additional files that fail to load are skipped.
    pub fn load_with_additional(primary: Option<&Path>, additional_paths: &[String]) -> WordNet {
        let embedded = || {
            serde_json::from_str::<LexiconDocument>(EMBEDDED).unwrap_or_else(|e| {
                tracing::error!("Failed to parse embedded lexicon: {}", e);
                tracing::warn!("Starting with empty lexicon");
                LexiconDocument::default()
            })
        };

        let mut document = match primary {
            Some(path) => Self::read_document(path).unwrap_or_else(|e| {
                tracing::error!("Failed to load lexicon {}: {}", path.display(), e);
                tracing::warn!("Falling back to embedded sample lexicon");
                embedded()
            }),
            None => embedded(),
        };

        for path in additional_paths {
            match Self::read_document(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional lexicon from: {}", path);
                    document = document.merge(additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load lexicon from {}: {}", path, e);
                }
            }
        }

        let wordnet = WordNet::from_document(document);
        tracing::info!("Lexicon ready with {} synsets", wordnet.entry_count());
        wordnet
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use lexis_core::LexicalAggregator;
    use lexis_core::lexicon::LexicalDatabase;
    use std::sync::Arc;

    use super::*;

    #[test]
    fn embedded_sample_loads() {
        let wordnet = WordNetLoader::load_embedded().unwrap();
        assert!(wordnet.entry_count() > 10);
        assert_eq!(wordnet.metadata().language, "en");
    }

    #[test]
    fn happy_from_embedded_sample() {
        let aggregator = LexicalAggregator::new(Arc::new(WordNetLoader::load_embedded().unwrap()));
        let record = aggregator.lookup("happy").unwrap();

        assert_eq!(record.definitions().len(), 4);
        assert_eq!(
            record.primary_definition(),
            "enjoying or showing or marked by joy or pleasure"
        );
        assert!(record.synonyms().contains(&"glad".to_string()));
        assert!(!record.synonyms().contains(&"happy".to_string()));
        assert_eq!(record.antonyms(), ["unhappy"]);
    }

    #[test]
    fn irregular_forms_use_exceptions() {
        let aggregator = LexicalAggregator::new(Arc::new(WordNetLoader::load_embedded().unwrap()));

        let ran = aggregator.lookup("ran").unwrap();
        assert!(ran.synonyms().contains(&"run".to_string()));

        let better = aggregator.lookup("better").unwrap();
        assert_eq!(
            better.primary_definition(),
            "having desirable or positive qualities especially those suitable for a thing specified"
        );
    }

    #[test]
    fn load_from_file_reports_errors() {
        let dir = tempfile::tempdir().unwrap();

        let good = dir.path().join("good.json");
        fs::write(
            &good,
            r#"{ "name": "tiny", "synsets": [{ "id": "cat.n.01", "pos": "n",
                 "definition": "feline mammal", "lemmas": [{ "name": "cat" }] }] }"#,
        )
        .unwrap();
        let wordnet = WordNetLoader::load_from_file(&good).unwrap();
        assert_eq!(wordnet.metadata().name, "tiny");
        assert_eq!(wordnet.senses_for("cats").len(), 1);

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "[1, 2").unwrap();
        assert!(matches!(
            WordNetLoader::load_from_file(&broken),
            Err(LoadError::InvalidFormat(_))
        ));

        assert!(matches!(
            WordNetLoader::load_from_file(&dir.path().join("missing.json")),
            Err(LoadError::IoError(_))
        ));
    }

    #[test]
    fn missing_primary_falls_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        let wordnet = WordNetLoader::load_with_additional(Some(&missing), &[]);
        assert_eq!(
            wordnet.entry_count(),
            WordNetLoader::load_embedded().unwrap().entry_count()
        );
    }

    #[test]
    fn additional_files_are_merged_and_bad_ones_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let extra = dir.path().join("extra.json");
        fs::write(
            &extra,
            r#"{ "synsets": [{ "id": "zzqx.n.01", "pos": "n", "definition": "a made-up word",
                 "lemmas": [{ "name": "zzqx" }] }] }"#,
        )
        .unwrap();
        let broken = dir.path().join("broken.json");
        fs::write(&broken, "not json").unwrap();

        let wordnet = WordNetLoader::load_with_additional(
            None,
            &[
                broken.display().to_string(),
                extra.display().to_string(),
            ],
        );
        assert_eq!(wordnet.senses_for("zzqx").len(), 1);
        assert!(!wordnet.senses_for("happy").is_empty());
    }
}
