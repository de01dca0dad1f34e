use serde::Serialize;

/// Aggregated result of a single lookup. Built by
/// [`LexicalAggregator`](crate::LexicalAggregator), immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRecord {
    word: String,
    definitions: Vec<String>,
    examples: Vec<String>,
    synonyms: Vec<String>,
    antonyms: Vec<String>,
}

impl WordRecord {
    pub(crate) fn new(
        word: String,
        definitions: Vec<String>,
        examples: Vec<String>,
        synonyms: Vec<String>,
        antonyms: Vec<String>,
    ) -> Self {
        Self {
            word,
            definitions,
            examples,
            synonyms,
            antonyms,
        }
    }

    /// The queried term, exactly as submitted
    pub fn word(&self) -> &str {
        &self.word
    }

    /// One per sense, in database order. Never empty.
    pub fn definitions(&self) -> &[String] {
        &self.definitions
    }

    pub fn primary_definition(&self) -> &str {
        self.definitions.first().map(String::as_str).unwrap_or_default()
    }

    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    /// Unique, in order of first occurrence
    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    /// Unique, in order of first occurrence
    pub fn antonyms(&self) -> &[String] {
        &self.antonyms
    }
}
