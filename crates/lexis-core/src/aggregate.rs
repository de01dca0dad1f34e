use std::collections::HashSet;
use std::sync::Arc;

use crate::error::LookupError;
use crate::lexicon::LexicalDatabase;
use crate::types::WordRecord;

/// Flattens the sense graph of a word into a [`WordRecord`].
///
/// Definitions and examples keep one entry per sense and are never
/// deduplicated. Synonyms and antonyms recur across senses and are kept
/// unique, in order of first occurrence. For every lemma with antonyms only
/// the first listed antonym is taken.
#[derive(Clone)]
pub struct LexicalAggregator {
    database: Arc<dyn LexicalDatabase>,
}

impl LexicalAggregator {
    pub fn new(database: Arc<dyn LexicalDatabase>) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &dyn LexicalDatabase {
        self.database.as_ref()
    }

    pub fn lookup(&self, word: &str) -> Result<WordRecord, LookupError> {
        let senses = self.database.senses_for(word);
        if senses.is_empty() {
            return Err(LookupError::NotFound {
                word: word.to_string(),
            });
        }

        let mut definitions = Vec::with_capacity(senses.len());
        let mut examples = Vec::new();
        let mut synonyms = OrderedSet::default();
        let mut antonyms = OrderedSet::default();

        for sense in &senses {
            definitions.push(sense.definition());
            examples.extend(sense.examples());

            for lemma in sense.lemmas() {
                let name = lemma.name();
                if name != word {
                    synonyms.insert(name);
                }
                if let Some(first) = lemma.antonyms().first() {
                    antonyms.insert(first.name());
                }
            }
        }

        tracing::debug!(
            "lookup '{}': {} senses, {} synonyms, {} antonyms",
            word,
            definitions.len(),
            synonyms.len(),
            antonyms.len()
        );

        Ok(WordRecord::new(
            word.to_string(),
            definitions,
            examples,
            synonyms.into_vec(),
            antonyms.into_vec(),
        ))
    }
}

/// Insertion-ordered set of strings
#[derive(Default)]
struct OrderedSet {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl OrderedSet {
    fn insert(&mut self, value: String) {
        if self.seen.insert(value.clone()) {
            self.items.push(value);
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn into_vec(self) -> Vec<String> {
        self.items
    }
}
