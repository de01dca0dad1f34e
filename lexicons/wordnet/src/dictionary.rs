use std::collections::{HashMap, HashSet};

use lexis_core::lexicon::{Lemma, LexicalDatabase, LexiconMetadata, Sense};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::LoadError;
use crate::morphy::morphy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[serde(rename = "n")]
    Noun,
    #[serde(rename = "v")]
    Verb,
    #[serde(rename = "a")]
    Adjective,
    #[serde(rename = "s")]
    AdjectiveSatellite,
    #[serde(rename = "r")]
    Adverb,
}

impl PartOfSpeech {
    /// Order in which senses are reported
    pub const QUERY_ORDER: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "n" => Some(PartOfSpeech::Noun),
            "v" => Some(PartOfSpeech::Verb),
            "a" => Some(PartOfSpeech::Adjective),
            "s" => Some(PartOfSpeech::AdjectiveSatellite),
            "r" => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }

    /// Satellites are looked up together with head adjectives
    fn index_pos(self) -> Self {
        match self {
            PartOfSpeech::AdjectiveSatellite => PartOfSpeech::Adjective,
            other => other,
        }
    }
}

// JSON structures of the WordNet export
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiconDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub synsets: Vec<SynsetRecord>,
    /// POS code -> inflected form -> base forms
    #[serde(default)]
    pub exceptions: HashMap<String, HashMap<String, Vec<String>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynsetRecord {
    pub id: String,
    pub pos: PartOfSpeech,
    pub definition: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub lemmas: Vec<LemmaRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LemmaRecord {
    pub name: String,
    /// Lemma keys, `<synset id>.<lemma name>`
    #[serde(default)]
    pub antonyms: Vec<String>,
}

impl LexiconDocument {
    /// Synsets of `other` replace synsets with the same id, new ones are appended
    pub fn merge(mut self, other: LexiconDocument) -> Self {
        let mut positions: HashMap<String, usize> = self
            .synsets
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();

        for synset in other.synsets {
            match positions.get(&synset.id) {
                Some(&i) => self.synsets[i] = synset,
                None => {
                    positions.insert(synset.id.clone(), self.synsets.len());
                    self.synsets.push(synset);
                }
            }
        }

        for (pos, forms) in other.exceptions {
            self.exceptions.entry(pos).or_default().extend(forms);
        }

        self
    }
}

#[derive(Debug, Clone, Copy)]
struct LemmaId {
    synset: usize,
    lemma: usize,
}

#[derive(Debug)]
struct LemmaNode {
    name: String,
    antonyms: Vec<LemmaId>,
}

#[derive(Debug)]
struct Synset {
    definition: String,
    examples: Vec<String>,
    lemmas: Vec<LemmaNode>,
}

/// WordNet sense graph with a lemma index
#[derive(Debug)]
pub struct WordNet {
    name: String,
    version: String,
    language: String,
    synsets: Vec<Synset>,
    lemma_index: HashMap<(String, PartOfSpeech), Vec<usize>>,
    exceptions: HashMap<PartOfSpeech, HashMap<String, Vec<String>>>,
}

/// Index key: NFKC, lower case, spaces as underscores
pub fn normalize_key(text: &str) -> String {
    text.trim()
        .nfkc()
        .collect::<String>()
        .to_lowercase()
        .replace(' ', "_")
}

impl WordNet {
    pub fn new() -> Self {
        Self::from_document(LexiconDocument::default())
    }

    /// Load from a JSON export
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let document: LexiconDocument = serde_json::from_str(json_str)?;
        Ok(Self::from_document(document))
    }

    pub fn from_document(document: LexiconDocument) -> Self {
        // Identical ids inside one document: the later synset wins
        let header = LexiconDocument {
            name: document.name.clone(),
            version: document.version.clone(),
            language: document.language.clone(),
            ..LexiconDocument::default()
        };
        let document = header.merge(document);

        let mut keys: HashMap<String, LemmaId> = HashMap::new();
        for (s, synset) in document.synsets.iter().enumerate() {
            for (l, lemma) in synset.lemmas.iter().enumerate() {
                keys.insert(
                    format!("{}.{}", synset.id, lemma.name),
                    LemmaId {
                        synset: s,
                        lemma: l,
                    },
                );
            }
        }

        let mut synsets = Vec::with_capacity(document.synsets.len());
        let mut lemma_index: HashMap<(String, PartOfSpeech), Vec<usize>> = HashMap::new();

        for (s, record) in document.synsets.into_iter().enumerate() {
            let pos = record.pos.index_pos();
            let mut lemmas = Vec::with_capacity(record.lemmas.len());

            for lemma in record.lemmas {
                let antonyms = lemma
                    .antonyms
                    .iter()
                    .filter_map(|key| {
                        let id = keys.get(key).copied();
                        if id.is_none() {
                            tracing::warn!(
                                "Unresolved antonym '{}' of lemma '{}' in synset '{}'",
                                key,
                                lemma.name,
                                record.id
                            );
                        }
                        id
                    })
                    .collect();

                let indexed = lemma_index.entry((normalize_key(&lemma.name), pos)).or_default();
                if indexed.last() != Some(&s) {
                    indexed.push(s);
                }

                lemmas.push(LemmaNode {
                    name: lemma.name,
                    antonyms,
                });
            }

            synsets.push(Synset {
                definition: record.definition,
                examples: record.examples,
                lemmas,
            });
        }

        let mut exceptions: HashMap<PartOfSpeech, HashMap<String, Vec<String>>> = HashMap::new();
        for (code, forms) in document.exceptions {
            let Some(pos) = PartOfSpeech::from_code(&code) else {
                tracing::warn!("Ignoring exceptions for unknown part of speech '{}'", code);
                continue;
            };
            let target = exceptions.entry(pos.index_pos()).or_default();
            for (form, bases) in forms {
                target.insert(
                    normalize_key(&form),
                    bases.iter().map(|b| normalize_key(b)).collect(),
                );
            }
        }

        Self {
            name: document.name,
            version: document.version,
            language: document.language,
            synsets,
            lemma_index,
            exceptions,
        }
    }

    /// Get the number of synsets in the lexicon
    pub fn entry_count(&self) -> usize {
        self.synsets.len()
    }

    fn is_indexed(&self, form: &str, pos: PartOfSpeech) -> bool {
        self.lemma_index.contains_key(&(form.to_string(), pos))
    }

    fn lemma(&self, id: LemmaId) -> Option<&LemmaNode> {
        self.synsets.get(id.synset)?.lemmas.get(id.lemma)
    }
}

impl Default for WordNet {
    fn default() -> Self {
        Self::new()
    }
}

impl LexicalDatabase for WordNet {
    fn senses_for(&self, word: &str) -> Vec<Box<dyn Sense + '_>> {
        let form = normalize_key(word);
        if form.is_empty() {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        let mut senses: Vec<Box<dyn Sense + '_>> = Vec::new();

        for pos in PartOfSpeech::QUERY_ORDER {
            let forms = morphy(&form, pos, self.exceptions.get(&pos), |f| {
                self.is_indexed(f, pos)
            });

            for base in forms {
                let Some(indices) = self.lemma_index.get(&(base, pos)) else {
                    continue;
                };
                for &i in indices {
                    if seen.insert(i) {
                        senses.push(Box::new(SynsetView {
                            db: self,
                            synset: &self.synsets[i],
                        }));
                    }
                }
            }
        }

        senses
    }

    fn metadata(&self) -> LexiconMetadata {
        LexiconMetadata {
            name: self.name.clone(),
            version: self.version.clone(),
            language: self.language.clone(),
            sense_count: self.synsets.len(),
        }
    }
}

struct SynsetView<'a> {
    db: &'a WordNet,
    synset: &'a Synset,
}

impl Sense for SynsetView<'_> {
    fn definition(&self) -> String {
        self.synset.definition.clone()
    }

    fn examples(&self) -> Vec<String> {
        self.synset.examples.clone()
    }

    fn lemmas(&self) -> Vec<Box<dyn Lemma + '_>> {
        self.synset
            .lemmas
            .iter()
            .map(|lemma| Box::new(LemmaView { db: self.db, lemma }) as Box<dyn Lemma + '_>)
            .collect()
    }
}

struct LemmaView<'a> {
    db: &'a WordNet,
    lemma: &'a LemmaNode,
}

impl Lemma for LemmaView<'_> {
    fn name(&self) -> String {
        self.lemma.name.clone()
    }

    fn antonyms(&self) -> Vec<Box<dyn Lemma + '_>> {
        self.lemma
            .antonyms
            .iter()
            .filter_map(|&id| self.db.lemma(id))
            .map(|lemma| Box::new(LemmaView { db: self.db, lemma }) as Box<dyn Lemma + '_>)
            .collect()
    }
}
