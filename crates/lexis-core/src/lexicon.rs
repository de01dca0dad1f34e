/// Read-only word-sense database
pub trait LexicalDatabase: Send + Sync {
    /// All senses of `word`, most salient first
    fn senses_for(&self, word: &str) -> Vec<Box<dyn Sense + '_>>;

    /// Get lexicon metadata
    fn metadata(&self) -> LexiconMetadata;
}

/// One distinct meaning (synset)
pub trait Sense {
    fn definition(&self) -> String;

    /// Usage examples in database order
    fn examples(&self) -> Vec<String>;

    /// Surface forms attached to this sense
    fn lemmas(&self) -> Vec<Box<dyn Lemma + '_>>;
}

/// Surface form of a sense
pub trait Lemma {
    fn name(&self) -> String;

    /// Antonym lemmas in database order
    fn antonyms(&self) -> Vec<Box<dyn Lemma + '_>>;
}

#[derive(Debug, Clone)]
pub struct LexiconMetadata {
    pub name: String,
    pub version: String,
    pub language: String,
    pub sense_count: usize,
}
