pub mod aggregate;
pub mod error;
pub mod history;
pub mod lexicon;
pub mod preprocess;
pub mod present;
pub mod types;

pub use aggregate::LexicalAggregator;
pub use error::LookupError;
pub use history::{HISTORY_CAPACITY, HistoryEntry, HistoryStore};
pub use lexicon::{Lemma, LexicalDatabase, LexiconMetadata, Sense};
pub use types::WordRecord;
