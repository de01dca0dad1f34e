pub mod dictionary;
pub mod error;
pub mod loader;
pub mod morphy;

pub use dictionary::{PartOfSpeech, WordNet};
pub use error::LoadError;
pub use loader::WordNetLoader;
