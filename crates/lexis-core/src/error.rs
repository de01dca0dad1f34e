#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Word '{word}' not found")]
    NotFound { word: String },

    #[error("Please enter a word")]
    EmptyQuery,
}
