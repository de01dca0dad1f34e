use crate::error::LookupError;

pub trait Preprocessor {
    /// Prepare raw search-field text for lookup
    fn process(&self, text: &str) -> Result<String, LookupError> {
        let text = text.trim();

        if text.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        Ok(text.to_string())
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
