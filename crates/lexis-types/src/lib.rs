pub mod language;
pub mod types;

pub use language::TargetLanguage;
pub use types::{AppEvent, Notice, NoticeLevel};
