use crate::language::TargetLanguage;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    // UI -> backend
    Search(String),
    VoiceInput,
    Speak(String),
    LanguageSelected {
        language: TargetLanguage,
        /// Current content of the search field
        text: String,
    },
    Shutdown,

    // Backend -> UI
    BackendReady {
        history: Vec<String>,
    },
    ShowDefinition(String),
    ShowTranslation(String),
    ShowHistory(Vec<String>),
    SetSearchText(String),
    VoiceStatus {
        listening: bool,
    },
    Notice(Notice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Non-fatal message shown inline in the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Status line text, prefixed like the dialog titles of a message box
    pub fn display(&self) -> String {
        match self.level {
            NoticeLevel::Info => self.message.clone(),
            NoticeLevel::Warning => format!("Warning: {}", self.message),
            NoticeLevel::Error => format!("Error: {}", self.message),
        }
    }
}

impl From<Notice> for AppEvent {
    fn from(notice: Notice) -> Self {
        AppEvent::Notice(notice)
    }
}
