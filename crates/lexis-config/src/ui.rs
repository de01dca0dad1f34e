use serde::{Deserialize, Serialize};

fn default_title() -> String {
    "Offline Dictionary".to_string()
}

fn default_history_preview_chars() -> usize {
    100
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Characters of the primary definition shown per history line
    #[serde(default = "default_history_preview_chars")]
    pub history_preview_chars: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            history_preview_chars: default_history_preview_chars(),
        }
    }
}
