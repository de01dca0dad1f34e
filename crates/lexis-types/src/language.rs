use std::fmt;

use serde::{Deserialize, Serialize};

/// Translation targets offered by the language selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TargetLanguage {
    #[default]
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "zh-cn")]
    Chinese,
    #[serde(rename = "ja")]
    Japanese,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 5] = [
        TargetLanguage::Spanish,
        TargetLanguage::French,
        TargetLanguage::German,
        TargetLanguage::Chinese,
        TargetLanguage::Japanese,
    ];

    pub fn code(self) -> &'static str {
        match self {
            TargetLanguage::Spanish => "es",
            TargetLanguage::French => "fr",
            TargetLanguage::German => "de",
            TargetLanguage::Chinese => "zh-cn",
            TargetLanguage::Japanese => "ja",
        }
    }

    /// Label shown in the selector, e.g. "Spanish (es)"
    pub fn label(self) -> &'static str {
        match self {
            TargetLanguage::Spanish => "Spanish (es)",
            TargetLanguage::French => "French (fr)",
            TargetLanguage::German => "German (de)",
            TargetLanguage::Chinese => "Chinese (zh)",
            TargetLanguage::Japanese => "Japanese (ja)",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|lang| {
            lang.code() == code || (code == "zh" && *lang == TargetLanguage::Chinese)
        })
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|l| *l == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_resolve_both_ways() {
        for lang in TargetLanguage::ALL {
            assert_eq!(TargetLanguage::from_code(lang.code()), Some(lang));
            assert_eq!(TargetLanguage::from_index(lang.index()), Some(lang));
        }
        assert_eq!(TargetLanguage::from_code("ZH"), Some(TargetLanguage::Chinese));
        assert_eq!(TargetLanguage::from_code("it"), None);
    }

    #[test]
    fn serializes_as_language_code() {
        let json = serde_json::to_string(&TargetLanguage::Chinese).unwrap();
        assert_eq!(json, "\"zh-cn\"");
        let lang: TargetLanguage = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(lang, TargetLanguage::German);
    }
}
