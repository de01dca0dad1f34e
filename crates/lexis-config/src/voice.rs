use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_listen_timeout_seconds() -> u32 {
    5
}

fn default_calibration_seconds() -> u32 {
    1
}

fn default_sample_rate() -> u32 {
    16000
}

fn default_capture_command() -> String {
    "arecord".to_string()
}

/// `{seconds}` and `{rate}` are substituted before spawning
fn default_capture_args() -> Vec<String> {
    ["-q", "-f", "S16_LE", "-r", "{rate}", "-c", "1", "-t", "raw", "-d", "{seconds}"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_min_energy_threshold() -> f32 {
    300.0
}

fn default_dynamic_energy_ratio() -> f32 {
    1.5
}

fn default_recognizer_url() -> String {
    "http://localhost:8000/v1/audio/transcriptions".to_string()
}

fn default_recognizer_model() -> String {
    "whisper-1".to_string()
}

fn default_speak_command() -> String {
    "espeak".to_string()
}

/// `{text}` is substituted before spawning
fn default_speak_args() -> Vec<String> {
    vec!["{text}".to_string()]
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct VoiceConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_listen_timeout_seconds")]
    pub listen_timeout_seconds: u32,
    #[serde(default = "default_calibration_seconds")]
    pub calibration_seconds: u32,
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    #[serde(default = "default_capture_command")]
    pub capture_command: String,
    #[serde(default = "default_capture_args")]
    pub capture_args: Vec<String>,
    #[serde(default = "default_min_energy_threshold")]
    pub min_energy_threshold: f32,
    #[serde(default = "default_dynamic_energy_ratio")]
    pub dynamic_energy_ratio: f32,
    /// OpenAI-compatible transcription endpoint
    #[serde(default = "default_recognizer_url")]
    pub recognizer_url: String,
    #[serde(default = "default_recognizer_model")]
    pub recognizer_model: String,
    #[serde(default)]
    pub recognizer_api_key: String,
    #[serde(default = "default_speak_command")]
    pub speak_command: String,
    #[serde(default = "default_speak_args")]
    pub speak_args: Vec<String>,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            listen_timeout_seconds: default_listen_timeout_seconds(),
            calibration_seconds: default_calibration_seconds(),
            sample_rate: default_sample_rate(),
            capture_command: default_capture_command(),
            capture_args: default_capture_args(),
            min_energy_threshold: default_min_energy_threshold(),
            dynamic_energy_ratio: default_dynamic_energy_ratio(),
            recognizer_url: default_recognizer_url(),
            recognizer_model: default_recognizer_model(),
            recognizer_api_key: String::new(),
            speak_command: default_speak_command(),
            speak_args: default_speak_args(),
        }
    }
}
