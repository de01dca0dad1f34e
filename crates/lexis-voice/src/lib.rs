use std::time::Duration;

pub mod audio;
pub mod command;
pub mod recognizer;

pub use command::CommandVoice;
pub use recognizer::SpeechRecognizer;

/// Speech-to-text and text-to-speech
#[async_trait::async_trait]
pub trait VoiceBridge: Send + Sync {
    /// Calibrate for ambient noise, then capture one utterance and transcribe it
    async fn listen_once(&self, timeout: Duration) -> Result<String, VoiceError>;

    /// Speak `text`, returning when playback has finished
    async fn speak(&self, text: &str) -> Result<(), VoiceError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VoiceError {
    #[error("Could not understand audio")]
    NoSpeechDetected,

    #[error("Could not request results from speech recognition service: {0}")]
    RecognitionServiceUnavailable(String),

    #[error("Audio device error: {0}")]
    DeviceError(String),
}
