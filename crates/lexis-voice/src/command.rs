use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use lexis_config::voice::VoiceConfig;
use tokio::process::Command;

use crate::audio::{EnergyThreshold, samples_from_bytes, wav_from_pcm};
use crate::recognizer::SpeechRecognizer;
use crate::{VoiceBridge, VoiceError};

/// Voice bridge backed by external programs: a capture command writing raw
/// PCM to stdout, an HTTP recognizer, and a text-to-speech command.
pub struct CommandVoice {
    config: VoiceConfig,
    recognizer: SpeechRecognizer,
}

impl CommandVoice {
    pub fn new(config: VoiceConfig) -> Self {
        let recognizer = SpeechRecognizer::new(
            config.recognizer_url.clone(),
            config.recognizer_model.clone(),
            config.recognizer_api_key.clone(),
        );
        Self { config, recognizer }
    }

    /// Record `seconds` of audio as raw PCM bytes
    async fn capture(&self, seconds: u32) -> Result<Vec<u8>, VoiceError> {
        let rate = self.config.sample_rate.to_string();
        let seconds = seconds.max(1).to_string();
        let args = substitute(
            &self.config.capture_args,
            &[("{seconds}", seconds.as_str()), ("{rate}", rate.as_str())],
        );

        tracing::debug!("Capturing {}s: {} {:?}", seconds, self.config.capture_command, args);

        let output = Command::new(&self.config.capture_command)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                VoiceError::DeviceError(format!("{}: {}", self.config.capture_command, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VoiceError::DeviceError(format!(
                "{} exited with {}: {}",
                self.config.capture_command,
                output.status,
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl VoiceBridge for CommandVoice {
    async fn listen_once(&self, timeout: Duration) -> Result<String, VoiceError> {
        let ambient = self.capture(self.config.calibration_seconds).await?;
        let threshold = EnergyThreshold::calibrate(
            &samples_from_bytes(&ambient),
            self.config.min_energy_threshold,
            self.config.dynamic_energy_ratio,
        );
        tracing::debug!("Ambient noise threshold: {:.1}", threshold.0);

        let seconds = timeout.as_secs().clamp(1, u64::from(u32::MAX)) as u32;
        let pcm = self.capture(seconds).await?;

        if !threshold.detects_speech(&samples_from_bytes(&pcm), self.config.sample_rate) {
            tracing::info!("No speech above threshold in {}s capture", seconds);
            return Err(VoiceError::NoSpeechDetected);
        }

        let text = self
            .recognizer
            .recognize(wav_from_pcm(&pcm, self.config.sample_rate))
            .await?;
        tracing::info!("Recognized speech: '{}'", text);
        Ok(text)
    }

    async fn speak(&self, text: &str) -> Result<(), VoiceError> {
        let args = substitute(&self.config.speak_args, &[("{text}", text)]);

        let status = Command::new(&self.config.speak_command)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                VoiceError::DeviceError(format!("{}: {}", self.config.speak_command, e))
            })?;

        if !status.success() {
            return Err(VoiceError::DeviceError(format!(
                "{} exited with {}",
                self.config.speak_command, status
            )));
        }

        Ok(())
    }
}

fn substitute(args: &[String], vars: &[(&str, &str)]) -> Vec<String> {
    args.iter()
        .map(|arg| {
            vars.iter()
                .fold(arg.clone(), |acc, (key, value)| acc.replace(key, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(capture_command: &str, capture_args: &[&str]) -> VoiceConfig {
        VoiceConfig {
            capture_command: capture_command.to_string(),
            capture_args: capture_args.iter().map(|s| s.to_string()).collect(),
            recognizer_url: "http://127.0.0.1:9/v1/audio/transcriptions".to_string(),
            ..VoiceConfig::default()
        }
    }

    #[test]
    fn substitutes_placeholders() {
        let args = vec!["-d".to_string(), "{seconds}".to_string(), "-r{rate}".to_string()];
        let out = substitute(&args, &[("{seconds}", "5"), ("{rate}", "16000")]);
        assert_eq!(out, vec!["-d", "5", "-r16000"]);
    }

    #[tokio::test]
    async fn missing_capture_program_is_device_error() {
        let voice = CommandVoice::new(config("lexis-no-such-recorder", &[]));
        let result = voice.listen_once(Duration::from_secs(1)).await;
        assert!(matches!(result, Err(VoiceError::DeviceError(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn silent_capture_is_no_speech() {
        // 0.1s of zero samples for both calibration and capture
        let voice = CommandVoice::new(config("head", &["-c", "3200", "/dev/zero"]));
        let result = voice.listen_once(Duration::from_secs(1)).await;
        assert_eq!(result, Err(VoiceError::NoSpeechDetected));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_capture_is_device_error() {
        let voice = CommandVoice::new(config("false", &[]));
        let result = voice.listen_once(Duration::from_secs(1)).await;
        assert!(matches!(result, Err(VoiceError::DeviceError(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn speak_waits_for_command() {
        let voice = CommandVoice::new(VoiceConfig {
            speak_command: "true".to_string(),
            ..VoiceConfig::default()
        });
        assert!(voice.speak("happy").await.is_ok());
    }
}
