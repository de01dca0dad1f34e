use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use directories_next::ProjectDirs;
use lexis_config::Config;
use serde::{Deserialize, Serialize};

/// Default config shipped in the repo, or built-in defaults when absent
fn load_repo_default_config() -> anyhow::Result<Config> {
    let path = Path::new("config.json");
    if !path.exists() {
        tracing::info!("No repo config.json, using built-in defaults");
        return Ok(Config::default());
    }

    tracing::info!("Loading repo default config...");
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

fn profiles_dir() -> anyhow::Result<PathBuf> {
    let dirs = ProjectDirs::from("org", "Lexis", "Lexis")
        .ok_or_else(|| anyhow::anyhow!("could not determine the user config directory"))?;
    Ok(dirs.config_dir().join("profiles"))
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Create the profiles folder and the main profile if missing
pub fn init_user_config() -> anyhow::Result<PathBuf> {
    let dir = profiles_dir()?;
    init_profiles_in(&dir)?;
    Ok(dir)
}

fn init_profiles_in(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)?;

    let main_profile = dir.join("main.json");
    if !main_profile.exists() {
        let profile = Profile {
            name: "main".into(),
            value: load_repo_default_config()?,
        };
        fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("Created main profile at {}", main_profile.display());
    }

    Ok(())
}

/// Load a profile by name from `dir`, falling back to main, then to the repo default
pub fn load_user_profile(dir: &Path, name: &str) -> anyhow::Result<Config> {
    let profile_file = dir.join(format!("{name}.json"));
    if profile_file.exists() {
        return read_profile(&profile_file);
    }

    tracing::warn!("Profile {name} not found, falling back to main profile or repo default");
    let main_file = dir.join("main.json");
    if main_file.exists() {
        read_profile(&main_file)
    } else {
        load_repo_default_config()
    }
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&data)?;
    tracing::info!("Loaded profile '{}'", profile.name);
    Ok(profile.value)
}

#[cfg(test)]
mod tests {
    use lexis_types::TargetLanguage;

    use super::*;

    #[test]
    fn init_creates_main_profile_once() {
        let dir = tempfile::tempdir().unwrap();
        let profiles = dir.path().join("profiles");

        init_profiles_in(&profiles).unwrap();
        let main = profiles.join("main.json");
        assert!(main.exists());

        fs::write(&main, r#"{ "name": "main", "value": { "ui": { "title": "Mine" } } }"#).unwrap();
        init_profiles_in(&profiles).unwrap();
        assert_eq!(load_user_profile(&profiles, "main").unwrap().ui.title, "Mine");
    }

    #[test]
    fn named_profile_then_main_fallback() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("main.json"),
            r#"{ "name": "main", "value": {} }"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("travel.json"),
            r#"{ "name": "travel", "value": { "translator": { "to_lang": "ja" } } }"#,
        )
        .unwrap();

        let travel = load_user_profile(dir.path(), "travel").unwrap();
        assert_eq!(travel.translator.to_lang, TargetLanguage::Japanese);

        let missing = load_user_profile(dir.path(), "nope").unwrap();
        assert_eq!(missing.translator.to_lang, TargetLanguage::Spanish);
    }

    #[test]
    fn broken_profile_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("main.json"), "{").unwrap();
        assert!(load_user_profile(dir.path(), "main").is_err());
    }
}
