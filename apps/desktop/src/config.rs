use std::{collections::HashMap, fs};

use client_core::DEFAULT_API_URL;

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub api_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            api_key: None,
        }
    }
}

/// Defaults, then `breeds.toml` in the working directory, then environment
/// variables, lowest to highest precedence.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("breeds.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            apply_file_overrides(&mut settings, &file_cfg);
        }
    }

    if let Ok(v) = std::env::var("DOG_API_URL") {
        settings.api_url = v;
    }
    if let Ok(v) = std::env::var("DOG_API_KEY") {
        settings.api_key = Some(v);
    }

    settings
}

fn apply_file_overrides(settings: &mut Settings, file_cfg: &HashMap<String, String>) {
    if let Some(v) = file_cfg.get("api_url") {
        settings.api_url = v.clone();
    }
    if let Some(v) = file_cfg.get("api_key") {
        settings.api_key = Some(v.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_public_api() {
        let settings = Settings::default();
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn file_overrides_replace_defaults() {
        let mut settings = Settings::default();
        let mut file_cfg = HashMap::new();
        file_cfg.insert("api_url".to_string(), "http://localhost:9000/v1".to_string());
        file_cfg.insert("api_key".to_string(), "local-key".to_string());

        apply_file_overrides(&mut settings, &file_cfg);
        assert_eq!(settings.api_url, "http://localhost:9000/v1");
        assert_eq!(settings.api_key.as_deref(), Some("local-key"));
    }

    #[test]
    fn unknown_file_keys_are_ignored() {
        let mut settings = Settings::default();
        let mut file_cfg = HashMap::new();
        file_cfg.insert("api_token".to_string(), "nope".to_string());

        apply_file_overrides(&mut settings, &file_cfg);
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert!(settings.api_key.is_none());
    }
}
