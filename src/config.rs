use crate::{
    err::ConfigError,
    report::{Exclamation, Mode},
    style::OutcomeStyle,
    template::Fragments,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The report line, e.g. `"Passed: {passed}, Failed: {failed}"`
    pub template: Fragments,
    pub mode: Mode,
    pub exclamation: Exclamation,
    pub style: OutcomeStyle,
}

impl Config {
    /// Loads the config from `path` if given, otherwise from the first
    /// `tally/config.{toml,json}` found in the user's config directory.
    ///
    /// A missing default file is not an error, the defaults are used instead.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }

            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn default_path() -> Option<PathBuf> {
        let config_dir = dirs::config_dir()?.join("tally");

        let possible_paths = [config_dir.join("config.toml"), config_dir.join("config.json")];

        possible_paths.into_iter().find(|p| p.exists())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "loading config");

        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| ConfigError::ParsingError(e.to_string()))
            }

            Some("json") => {
                serde_json::from_str(&content).map_err(|e| ConfigError::ParsingError(e.to_string()))
            }

            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use std::io::Write;

    fn write_config(ext: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(&format!(".{ext}"))
            .tempfile()
            .unwrap();

        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_toml_is_default() {
        let file = write_config("toml", "");
        let config = Config::from_file(file.path()).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.template, Fragments::default());
        assert_eq!(config.mode, Mode::Positional);
    }

    #[test]
    fn full_toml() {
        let file = write_config(
            "toml",
            r##"
template = "{passed} ok, {failed} broken"
mode = "marker"

[exclamation]
failure = "Nope. "

[style]
success = "#00ff00"
"##,
        );

        let config = Config::from_file(file.path()).unwrap();

        assert_eq!(config.template, Fragments::parse("{passed} ok, {failed} broken").unwrap());
        assert_eq!(config.mode, Mode::Marker);
        assert_eq!(config.exclamation.success, "Yay! ");
        assert_eq!(config.exclamation.failure, "Nope. ");
        assert_eq!(config.style.success, Color::Named("#00ff00".into()));
        assert_eq!(config.style.failure, Color::Named("red".into()));
    }

    #[test]
    fn json_config() {
        let file = write_config("json", r#"{"mode": "positional", "style": {"failure": 160}}"#);
        let config = Config::from_file(file.path()).unwrap();

        assert_eq!(config.mode, Mode::Positional);
        assert_eq!(config.style.failure, Color::Ansi(160));
    }

    #[test]
    fn invalid_template_is_a_parsing_error() {
        let file = write_config("toml", r#"template = "Passed: {passed""#);
        let result = Config::from_file(file.path());

        assert!(matches!(result, Err(ConfigError::ParsingError(_))));
    }

    #[test]
    fn unknown_mode_is_a_parsing_error() {
        let file = write_config("json", r#"{"mode": "sideways"}"#);
        let result = Config::from_file(file.path());

        assert!(matches!(result, Err(ConfigError::ParsingError(_))));
    }

    #[test]
    fn unsupported_extension() {
        let file = write_config("yaml", "mode: marker");
        let result = Config::from_file(file.path());

        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn explicit_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::NotFound(_))
        ));
    }
}
