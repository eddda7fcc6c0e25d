use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BrevError, Result};
use crate::models::Abbreviation;

pub const CONFIG_DIR_NAME: &str = "brev";
pub const CONFIG_FILENAME: &str = "config.yaml";

/// The loaded configuration: an ordered list of abbreviation rules.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub abbreviations: Vec<Abbreviation>,
}

/// Get the brev configuration directory, honoring `XDG_CONFIG_HOME`.
pub fn get_config_dir() -> Result<PathBuf> {
    let base = env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            env::var("HOME")
                .ok()
                .filter(|v| !v.is_empty())
                .map(|home| PathBuf::from(home).join(".config"))
        })
        .ok_or(BrevError::NoConfigDir)?;

    Ok(base.join(CONFIG_DIR_NAME))
}

/// Ensure the configuration directory exists and return it.
pub fn ensure_config_dir() -> Result<PathBuf> {
    let config_dir = get_config_dir()?;
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }
    Ok(config_dir)
}

/// Get the path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILENAME))
}

/// Load the user configuration from the config directory.
pub fn load_config() -> Result<Config> {
    let config_dir = ensure_config_dir()?;
    let path = config_dir.join(CONFIG_FILENAME);
    if !path.exists() {
        return Err(BrevError::ConfigNotFound(config_dir.display().to_string()));
    }
    load_config_from(&path)
}

/// Load a configuration from an explicit path.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let data = fs::read_to_string(path)?;
    let config: Config = serde_yaml::from_str(&data)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp config");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn loads_full_schema() {
        let file = write_config(
            r#"
abbreviations:
  - name: list files
    abbr: l
    snippet: ls -l
  - name: git status
    abbr: s
    snippet: status
    options:
      position: anywhere
      command: git
  - name: commit with message
    abbr: cm
    snippet: commit -m '%'
    options:
      command: git
      set_cursor: true
  - name: run python scripts
    snippet: python3 $file
    options:
      regex: ^(?P<file>\S+\.py)$
"#,
        );

        let config = load_config_from(file.path()).expect("load config");
        assert_eq!(config.abbreviations.len(), 4);

        let l = &config.abbreviations[0];
        assert_eq!(l.trigger(), "l");
        assert_eq!(l.snippet, "ls -l");
        assert_eq!(l.position(), Position::CommandStart);

        let s = &config.abbreviations[1];
        assert_eq!(s.position(), Position::Anywhere);
        assert_eq!(s.command(), Some("git"));

        let cm = &config.abbreviations[2];
        assert!(cm.set_cursor());
        assert_eq!(cm.position(), Position::CommandStart);

        let py = &config.abbreviations[3];
        assert!(py.is_pattern_only());
        assert_eq!(py.anchored_pattern(), Some(r"^(?P<file>\S+\.py)$"));
    }

    #[test]
    fn missing_fields_default() {
        let file = write_config("abbreviations:\n  - abbr: l\n    snippet: ls -l\n");
        let config = load_config_from(file.path()).expect("load config");
        let abbr = &config.abbreviations[0];
        assert_eq!(abbr.name, None);
        assert!(abbr.options.is_none());
    }

    #[test]
    fn empty_document_yields_no_rules() {
        let file = write_config("abbreviations: []\n");
        let config = load_config_from(file.path()).expect("load config");
        assert!(config.abbreviations.is_empty());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let file = write_config("abbreviations:\n  - snippet: [unclosed\n");
        assert!(matches!(
            load_config_from(file.path()),
            Err(BrevError::Yaml(_))
        ));
    }
}
