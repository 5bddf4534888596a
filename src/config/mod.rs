mod schema;
mod validation;

pub use schema::{ColorMode, Config, DistinctionConfig};
pub use validation::validate_config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/gradebook/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("gradebook"))
}

/// Get the default config file path (~/.config/gradebook/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration.
///
/// With an explicit `path` the file must exist. Without one, the default
/// location is tried and a missing file yields the built-in defaults.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            read_config(&path)
        }
        None => match get_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => Ok(Config::default()),
        },
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_missing_path_is_error() {
        let path = std::env::temp_dir().join("gradebook-test-missing-config.yaml");
        let result = load_config(Some(path));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_load_explicit_file() {
        let path = std::env::temp_dir().join(format!("gradebook-test-config-{}.yaml", std::process::id()));
        fs::write(&path, "pass_mark: 35\ncolor: never\n").unwrap();
        let config = load_config(Some(path.clone()));
        let _ = fs::remove_file(&path);

        let config = config.unwrap();
        assert_eq!(config.pass_mark, 35);
        assert_eq!(config.color, ColorMode::Never);
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let path = std::env::temp_dir().join(format!("gradebook-test-bad-config-{}.yaml", std::process::id()));
        fs::write(&path, "pass_mark: [not a number\n").unwrap();
        let result = load_config(Some(path.clone()));
        let _ = fs::remove_file(&path);

        assert!(result.is_err());
    }
}
