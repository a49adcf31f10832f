//! Configuration loading for mail-checker.
//!
//! Resolves a candidate path list, reads the first existing file, and
//! parses it as YAML. A completely absent configuration is not an error:
//! the defaults apply, and the checker needs no configuration to run.

use std::path::PathBuf;

use config_core::Config;

/// Candidate configuration file paths, in preference order.
///
/// An explicit override replaces the whole list. Otherwise: the XDG config
/// locations, then home-directory dotfiles, then the system path.
pub fn candidate_paths(override_path: Option<PathBuf>) -> Vec<PathBuf> {
    if let Some(path) = override_path {
        return vec![path];
    }

    let mut paths = Vec::new();
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("mail-checker/config.yaml"));
        paths.push(dir.join("mail-checker.yaml"));
    }
    if let Some(dir) = dirs::home_dir() {
        paths.push(dir.join(".mail-checker.yaml"));
        paths.push(dir.join(".mail-checker/config.yaml"));
    }
    paths.push(PathBuf::from("/etc/mail-checker/config.yaml"));
    paths
}

/// Errors returned while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Config path env var reading error.
    #[error("config path env var read: {0}")]
    Env(#[source] envfury::Error<envfury::ValueError<std::convert::Infallible>>),

    /// Failed to read a config file from disk.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path to the configuration file.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the YAML contents.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path to the configuration file.
        path: PathBuf,

        /// Underlying YAML parse error.
        #[source]
        source: serde_yaml_bw::Error,
    },
}

/// Load configuration from the first existing candidate file.
///
/// Returns the defaults when no candidate exists.
pub async fn load(paths: &[PathBuf]) -> Result<Config, LoadError> {
    for path in paths {
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => continue,
            Err(source) => {
                return Err(LoadError::Read {
                    path: path.clone(),
                    source,
                });
            }
        };

        return parse_yaml(&contents).map_err(|source| LoadError::Parse {
            path: path.clone(),
            source,
        });
    }

    Ok(Config::default())
}

/// Parse configuration from a YAML string.
pub fn parse_yaml(contents: &str) -> Result<Config, serde_yaml_bw::Error> {
    serde_yaml_bw::from_str(contents)
}

/// Load configuration using the `MAIL_CHECKER_CONFIG` override or the
/// default candidate paths.
pub async fn from_default_env() -> Result<Config, LoadError> {
    let override_path = envfury::maybe("MAIL_CHECKER_CONFIG").map_err(LoadError::Env)?;
    load(&candidate_paths(override_path)).await
}
