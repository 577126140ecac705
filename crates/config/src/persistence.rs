//! Locating, reading and writing config files.
//!
//! Files are parsed as JSON5, which also accepts plain JSON. They are
//! written back as pretty JSON since `serde_json5` cannot serialize.
//!
//! The search order is:
//!
//! 1. `./tvgrid.json5`, then `./tvgrid.json`
//! 2. `<config dir>/tvgrid/config.json5`, then `config.json`

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, trace};

use crate::error::{ConfigError, Result};

const LOCAL_FILE_NAMES: [&str; 2] = ["tvgrid.json5", "tvgrid.json"];
const USER_DIR_NAME: &str = "tvgrid";
const USER_FILE_NAMES: [&str; 2] = ["config.json5", "config.json"];

/// Where a config file was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Next to the working directory.
    Local(PathBuf),
    /// In the per-user config directory.
    User(PathBuf),
}

impl ConfigSource {
    /// The path of the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Local(path) | Self::User(path) => path,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "local config {}", path.display()),
            Self::User(path) => write!(f, "user config {}", path.display()),
        }
    }
}

/// Lists every file the config search looks at, in priority order.
///
/// `local_dir` is usually the working directory and `user_dir` the
/// platform config directory (`~/.config` on Linux).
#[must_use]
pub fn candidates(local_dir: &Path, user_dir: Option<&Path>) -> Vec<ConfigSource> {
    let local = LOCAL_FILE_NAMES
        .iter()
        .map(|name| ConfigSource::Local(local_dir.join(name)));
    let user = user_dir.into_iter().flat_map(|dir| {
        USER_FILE_NAMES
            .iter()
            .map(move |name| ConfigSource::User(dir.join(USER_DIR_NAME).join(name)))
    });
    local.chain(user).collect()
}

/// Returns the first existing candidate.
#[must_use]
pub fn locate_in(local_dir: &Path, user_dir: Option<&Path>) -> Option<ConfigSource> {
    candidates(local_dir, user_dir).into_iter().find(|candidate| {
        let exists = candidate.path().is_file();
        trace!(path = %candidate.path().display(), exists, "config candidate");
        exists
    })
}

/// Returns the config file to use, searching the working directory first.
///
/// # Examples
///
/// ```no_run
/// use tvgrid_config::persistence::locate_config;
///
/// match locate_config() {
///     Some(source) => println!("using {source}"),
///     None => println!("using defaults"),
/// }
/// ```
#[must_use]
pub fn locate_config() -> Option<ConfigSource> {
    let source = locate_in(Path::new("."), dirs::config_dir().as_deref());
    if let Some(source) = &source {
        debug!(%source, "found config file");
    }
    source
}

/// Reads and parses a JSON5 or JSON file.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] when the file cannot be read and
/// [`ConfigError::ParseJson5`] when it does not parse.
pub fn read_config<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json5::from_str(&content)?)
}

/// Async variant of [`read_config`] using `tokio::fs`.
///
/// # Errors
///
/// Same as [`read_config`].
pub async fn read_config_async<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(serde_json5::from_str(&content)?)
}

/// Writes `value` as pretty JSON, creating parent directories.
///
/// The value is serialized before anything touches the disk, so a
/// serialization failure leaves an existing file alone.
///
/// # Errors
///
/// Returns [`ConfigError::SerializeJson`] or [`ConfigError::WriteFile`].
pub fn write_config<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let content = serde_json::to_string_pretty(value)?;
    let write_err = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, content).map_err(write_err)?;
    debug!(path = %path.display(), "wrote config file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        channel: String,
        hours: u32,
    }

    #[test]
    fn candidates_prefer_local_json5() {
        let local = Path::new("/work");
        let user = Path::new("/home/me/.config");

        let found = candidates(local, Some(user));

        assert_eq!(
            found,
            vec![
                ConfigSource::Local(local.join("tvgrid.json5")),
                ConfigSource::Local(local.join("tvgrid.json")),
                ConfigSource::User(user.join("tvgrid/config.json5")),
                ConfigSource::User(user.join("tvgrid/config.json")),
            ]
        );
        assert_eq!(candidates(local, None).len(), 2);
    }

    #[test]
    fn local_file_wins_over_user_file() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        std::fs::create_dir_all(user.path().join("tvgrid")).unwrap();
        std::fs::write(user.path().join("tvgrid/config.json5"), "{}").unwrap();

        let found = locate_in(local.path(), Some(user.path())).unwrap();
        assert!(matches!(found, ConfigSource::User(_)));

        std::fs::write(local.path().join("tvgrid.json"), "{}").unwrap();
        let found = locate_in(local.path(), Some(user.path())).unwrap();
        assert_eq!(found, ConfigSource::Local(local.path().join("tvgrid.json")));
        assert!(found.to_string().starts_with("local config "));
    }

    #[test]
    fn nothing_found_in_empty_dirs() {
        let local = TempDir::new().unwrap();
        assert_eq!(locate_in(local.path(), None), None);
    }

    #[test]
    fn reads_json5_with_comments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tvgrid.json5");
        std::fs::write(
            &path,
            r#"
            {
                // the late show
                channel: "arte",
                hours: 28,
            }
            "#,
        )
        .unwrap();

        let sample: Sample = read_config(&path).unwrap();
        assert_eq!(sample.channel, "arte");
        assert_eq!(sample.hours, 28);
    }

    #[tokio::test]
    async fn reads_plain_json_async() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tvgrid.json");
        std::fs::write(&path, r#"{"channel": "ZDF", "hours": 24}"#).unwrap();

        let sample: Sample = read_config_async(&path).await.unwrap();
        assert_eq!(sample.channel, "ZDF");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_config::<Sample>("/nonexistent/tvgrid.json5").unwrap_err();
        match err {
            ConfigError::ReadFile { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/tvgrid.json5"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json5");
        std::fs::write(&path, "{ hours: }").unwrap();

        let result = read_config::<Sample>(&path);
        assert!(matches!(result, Err(ConfigError::ParseJson5(_))));
    }

    #[test]
    fn write_creates_directories_and_reads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/tvgrid/config.json");
        let sample = Sample {
            channel: "Das Erste".to_string(),
            hours: 28,
        };

        write_config(&path, &sample).unwrap();

        assert_eq!(read_config::<Sample>(&path).unwrap(), sample);
    }
}
