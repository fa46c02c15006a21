use std::{path::PathBuf, time::Duration};

use serde::Deserialize;
use tracing::{debug, trace};
use url::Url;

/// Overlay configuration, read from a TOML file. Every section has
/// defaults matching the stock overlay, so running without a config file
/// works out of the box.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub words: WordsConfig,
    pub feed: FeedConfig,
    pub round: RoundConfig,
}

impl AppConfig {
    /// Loads from `KATLA_CONFIG` if set, otherwise `./katla.toml` falling
    /// back to `/etc/katla/katla.toml`. A missing file just means defaults.
    pub fn load() -> Result<Self, Error> {
        let path = std::env::var("KATLA_CONFIG").map(PathBuf::from).ok();

        let path = path.unwrap_or_else(|| {
            let local = PathBuf::from("./katla.toml");

            if local.exists() {
                local
            } else {
                PathBuf::from("/etc/katla/katla.toml")
            }
        });

        trace!(path = %path.display(), "reading config");
        Self::from_file(&path)
    }

    fn from_file(path: &std::path::Path) -> Result<Self, Error> {
        let config: Self = ::config::Config::builder()
            .add_source(
                ::config::File::new(&path.to_string_lossy(), config::FileFormat::Toml)
                    .required(false),
            )
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)?;

        debug!(?config, "config loaded");
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file read error: {0}")]
    Read(config::ConfigError),

    #[error("parsing error: {0}")]
    Parse(config::ConfigError),
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WordsConfig {
    pub file: PathBuf,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("./words.txt"),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FeedConfig {
    pub url: Url,
    pub poll_ms: u64,
    pub prefixes: Vec<String>,
}

impl FeedConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:3000/api/comment"
                .parse()
                .expect("hard-coded default url should be valid"),
            poll_ms: 500,
            prefixes: ["jawab:", "answer:", "ans:", "kata:", "!"]
                .map(str::to_owned)
                .to_vec(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RoundConfig {
    pub next_delay_secs: u64,
}

impl RoundConfig {
    pub fn next_delay(&self) -> Duration {
        Duration::from_secs(self.next_delay_secs)
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            next_delay_secs: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::AppConfig;

    fn parse(toml: &str) -> AppConfig {
        ::config::Config::builder()
            .add_source(::config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse("");

        assert_eq!(config.feed.poll_ms, 500);
        assert_eq!(config.round.next_delay_secs, 15);
        assert_eq!(config.words.file.to_string_lossy(), "./words.txt");
        assert!(config.feed.prefixes.contains(&"jawab:".to_owned()));
    }

    #[test]
    fn sections_override_independently() {
        let config = parse(
            r#"
            [round]
            next_delay_secs = 30

            [feed]
            url = "http://example.com/last"
            "#,
        );

        assert_eq!(config.round.next_delay_secs, 30);
        assert_eq!(config.feed.url.as_str(), "http://example.com/last");
        // untouched section keeps its default
        assert_eq!(config.feed.poll_ms, 500);
    }
}
