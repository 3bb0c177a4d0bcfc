//! Client configuration.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::error::{Result, SpotifyError};

/// Base URL for the Spotify Web API.
pub const DEFAULT_BASE_URL: &str = "https://api.spotify.com/v1/";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for [`SpotifyApi`](crate::SpotifyApi).
///
/// The access token is obtained elsewhere; this crate never refreshes it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub access_token: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Config with the default base URL and timeout.
    pub fn new<S: Into<String>>(access_token: S) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read `SPOTIFY_ACCESS_TOKEN`, and optionally `SPOTIFY_API_BASE_URL`
    /// and `SPOTIFY_TIMEOUT_SECS`, from the environment. A `.env` file in
    /// the working directory or its parents is loaded first.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), but with values from a specific
    /// env file. Variables already set in the process take precedence.
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = dotenvy::from_path_iter(path)
            .and_then(|iter| iter.collect::<std::result::Result<HashMap<_, _>, _>>())
            .map_err(|e| {
                SpotifyError::Config(format!("cannot read {}: {}", path.display(), e))
            })?;

        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| file.get(key).cloned()))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_token = lookup("SPOTIFY_ACCESS_TOKEN")
            .filter(|t| !t.is_empty())
            .ok_or_else(|| SpotifyError::Config("SPOTIFY_ACCESS_TOKEN not set".into()))?;

        let mut config = Self::new(access_token);

        if let Some(url) = lookup("SPOTIFY_API_BASE_URL") {
            config.base_url = url;
        }

        if let Some(secs) = lookup("SPOTIFY_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                SpotifyError::Config(format!("SPOTIFY_TIMEOUT_SECS is not a number: {}", secs))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Base URL normalized to end with a slash.
    pub fn endpoint(&self, path: &str) -> String {
        if self.base_url.ends_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.access_token.trim().is_empty() {
            return Err(SpotifyError::Config("access token is empty".into()));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(SpotifyError::Config(format!(
                "base URL must be http(s): {}",
                self.base_url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[("SPOTIFY_ACCESS_TOKEN", "tok")])).unwrap();
        assert_eq!(config.access_token, "tok");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("SPOTIFY_ACCESS_TOKEN", "tok"),
            ("SPOTIFY_API_BASE_URL", "http://localhost:8080/v1"),
            ("SPOTIFY_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(
            config.endpoint("albums/x1"),
            "http://localhost:8080/v1/albums/x1"
        );
    }

    #[test]
    fn test_from_env_file() {
        let path = std::env::temp_dir().join(format!("spotweb-config-{}.env", std::process::id()));
        std::fs::write(
            &path,
            "SPOTIFY_TEST_ONLY_UNUSED=1\nSPOTIFY_ACCESS_TOKEN=file-token\nSPOTIFY_TIMEOUT_SECS=9\n",
        )
        .unwrap();

        let config = ClientConfig::from_env_file(&path);
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        if std::env::var("SPOTIFY_ACCESS_TOKEN").is_err() {
            assert_eq!(config.access_token, "file-token");
        }
        if std::env::var("SPOTIFY_TIMEOUT_SECS").is_err() {
            assert_eq!(config.timeout, Duration::from_secs(9));
        }
    }

    #[test]
    fn test_from_env_file_missing() {
        let err = ClientConfig::from_env_file("/nonexistent/spotweb.env").unwrap_err();
        assert!(matches!(err, SpotifyError::Config(ref m) if m.contains("spotweb.env")));
    }

    #[test]
    fn test_missing_token() {
        let err = ClientConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, SpotifyError::Config(_)));
    }

    #[test]
    fn test_bad_timeout_and_url() {
        assert!(ClientConfig::from_lookup(lookup_from(&[
            ("SPOTIFY_ACCESS_TOKEN", "tok"),
            ("SPOTIFY_TIMEOUT_SECS", "soon"),
        ]))
        .is_err());
        assert!(ClientConfig::from_lookup(lookup_from(&[
            ("SPOTIFY_ACCESS_TOKEN", "tok"),
            ("SPOTIFY_API_BASE_URL", "ftp://example.com"),
        ]))
        .is_err());
    }
}
