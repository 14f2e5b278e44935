use gitstat_github::{DEFAULT_BASE_URL, GitHubProvider};

/// Runtime settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub github_token: Option<String>,
    pub api_url: String,
}

impl Config {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value: &String| !value.trim().is_empty());

        Self {
            github_token: get("GITHUB_TOKEN"),
            api_url: get("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    #[must_use]
    pub fn provider(&self) -> GitHubProvider {
        let provider = GitHubProvider::new().with_base_url(self.api_url.clone());

        match &self.github_token {
            Some(token) => provider.with_token(token.clone()),
            None => {
                log::warn!("GITHUB_TOKEN is not set; contribution data will be unavailable");
                provider
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect::<BTreeMap<_, _>>();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);

        assert_eq!(config.github_token, None);
        assert_eq!(config.api_url, "https://api.github.com");
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("GITHUB_TOKEN", "secret"),
            ("GITHUB_API_URL", "https://github.example.com/api/v3"),
        ]);

        assert_eq!(config.github_token.as_deref(), Some("secret"));
        assert_eq!(config.api_url, "https://github.example.com/api/v3");
    }

    #[test]
    fn test_empty_token_is_unset() {
        assert_eq!(config(&[("GITHUB_TOKEN", "  ")]).github_token, None);
    }
}
