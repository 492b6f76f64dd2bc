use crate::github::DEFAULT_API_URL;

pub const DEFAULT_MAX_PAGES: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    pub github_token: Option<String>,
    pub api_base_url: String,
    pub max_pages: u32,
}

impl Configuration {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let max_pages = match var("RELEASES_MAX_PAGES") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    log::warn!("Ignoring invalid RELEASES_MAX_PAGES={raw}, using {DEFAULT_MAX_PAGES}");
                    DEFAULT_MAX_PAGES
                }
            },
            None => DEFAULT_MAX_PAGES,
        };

        Self {
            github_token: var("GITHUB_TOKEN").filter(|t| !t.is_empty()),
            api_base_url: var("GITHUB_API_URL")
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            max_pages,
        }
    }

    // A non-empty --token wins over GITHUB_TOKEN.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.github_token = Some(token);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Configuration {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Configuration::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.github_token, None);
        assert_eq!(config.api_base_url, "https://api.github.com");
        assert_eq!(config.max_pages, DEFAULT_MAX_PAGES);
    }

    #[test]
    fn reads_values_from_environment() {
        let config = config_from(&[
            ("GITHUB_TOKEN", "abc"),
            ("GITHUB_API_URL", "https://github.example.com/api/v3"),
            ("RELEASES_MAX_PAGES", "5"),
        ]);
        assert_eq!(config.github_token.as_deref(), Some("abc"));
        assert_eq!(config.api_base_url, "https://github.example.com/api/v3");
        assert_eq!(config.max_pages, 5);
    }

    #[test]
    fn invalid_max_pages_falls_back_to_default() {
        assert_eq!(config_from(&[("RELEASES_MAX_PAGES", "lots")]).max_pages, DEFAULT_MAX_PAGES);
        assert_eq!(config_from(&[("RELEASES_MAX_PAGES", "0")]).max_pages, DEFAULT_MAX_PAGES);
    }

    #[test]
    fn cli_token_overrides_environment() {
        let config = config_from(&[("GITHUB_TOKEN", "from-env")]);
        assert_eq!(
            config.clone().with_token(Some("from-cli".to_string())).github_token.as_deref(),
            Some("from-cli")
        );
        assert_eq!(config.with_token(None).github_token.as_deref(), Some("from-env"));
    }

    #[test]
    fn empty_cli_token_is_ignored() {
        let config = config_from(&[("GITHUB_TOKEN", "from-env")]);
        assert_eq!(
            config.with_token(Some(String::new())).github_token.as_deref(),
            Some("from-env")
        );
        assert_eq!(config_from(&[]).with_token(Some(String::new())).github_token, None);
    }
}
