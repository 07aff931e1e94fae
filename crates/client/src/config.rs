use crate::api::VALIDATION_API_PATH;

/// Default origin the validation path is resolved against.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the portal hosting the rule service (default: `http://localhost:8080`).
    pub base_url: String,
    /// Full request target; replaces `base_url` + the default path when set.
    pub url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            url: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default                 |
    /// |----------------------|-------------------------|
    /// | `EMMIS_BASE_URL`     | `http://localhost:8080` |
    /// | `VALIDATION_API_URL` | unset                   |
    ///
    /// A blank or whitespace-only `VALIDATION_API_URL` counts as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any variable source, e.g. a fixed map.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("EMMIS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());

        let url = lookup("VALIDATION_API_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self { base_url, url }
    }

    /// The URL validation requests are posted to.
    pub fn validation_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "{}{}",
                self.base_url.trim_end_matches('/'),
                VALIDATION_API_PATH
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_portal_rules_path() {
        assert_eq!(
            ClientConfig::default().validation_url(),
            "http://localhost:8080/emmis-portal/api/v1/rules"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_dropped() {
        let config = ClientConfig {
            base_url: "https://portal.example.org/".into(),
            url: None,
        };
        assert_eq!(
            config.validation_url(),
            "https://portal.example.org/emmis-portal/api/v1/rules"
        );
    }

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn unset_variables_fall_back_to_defaults() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn override_variable_is_trimmed() {
        let config = ClientConfig::from_lookup(lookup_from(&[(
            "VALIDATION_API_URL",
            "  http://rules.internal:9000/check \n",
        )]));
        assert_eq!(config.url.as_deref(), Some("http://rules.internal:9000/check"));
        assert_eq!(config.validation_url(), "http://rules.internal:9000/check");
    }

    #[test]
    fn blank_override_variable_is_ignored() {
        for blank in ["", "   ", "\t\n"] {
            let config = ClientConfig::from_lookup(lookup_from(&[
                ("EMMIS_BASE_URL", "https://portal.example.org"),
                ("VALIDATION_API_URL", blank),
            ]));
            assert!(config.url.is_none(), "{blank:?}");
            assert_eq!(
                config.validation_url(),
                "https://portal.example.org/emmis-portal/api/v1/rules"
            );
        }
    }

    #[test]
    fn url_override_wins() {
        let config = ClientConfig {
            base_url: "https://ignored.example.org".into(),
            url: Some("http://127.0.0.1:9000/rules".into()),
        };
        assert_eq!(config.validation_url(), "http://127.0.0.1:9000/rules");
    }
}
