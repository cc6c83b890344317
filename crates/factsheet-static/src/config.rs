//! Values read from the process environment.

use serde::Serialize;

/// Environment variable holding the mailing-list form URL.
pub const FORM_URL_VAR: &str = "MAILING_LIST_FORM_URL";

/// Runtime configuration bound into the template as `config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Configuration {
    /// Mailing-list form action URL (empty when unset)
    pub form_url: String,
}

impl Configuration {
    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Missing keys fall back to an empty string.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            form_url: lookup(FORM_URL_VAR).unwrap_or_default(),
        }
    }
}

/// Read the configuration from the process environment. Never fails.
pub fn read_config() -> Configuration {
    Configuration::from_lookup(|key| std::env::var(key).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_empty_form_url() {
        let config = Configuration::from_lookup(|_| None);

        assert_eq!(config.form_url, "");
    }

    #[test]
    fn reads_form_url() {
        let config = Configuration::from_lookup(|key| {
            (key == FORM_URL_VAR).then(|| "https://lists.example.org/subscribe".to_string())
        });

        assert_eq!(config.form_url, "https://lists.example.org/subscribe");
    }
}
