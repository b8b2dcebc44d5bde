use crate::contract::DEFAULT_DISTRIBUTION_ID;

pub const DISTRIBUTION_ID_ENV: &str = "CDN_DISTRIBUTION_ID";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidationConfig {
    pub distribution_id: String,
}

impl Default for InvalidationConfig {
    fn default() -> Self {
        Self {
            distribution_id: DEFAULT_DISTRIBUTION_ID.to_string(),
        }
    }
}

impl InvalidationConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank or missing values fall back to the built-in distribution.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let distribution_id = lookup(DISTRIBUTION_ID_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_DISTRIBUTION_ID.to_string());

        Self { distribution_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_distribution() {
        let config = InvalidationConfig::from_lookup(|_| None);
        assert_eq!(config, InvalidationConfig::default());
        assert_eq!(config.distribution_id, "EA51AZF868RKT");
    }

    #[test]
    fn blank_override_uses_default() {
        let config = InvalidationConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config.distribution_id, DEFAULT_DISTRIBUTION_ID);
    }

    #[test]
    fn reads_distribution_override() {
        let config = InvalidationConfig::from_lookup(|key| {
            (key == DISTRIBUTION_ID_ENV).then(|| "E2QWRUHAPOMQZL".to_string())
        });
        assert_eq!(config.distribution_id, "E2QWRUHAPOMQZL");
    }
}
