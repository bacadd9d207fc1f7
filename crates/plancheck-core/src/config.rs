use std::env;
use std::fmt;

/// Connection string variables, in precedence order. Empty values count as unset.
pub const DATABASE_URL_VARS: [&str; 2] = ["TEST_DATABASE_URL", "DATABASE_URL"];

pub const LOG_VAR: &str = "PLANCHECK_LOG";

#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    /// Name of the variable the url came from.
    pub source: &'static str,
}

impl DatabaseConfig {
    /// `None` means no database is configured, which callers treat as a skip.
    pub fn from_env() -> Option<Self> {
        Self::resolve_with(|key| env::var(key).ok())
    }

    pub fn resolve_with<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        DATABASE_URL_VARS.iter().find_map(|&key| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(|url| DatabaseConfig { url, source: key })
        })
    }
}

// The url usually embeds a password.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(v) = env::var(LOG_VAR) {
            if !v.trim().is_empty() {
                cfg.level = v;
            }
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn test_first_variable_wins() {
        let cfg = DatabaseConfig::resolve_with(lookup(&[
            ("TEST_DATABASE_URL", "postgres://test"),
            ("DATABASE_URL", "postgres://main"),
        ]))
        .unwrap();
        assert_eq!(cfg.url, "postgres://test");
        assert_eq!(cfg.source, "TEST_DATABASE_URL");
    }

    #[test]
    fn test_falls_back_to_second_variable() {
        let cfg =
            DatabaseConfig::resolve_with(lookup(&[("DATABASE_URL", "postgres://main")])).unwrap();
        assert_eq!(cfg.url, "postgres://main");
        assert_eq!(cfg.source, "DATABASE_URL");
    }

    #[test]
    fn test_empty_value_counts_as_unset() {
        let cfg = DatabaseConfig::resolve_with(lookup(&[
            ("TEST_DATABASE_URL", "  "),
            ("DATABASE_URL", "postgres://main"),
        ]))
        .unwrap();
        assert_eq!(cfg.source, "DATABASE_URL");
    }

    #[test]
    fn test_nothing_configured() {
        assert!(DatabaseConfig::resolve_with(lookup(&[])).is_none());
    }

    #[test]
    fn test_debug_hides_url() {
        let cfg = DatabaseConfig {
            url: "postgres://user:hunter2@db/app".into(),
            source: "DATABASE_URL",
        };
        let dbg = format!("{:?}", cfg);
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("DATABASE_URL"));
    }
}
