use std::path::PathBuf;

use clap::ValueEnum;

/// How the result is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The instruction string or failure message
    #[default]
    Text,
    /// The full report as JSON
    Json,
}

/// Top-level pizzabot configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PizzabotConfig {
    /// Append log records here instead of stderr.
    pub log_file: Option<PathBuf>,
    pub format: OutputFormat,
}

impl PizzabotConfig {
    /// Read `PIZZABOT_LOG_FILE` and `PIZZABOT_FORMAT` from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_file: lookup("PIZZABOT_LOG_FILE")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            format: lookup("PIZZABOT_FORMAT")
                .and_then(|format| OutputFormat::from_str(&format, true).ok())
                .unwrap_or_default(),
        }
    }

    /// Apply command-line flags on top of the environment.
    pub fn with_overrides(
        mut self,
        log_file: Option<PathBuf>,
        format: Option<OutputFormat>,
    ) -> Self {
        if let Some(path) = log_file {
            self.log_file = Some(path);
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = PizzabotConfig::from_lookup(lookup(&[]));
        assert_eq!(config, PizzabotConfig::default());
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_env_values() {
        let config = PizzabotConfig::from_lookup(lookup(&[
            ("PIZZABOT_LOG_FILE", "./log/pizza_delivery.log"),
            ("PIZZABOT_FORMAT", "JSON"),
        ]));
        assert_eq!(
            config.log_file,
            Some(PathBuf::from("./log/pizza_delivery.log"))
        );
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_env_falls_back() {
        let config = PizzabotConfig::from_lookup(lookup(&[
            ("PIZZABOT_LOG_FILE", ""),
            ("PIZZABOT_FORMAT", "yaml"),
        ]));
        assert_eq!(config, PizzabotConfig::default());
    }

    #[test]
    fn test_flags_override_env() {
        let config = PizzabotConfig::from_lookup(lookup(&[("PIZZABOT_FORMAT", "json")]))
            .with_overrides(Some(PathBuf::from("run.log")), Some(OutputFormat::Text));
        assert_eq!(config.log_file, Some(PathBuf::from("run.log")));
        assert_eq!(config.format, OutputFormat::Text);

        let config = PizzabotConfig::from_lookup(lookup(&[("PIZZABOT_FORMAT", "json")]))
            .with_overrides(None, None);
        assert_eq!(config.format, OutputFormat::Json);
    }
}
