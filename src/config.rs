use std::path::PathBuf;

use serde::Deserialize;

/// Top-level rainstat configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RainstatConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Aggregation settings.
    #[serde(default)]
    pub analysis: AnalysisToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisToml {
    #[serde(default = "default_shard_size")]
    pub shard_size: usize,
    /// Unlimited when unset.
    #[serde(default)]
    pub max_malformed: Option<usize>,
}

impl Default for AnalysisToml {
    fn default() -> Self {
        Self {
            shard_size: default_shard_size(),
            max_malformed: None,
        }
    }
}

fn default_shard_size() -> usize {
    4096
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg: RainstatConfig = toml::from_str("").unwrap();
        assert!(cfg.io.input.is_none());
        assert_eq!(cfg.io.format, "text");
        assert_eq!(cfg.analysis.shard_size, 4096);
        assert_eq!(cfg.analysis.max_malformed, None);
    }

    #[test]
    fn full_file() {
        let cfg: RainstatConfig = toml::from_str(
            r#"
            [io]
            input = "rain.txt"
            output = "report.json"
            format = "json"

            [analysis]
            shard_size = 128
            max_malformed = 3
            "#,
        )
        .unwrap();
        assert_eq!(cfg.io.input, Some(PathBuf::from("rain.txt")));
        assert_eq!(cfg.io.format, "json");
        assert_eq!(cfg.analysis.shard_size, 128);
        assert_eq!(cfg.analysis.max_malformed, Some(3));
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(toml::from_str::<RainstatConfig>("[io]\ncompression = \"zstd\"").is_err());
        assert!(toml::from_str::<RainstatConfig>("[warm]\nn_sim = 1").is_err());
    }
}
