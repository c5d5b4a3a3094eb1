//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use rainstat_aggregate::AggregateConfig;
use rainstat_io::OutputFormat;

use crate::config::AnalysisToml;

/// Parses an output format name into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" | "txt" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Builds an [`AggregateConfig`] from the TOML analysis configuration.
pub fn build_aggregate_config(analysis: &AnalysisToml) -> Result<AggregateConfig> {
    let cfg = AggregateConfig::new()
        .with_shard_size(analysis.shard_size)
        .with_max_malformed(analysis.max_malformed);
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats() {
        assert_eq!(parse_format("text").unwrap(), OutputFormat::Text);
        assert_eq!(parse_format("JSON").unwrap(), OutputFormat::Json);
        let err = parse_format("yaml").unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn aggregate_config_forwarded() {
        let cfg = build_aggregate_config(&AnalysisToml {
            shard_size: 16,
            max_malformed: Some(2),
        })
        .unwrap();
        assert_eq!(cfg.shard_size(), 16);
        assert_eq!(cfg.max_malformed(), Some(2));
    }

    #[test]
    fn zero_shard_size_rejected() {
        assert!(
            build_aggregate_config(&AnalysisToml {
                shard_size: 0,
                max_malformed: None,
            })
            .is_err()
        );
    }
}
