//! Analyze command: read records, compute statistics, write the report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, info_span};

use rainstat_io::{read_records, write_report};
use rainstat_report::analyze;

use crate::cli::AnalyzeArgs;
use crate::config::RainstatConfig;
use crate::convert;

const DEFAULT_CONFIG: &str = "rainstat.toml";

/// Run the full statistics pipeline.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();
    // 1. Load project TOML, falling back to defaults
    let mut config = load_config(args.config.as_deref())?;

    // 2. Apply CLI overrides
    if let Some(input) = args.input {
        config.io.input = Some(input);
    }
    if let Some(output) = args.output {
        config.io.output = Some(output);
    }
    if let Some(format) = args.format {
        config.io.format = format;
    }

    let input = config
        .io
        .input
        .as_ref()
        .ok_or_else(|| anyhow!("no input path: set [io].input in config or use --input"))?;
    let format = convert::parse_format(&config.io.format)?;
    let agg_cfg = convert::build_aggregate_config(&config.analysis)
        .context("invalid [analysis] configuration")?;

    // 3. Read records
    let records = read_records(input)
        .with_context(|| format!("failed to read records: {}", input.display()))?;

    // 4. Compute statistics
    let report = analyze(&records, &agg_cfg).context("analysis failed")?;
    info!(
        records = report.records(),
        skipped = report.skipped().len(),
        "analysis complete"
    );

    // 5. Write report
    write_report(&report, config.io.output.as_deref(), format)
        .context("failed to write report")?;

    Ok(())
}

/// Read `path`, or `rainstat.toml` in the working directory when no path
/// is given. A missing default file yields the default configuration.
fn load_config(path: Option<&Path>) -> Result<RainstatConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG);
            if !default.exists() {
                debug!("no {DEFAULT_CONFIG} found, using defaults");
                return Ok(RainstatConfig::default());
            }
            default
        }
    };
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_missing_config_is_an_error() {
        let err = load_config(Some(Path::new("/tmp/rainstat_no_such_config.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn explicit_config_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rainstat.toml");
        std::fs::write(&path, "[analysis]\nshard_size = 8\n").unwrap();
        let cfg = load_config(Some(&path)).unwrap();
        assert_eq!(cfg.analysis.shard_size, 8);
    }

    #[test]
    fn end_to_end_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("rain.txt");
        let output = dir.path().join("report.json");
        let cfg = dir.path().join("rainstat.toml");
        std::fs::write(&input, "1990 1 2 3\n1991 4 5 6\n").unwrap();
        std::fs::write(&cfg, "[io]\nformat = \"json\"\n").unwrap();

        run(AnalyzeArgs {
            config: Some(cfg),
            input: Some(input),
            output: Some(output.clone()),
            format: None,
        })
        .unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("\"locator\": \"3/1991\""));
    }

    #[test]
    fn missing_input_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("rainstat.toml");
        std::fs::write(&cfg, "").unwrap();
        let err = run(AnalyzeArgs {
            config: Some(cfg),
            input: None,
            output: None,
            format: None,
        })
        .unwrap_err();
        assert!(err.to_string().contains("no input path"));
    }
}
