use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &[
    "rainstat",
    "rainstat_aggregate",
    "rainstat_drought",
    "rainstat_io",
    "rainstat_record",
    "rainstat_report",
    "rainstat_stats",
];

/// Initialize tracing based on CLI verbosity level.
///
/// `-v` maps to info, `-vv` to debug, `-vvv` and above to trace; without
/// the flag only warnings are shown. `RUST_LOG` overrides the flag if set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
