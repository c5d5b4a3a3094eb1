//! Reformat command: comma-separated input to the whitespace format.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use rainstat_io::reformat_csv_file;

use crate::cli::ReformatArgs;

/// Convert `args.input` and write the result to `args.output`.
pub fn run(args: ReformatArgs) -> Result<()> {
    let _cmd = info_span!("reformat").entered();
    let n = reformat_csv_file(&args.input, &args.output).with_context(|| {
        format!(
            "failed to reformat {} into {}",
            args.input.display(),
            args.output.display()
        )
    })?;
    info!(n_lines = n, "file created successfully");
    Ok(())
}
