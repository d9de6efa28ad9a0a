// crates/licnorm-cli/src/cmd/normalize.rs

use std::path::PathBuf;

use clap::Args;
use licnorm_core::Normalizer;
use tracing::{debug, info, warn};

use crate::io::text_file::{read_text, write_text};

/// Bundle written by the web build; headers are rewritten in place.
pub const DEFAULT_TARGET: &str = "./dist/opennsfw.min.js";

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Bundle to rewrite in place
    #[arg(default_value = DEFAULT_TARGET)]
    pub path: PathBuf,
}

pub fn run(args: NormalizeArgs) -> anyhow::Result<()> {
    let normalizer = Normalizer::with_default_rules()?;

    let before = read_text(&args.path)?;
    let out = normalizer.normalize(&before);

    for hits in &out.report.rules {
        debug!(rule = %hits.rule, replacements = hits.replacements, "rule summary");
    }
    if !out.report.changed {
        warn!(path = %args.path.display(), "no rule matched; writing unchanged");
    }

    write_text(&args.path, &out.text)?;

    info!(
        path = %args.path.display(),
        bytes_before = before.len(),
        bytes_after = out.text.len(),
        replacements = out.report.total_replacements(),
        "normalized"
    );
    Ok(())
}
