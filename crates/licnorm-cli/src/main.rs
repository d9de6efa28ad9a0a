// crates/licnorm-cli/src/main.rs

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "licnorm-cli", version)]
#[command(about = "Collapse verbose license headers in a built JS bundle", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub args: cmd::normalize::NormalizeArgs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cmd::normalize::run(cli.args)
}
