use anyhow::Result;
use clap::Parser;
use paddl::core::config::{ConfigArgs, ExplorerConfig};
use paddl::core::telemetry::logging::init_logging;
use paddl::ui::PaddlApp;
use std::path::PathBuf;

/// Two-pane file browser.
#[derive(Debug, Parser)]
#[command(name = "Paddl", version)]
struct Args {
    /// Directory to open; defaults to the home directory.
    path: Option<PathBuf>,
    #[command(flatten)]
    config: ConfigArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();
    PaddlApp::run(ExplorerConfig::from_args(args.path, &args.config))
}
