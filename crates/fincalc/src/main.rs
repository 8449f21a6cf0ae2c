use clap::Parser;
use fincalc::{Cli, execute, init_logging};
use std::path::PathBuf;

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".fincalc")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let mut stdout = std::io::stdout().lock();
    let result = execute(&args.command, &mut stdout);

    if let Err(err) = &result {
        tracing::error!("Command failed: {err}");
    }

    result
}
