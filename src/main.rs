use clap::Parser;
use sortbox::cli;
use sortbox::config::Config;
use sortbox::output::OutputFormatter;
use std::path::PathBuf;

/// Sort files into category subdirectories driven by a TOML configuration.
#[derive(Parser)]
#[command(name = "sortbox", version, about)]
struct Args {
    /// Path to the configuration file (defaults to .sortboxrc.toml, then
    /// ~/.config/sortbox/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Show what would be moved without touching anything
    #[arg(short = 'n', long)]
    dry_run: bool,
}

fn main() {
    let args = Args::parse();

    let config = Config::load_or_default(args.config.as_deref());

    if let Err(e) = cli::run(&config, args.dry_run) {
        OutputFormatter::error(&format!("Error: {}", e));
        std::process::exit(1);
    }
}
