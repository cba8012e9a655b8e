use clap::Parser;
use transducer::cli::{run_cli, Cli};
use transducer::config::LogConfig;
use transducer::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    let mut config = LogConfig::from_env();
    if cli.verbose {
        config = config.verbose();
    }
    if let Err(e) = init_logging(&config) {
        eprintln!("Warning: {e:#}");
    }

    std::process::exit(run_cli(cli));
}
