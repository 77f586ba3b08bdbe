#[macro_use]
extern crate log;

mod command;
mod config;

use clap::Parser;
use command::Command;
use config::Config;

#[derive(Parser)]
#[clap(version, about = "Inspect and merge manga metadata records")]
struct Opts {
    /// Path to config file, created with defaults when missing
    #[clap(long)]
    config: Option<String>,
    /// Pretty print JSON output
    #[clap(long)]
    pretty: bool,
    #[clap(subcommand)]
    subcmd: Command,
}

fn init_logger(config: &Config) {
    let filter = if let Ok(rust_log) = std::env::var("RUST_LOG") {
        rust_log
    } else if let Ok(shiori_log) = std::env::var("SHIORI_LOG") {
        format!("shiori={shiori_log},shiori_lib={shiori_log}")
    } else if let Some(level) = &config.log_level {
        format!("shiori={level},shiori_lib={level}")
    } else {
        "warn".to_string()
    };

    env_logger::Builder::new().parse_filters(&filter).init();
}

fn main() -> Result<(), anyhow::Error> {
    let opts: Opts = Opts::parse();
    let config = Config::open(opts.config.as_ref())?;

    init_logger(&config);

    info!("using config at {}", config.path().display());
    debug!("config: {:?}", config);

    let pretty = opts.pretty || config.pretty;
    let stdout = std::io::stdout();
    opts.subcmd.execute(pretty, &mut stdout.lock())?;

    Ok(())
}
