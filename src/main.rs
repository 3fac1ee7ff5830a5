use clap::Parser;
use colored::Colorize;
use ip_cidr_utils::cli::{run, Cli};
use ip_cidr_utils::config::Config;
use ip_cidr_utils::logging::{init_logging, LOG_CONFIG_FILE};
use std::error::Error;
use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging(LOG_CONFIG_FILE)?;
    log::debug!("#Start main()");

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match run(&cli, config) {
        Ok(output) => {
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "error:".red());
            Ok(ExitCode::FAILURE)
        }
    }
}
