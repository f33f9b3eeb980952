use std::process;

use log::{error, info};
use tickets::{loader, Config, Report};

fn run(config: &Config) -> anyhow::Result<()> {
    info!("reading tickets from {}", config.source);
    let tickets = loader::load_tickets(&config.source)?;

    let report = Report::build(&tickets, config)?;
    report.print()?;

    Ok(())
}

fn main() {
    env_logger::init();

    let config = Config::from_args();

    if let Err(err) = run(&config) {
        error!("{:#}", err);
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}
