//! DeviceStore: query a small in-memory catalog of electronics.

use std::io::Write;

use tracing::info;
use tracing_subscriber::EnvFilter;

use devicestore_catalog::Catalog;
use devicestore_core::StoreConfig;

mod command;

use command::Command;

fn open_catalog(config: &StoreConfig) -> anyhow::Result<Catalog> {
    match &config.seed_file {
        Some(path) => devicestore_catalog::load_seed(path)
            .map_err(|e| anyhow::anyhow!("Failed to load seed {}: {}", path.display(), e)),
        None => Ok(devicestore_catalog::sample_catalog()),
    }
}

fn main() -> anyhow::Result<()> {
    let config = StoreConfig::from_env()?;

    // Logs go to stderr so query output on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}. Use 'devicestore help' for usage.", e);
            std::process::exit(2);
        }
    };

    if command == Command::Help {
        print!("{}", command::USAGE);
        return Ok(());
    }

    let catalog = open_catalog(&config)?;
    info!("Catalog ready with {} devices", catalog.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    command.run(&catalog, &mut out)?;
    out.flush()?;

    Ok(())
}
