use std::io;
use std::process::ExitCode;

use env_logger::Env;
use url_pinger::{
    PingerError,
    config::{AppConfig, Cli, EXAMPLE_USAGE},
    http_probe::{prelude::*, report},
    output::{RowWriter, format_summary},
    probe::{ShutdownSignal, run_until_shutdown},
};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_go_style();
    if cli.example {
        for line in EXAMPLE_USAGE {
            println!("{line}");
        }
        return ExitCode::SUCCESS;
    }

    let config = AppConfig::from_cli(&cli);
    let mut table = RowWriter::new(io::stdout());

    match run(&config, &mut table).await {
        Ok(total) => {
            println!("{}", format_summary(total));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", report(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &AppConfig, table: &mut RowWriter<io::Stdout>) -> Result<u64, PingerError> {
    let signal = ShutdownSignal::install()?;
    let prober = Prober::new(config.headers.clone())?;

    let shutdown = async {
        let name = signal.recv().await;
        log::info!("Received {name}, shutting down");
    };

    run_until_shutdown(config, &prober, table, shutdown).await
}
