use std::io;
use std::process::ExitCode;

use teller::prelude::*;
use tracing::info;

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config = match parse_args(std::env::args().collect())? {
        Some(path) => BankConfig::from_file(path)?,
        None => BankConfig::default(),
    };

    info!(branch = %config.branch_code, "Opening the counter");

    let registry = InMemoryRegistry::new(config.account_policy());
    let teller = Teller::new(registry, config.statement_entries);

    let stdin = io::stdin();
    let stdout = io::stdout();
    MenuShell::new(teller, stdin.lock(), stdout.lock()).run()?;

    info!("Counter closed");
    Ok(())
}

/// Parse and validate command-line arguments
fn parse_args(args: Vec<String>) -> Result<Option<String>, AppError> {
    match args.len() {
        1 => Ok(None),
        2 => Ok(Some(args[1].clone())),
        _ => Err(AppError::InvalidArguments(
            "Usage: teller [config.toml]".to_string(),
        )),
    }
}
