// src/main.rs

use std::process::ExitCode;

use ini_preflight::settings::Settings;
use ini_preflight::{Verdict, cli, logging, run};

fn main() -> ExitCode {
    match run_main() {
        Ok(verdict) => verdict.exit_code(),
        Err(err) => {
            eprintln!("ini-preflight error: {err:?}");
            ExitCode::from(2)
        }
    }
}

fn run_main() -> anyhow::Result<Verdict> {
    let args = cli::parse();
    logging::init_logging()?;
    let settings = Settings::from_env()?;
    run(&args, &settings)
}
