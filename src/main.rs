use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;

use cycle_advisor::ui::render_text;
use cycle_advisor::{AdvisorEngine, Cli, EngineError};

fn run(args: &Cli) -> Result<String> {
    let config = args.resolve_config().context("resolving analysis config")?;
    let request = args.load_request().context("loading input series")?;

    let engine = AdvisorEngine::new(config)?;
    let report = engine.analyze(&request, Utc::now())?;

    if args.json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(render_text(&report))
    }
}

fn main() -> ExitCode {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::debug!("Parsed arguments: {:?}", args);

    // C. Analyse
    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let code = err
                .chain()
                .find_map(|cause| cause.downcast_ref::<EngineError>())
                .map(EngineError::code)
                .unwrap_or("ERROR");
            println!("ERROR: {code}: {err:#}");
            ExitCode::FAILURE
        }
    }
}
