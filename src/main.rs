use std::fs;
use std::process::ExitCode;

use breakpoint_model::config::DebuggerSettings;
use breakpoint_model::debugger::pending_from_json;
use breakpoint_model::{logging, Result};

const USAGE: &str = "usage: breakpoint-model check <pending.json> [--config <settings.toml>]";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let (snapshot, config) = match parse_args(&args) {
        Some(parsed) => parsed,
        None => {
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    match run_check(snapshot, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Option<(&str, Option<&str>)> {
    match args {
        [cmd, snapshot] if cmd == "check" => Some((snapshot.as_str(), None)),
        [cmd, snapshot, flag, config] if cmd == "check" && flag == "--config" => {
            Some((snapshot.as_str(), Some(config.as_str())))
        }
        _ => None,
    }
}

fn run_check(snapshot: &str, config: Option<&str>) -> Result<()> {
    let settings = match config {
        Some(path) => DebuggerSettings::from_toml_str(&read(path)?)?,
        None => DebuggerSettings::default(),
    };
    logging::init(&settings.logging);

    tracing::info!("Checking pending breakpoints in {}", snapshot);
    let pending = pending_from_json(&read(snapshot)?)?;

    for (id, record) in &pending {
        let state = if record.disabled { "disabled" } else { "enabled" };
        match &record.condition {
            Some(condition) => println!("{} ({}, if {})", id, state, condition),
            None => println!("{} ({})", id, state),
        }
    }
    tracing::info!("{} pending breakpoints ok", pending.len());
    Ok(())
}

fn read(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|err| breakpoint_model::Error::Io {
        path: path.to_string(),
        source: err,
    })
}
