//! rover-runner: reads a rover script and prints where every rover ends up.
//!
//! Usage:
//!   rover-runner --input mission.txt
//!   rover-runner --format json --events < mission.txt
//!   rover-runner --input mission.txt --config sim.json

use anyhow::{bail, Context, Result};
use rover_core::{
    engine::SimEngine, event::EventLogEntry, report::MissionReport, ParsedProgram, SimConfig,
};
use std::env;
use std::io::{self, Read};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    report: &'a MissionReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    events: Option<&'a [EventLogEntry]>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let input = flag_value(&args, "--input");
    let config_path = flag_value(&args, "--config");
    let events = args.iter().any(|a| a == "--events");
    let format = match flag_value(&args, "--format").unwrap_or("text") {
        "text" => OutputFormat::Text,
        "json" => OutputFormat::Json,
        other => bail!("Unknown output format: {other} (expected text or json)"),
    };

    let mut config = match config_path {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if events {
        config = config.with_events();
    }

    let raw = read_script(input)?;
    log::debug!("read {} bytes of script", raw.len());

    let program = ParsedProgram::parse(&raw)?;
    let mut engine = SimEngine::new(program, config)?;
    let report = engine.execute()?;

    match format {
        OutputFormat::Text => {
            println!("{report}");
            if engine.config.record_events {
                println!();
                println!("=== EVENT LOG ===");
                for entry in engine.event_log() {
                    println!("  {:>4} {:<14} {}", entry.step, entry.event_type, entry.payload);
                }
            }
        }
        OutputFormat::Json => {
            let output = JsonOutput {
                report: &report,
                events: engine
                    .config
                    .record_events
                    .then(|| engine.event_log()),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn read_script(input: Option<&str>) -> Result<String> {
    match input {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Cannot read {path}"))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Cannot read script from stdin")?;
            Ok(buffer)
        }
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
