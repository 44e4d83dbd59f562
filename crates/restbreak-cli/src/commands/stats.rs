use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveTime};
use clap::Subcommand;
use restbreak_core::{
    parse_events, replay, Config, FixedClock, MetricId, RecordingSink, StatsEngine,
};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Replay recorded scheduler events and print the resulting statistics
    Replay {
        /// JSON array of events (use - for stdin)
        file: PathBuf,
        /// Print the full snapshot as JSON
        #[arg(long)]
        json: bool,
        /// Time of day to stamp breaks with (HH:MM:SS); defaults to now
        #[arg(long, value_parser = parse_time)]
        at: Option<NaiveTime>,
    },
    /// List every metric with its description
    Describe,
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S").map_err(|e| format!("invalid time '{s}': {e}"))
}

fn read_input(file: &Path) -> std::io::Result<String> {
    if file.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file)
    }
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StatsAction::Replay { file, json, at } => {
            let config = Config::load()?;
            let events = parse_events(&read_input(&file)?)?;
            tracing::debug!("loaded {} events from {}", events.len(), file.display());
            let clock = FixedClock::new(at.unwrap_or_else(|| Local::now().time()));
            let mut engine = StatsEngine::with_parts(RecordingSink::new(), clock, config.presenter()?);

            replay(&events, &mut engine)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
            } else {
                let sink = engine.sink();
                for id in MetricId::ALL {
                    let text = sink.text(id).unwrap_or_default();
                    match sink.color(id) {
                        Some(color) => println!("{:<40} {text} ({color})", engine.describe(id)),
                        None => println!("{:<40} {text}", engine.describe(id)),
                    }
                }
            }
        }
        StatsAction::Describe => {
            for id in MetricId::ALL {
                println!("{:?}: {}", id, id.label());
                println!("    {}", id.help_text());
            }
        }
    }
    Ok(())
}
