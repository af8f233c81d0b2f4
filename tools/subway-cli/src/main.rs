use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use subway_network::prelude::*;

mod network;

use network::{read_network, write_network, NetworkFile};

#[derive(Parser, Debug)]
#[command(
    name = "subway-cli",
    author,
    version,
    about = "Query and edit a subway network description",
    long_about = "Loads a JSON network description (stations plus lines made of ordered \
                  sections), runs a single operation against it and prints the JSON \
                  response.\n\n\
                  Editing commands can write the updated network back with --output."
)]
struct Args {
    /// Network description (JSON)
    #[arg(short, long)]
    network: PathBuf,

    /// Write the network to this file after an editing command
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shortest path between two stations
    Path { source: String, target: String },

    /// Show one line with its stations in order
    Line { line: String },

    /// Show every line
    Lines,

    /// Add a section to a line
    AddSection {
        line: String,
        up: String,
        down: String,
        distance: u32,
    },

    /// Remove a station from a line
    RemoveSection { line: String, station: String },
}

impl Command {
    fn edits(&self) -> bool {
        matches!(self, Self::AddSection { .. } | Self::RemoveSection { .. })
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    if !args.network.exists() {
        bail!("Network file does not exist: {}", args.network.display());
    }
    if args.output.is_some() && !args.command.edits() {
        log::warn!("--output is ignored for read-only commands");
    }

    let provider = read_network(&args.network)?
        .into_provider()
        .context("Failed to load network")?;
    let mut service = SubwayService::new(provider);

    match run(&mut service, &args.command) {
        Ok(()) => {
            if let (Some(output), true) = (&args.output, args.command.edits()) {
                write_network(&NetworkFile::from_provider(service.provider()), output)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => match err.downcast_ref::<SubwayError>() {
            Some(subway_err) => {
                log::error!("{subway_err}");
                print_json(&api_types::ErrorResponse::from(subway_err))?;
                Ok(ExitCode::FAILURE)
            }
            None => Err(err),
        },
    }
}

fn run(service: &mut SubwayService<InMemorySubwayProvider>, command: &Command) -> Result<()> {
    match command {
        Command::Path { source, target } => {
            let path = service.find_path(&source.as_str().into(), &target.as_str().into())?;
            log::info!("Shortest path {} -> {}: {}", source, target, path.distance);
            print_json(&path)
        }
        Command::Line { line } => print_json(&service.line_response(&line.as_str().into())?),
        Command::Lines => print_json(&service.all_line_responses()),
        Command::AddSection {
            line,
            up,
            down,
            distance,
        } => {
            let line = LineIdentifier::from(line.as_str());
            service.add_section(&line, &api_types::SectionRequest::new(up, down, *distance))?;
            print_json(&service.line_response(&line)?)
        }
        Command::RemoveSection { line, station } => {
            let line = LineIdentifier::from(line.as_str());
            service.remove_section(&line, &station.as_str().into())?;
            print_json(&service.line_response(&line)?)
        }
    }
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
