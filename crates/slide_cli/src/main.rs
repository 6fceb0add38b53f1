//! Slide CLI
//!
//! Runs draggable switches headlessly from a `slide.toml` so their settling
//! can be inspected without a host application.

mod config;
mod simulate;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use config::SlideConfig;
use simulate::{Report, Script};

/// Headless draggable switch simulator
#[derive(Parser, Debug)]
#[command(name = "slide")]
#[command(about = "Simulate draggable switches without a host")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default slide.toml
    Init {
        /// Directory to write into
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Drag the switch, release it and let it settle
    Simulate {
        /// Config file or directory containing slide.toml
        #[arg(short, long, default_value = ".")]
        config: PathBuf,

        /// Drag delta `dx,dy`; repeat for several frames of dragging
        #[arg(short, long = "drag", value_name = "DX,DY", allow_hyphen_values = true)]
        drags: Vec<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Press the toggle from the configured resting side
    Toggle {
        #[arg(short, long, default_value = ".")]
        config: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Glide toward a bound with an explicit power
    Go {
        #[arg(short, long, default_value = ".")]
        config: PathBuf,

        /// Glide toward the lower bound instead of the upper one
        #[arg(long)]
        down: bool,

        #[arg(long, default_value_t = 0.5)]
        power: f32,

        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Init { path, force } => init(path, force),
        Command::Simulate {
            config,
            drags,
            json,
        } => {
            let deltas = drags
                .iter()
                .map(|d| simulate::parse_delta(d))
                .collect::<Result<Vec<_>>>()?;
            session(config, Script::Drag(deltas), json)
        }
        Command::Toggle { config, json } => session(config, Script::Toggle, json),
        Command::Go {
            config,
            down,
            power,
            json,
        } => {
            let script = if down {
                Script::GoDown(power)
            } else {
                Script::GoUp(power)
            };
            session(config, script, json)
        }
    }
}

fn init(path: PathBuf, force: bool) -> Result<()> {
    let target = path.join("slide.toml");
    if target.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", target.display());
    }

    fs::create_dir_all(&path).with_context(|| format!("Failed to create {}", path.display()))?;
    fs::write(&target, SlideConfig::default().to_toml()?)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    tracing::info!("Wrote {}", target.display());
    Ok(())
}

fn session(config: PathBuf, script: Script, json: bool) -> Result<()> {
    let config = SlideConfig::load(&config)?;
    tracing::debug!(?script, "starting session");

    let report = simulate::run(&config, &script)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if !report.settled {
        tracing::warn!(
            frames = report.frames,
            "switch still moving after the frame budget"
        );
    }
    Ok(())
}

fn print_report(report: &Report) {
    println!("frames:   {}", report.frames);
    println!("position: ({}, {})", report.position[0], report.position[1]);
    println!("resting:  {}", report.resting);
    println!("fsm:      {} transitions", report.transitions);
    if report.notifications.is_empty() {
        println!("fired:    (none)");
    } else {
        println!("fired:    {}", report.notifications.join(", "));
    }
}
