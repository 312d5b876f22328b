//! Thin CLI wrapper around the library: loads a [`Config`], resolves the
//! named [`models::Problem`], builds the default [`io::OutputSink`], and
//! calls [`driver::run`].

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use eulermhd2d::config::Config;
use eulermhd2d::driver;
use eulermhd2d::io::NullSink;
use eulermhd2d::models::{problem_from_name, ProblemParams};

#[derive(Parser)]
#[command(name = "eulermhd2d", version, about = "2-D Euler/MHD-GLM finite-volume solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a simulation from a YAML configuration file.
    Run {
        /// Path to a config.yaml, or a built-in preset name (see `presets`).
        config: String,

        /// Additional `key=value` overrides applied after the file, in order.
        #[arg(long = "set", value_name = "key=value")]
        overrides: Vec<String>,
    },
    /// Lists the built-in configuration presets.
    Presets,
}

const PRESETS: &[(&str, &str)] =
    &[("sod_x", include_str!("setups/sod_x.yaml")), ("orszag_tang", include_str!("setups/orszag_tang.yaml"))];

fn load_config(input: &str, overrides: &[String]) -> Result<Config> {
    let yaml = match PRESETS.iter().find(|(name, _)| *name == input) {
        Some((_, yaml)) => yaml.to_string(),
        None => std::fs::read_to_string(input).with_context(|| format!("reading config file '{input}'"))?,
    };
    let mut config: Config = serde_yaml::from_str(&yaml).with_context(|| format!("parsing config '{input}'"))?;
    config.patch_from(overrides).context("applying --set overrides")?;
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Presets => {
            for (name, _) in PRESETS {
                println!("{name}");
            }
            Ok(())
        }
        Command::Run { config, overrides } => {
            let config = load_config(&config, &overrides)?;

            let params = ProblemParams {
                gamma: config.gamma,
                xmin: config.xmin,
                xmax: config.xmax,
                ymin: config.ymin,
                ymax: config.ymax,
            };
            let problem = problem_from_name(&config.problem_name, &params).context("resolving problem_name")?;

            let mut sink = NullSink;
            driver::run(&config, problem.as_ref(), &mut sink).context("running simulation")?;
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
