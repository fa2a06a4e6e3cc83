//! Command-line interface for the glycosim library
//!
//! This binary simulates glycolysis or a custom pathway and inspects pathway definitions.
//!
//! # Usage
//!
//! ```bash
//! # Simulate 200 steps of 0.5 s with doubled phosphofructokinase
//! glycosim simulate --steps 200 --dt 0.5 --enzyme PFK=0.004 --output result.json
//!
//! # Print the pathway, its topology as DOT, or check a definition
//! glycosim info --lactate
//! glycosim graph | dot -Tsvg > glycolysis.svg
//! glycosim check pathway.json
//! ```

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use glycosim::prelude::*;
use tabled::{builder::Builder, settings::Style};

/// Main CLI configuration struct
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Simulate a pathway and print the final concentrations
    Simulate {
        #[command(flatten)]
        pathway: PathwayArgs,

        /// Number of time steps
        #[arg(short, long, default_value_t = 100, allow_negative_numbers = true)]
        steps: i64,

        /// Time increment per step in seconds
        #[arg(long, default_value_t = 1.0)]
        dt: f64,

        /// Limit every reaction's extent to the available substrates
        #[arg(long)]
        clamp: bool,

        /// Path to save the trajectory to as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to save an HTML plot of the trajectory to
        #[arg(short, long)]
        plot: Option<PathBuf>,
    },
    /// Print metabolites, enzymes and reactions of a pathway
    Info {
        #[command(flatten)]
        pathway: PathwayArgs,
    },
    /// Print the pathway topology in Graphviz DOT format
    Graph {
        #[command(flatten)]
        pathway: PathwayArgs,
    },
    /// Check a pathway definition for consistency
    Check {
        /// Path to the pathway definition (JSON)
        path: PathBuf,
    },
}

/// Options selecting the pathway to work with
#[derive(Args)]
struct PathwayArgs {
    /// Path to a custom pathway definition (JSON). Overrides all glycolysis options.
    #[arg(long)]
    definition: Option<PathBuf>,

    /// Path to a glycolysis configuration (JSON)
    #[arg(long, conflicts_with = "definition")]
    config: Option<PathBuf>,

    /// Initial glucose concentration in mM
    #[arg(short, long)]
    glucose: Option<f64>,

    /// Enzyme concentration override, e.g. `--enzyme PFK=0.004`
    #[arg(short, long = "enzyme", value_parser = parse_override)]
    enzymes: Vec<(String, f64)>,

    /// Do not track ATP/ADP and NAD+/NADH
    #[arg(long)]
    no_cofactors: bool,

    /// Append lactate dehydrogenase as eleventh step
    #[arg(long)]
    lactate: bool,
}

impl PathwayArgs {
    fn build(&self) -> Result<Pathway, Box<dyn Error>> {
        if let Some(path) = &self.definition {
            return Ok(Pathway::try_from(load_definition(path)?)?);
        }

        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GlycolysisConfig::default(),
        };

        if let Some(glucose) = self.glucose {
            config.initial_glucose = glucose;
        }
        if self.no_cofactors {
            config.cofactors = false;
        }
        if self.lactate {
            config.lactate_fermentation = true;
        }
        config.enzyme_overrides.extend(self.enzymes.iter().cloned());

        Ok(Pathway::try_from(&config)?)
    }
}

fn parse_override(value: &str) -> Result<(String, f64), String> {
    let (name, concentration) = value
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=CONCENTRATION, got '{value}'"))?;
    let concentration = concentration
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid concentration '{concentration}': {e}"))?;

    Ok((name.trim().to_string(), concentration))
}

fn print_final_concentrations(result: &SimulationResult) {
    let mut builder = Builder::default();
    builder.push_record(vec!["Metabolite", "Final (mM)"]);
    for (name, value) in result.final_concentrations() {
        builder.push_record(vec![name, format!("{:.6}", value)]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{}", table);
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn Error>> {
    match cli.command {
        Commands::Simulate {
            pathway,
            steps,
            dt,
            clamp,
            output,
            plot,
        } => {
            let mut pathway = pathway.build()?;
            let policy = if clamp {
                DeltaPolicy::ClampToSubstrate
            } else {
                DeltaPolicy::Unclamped
            };
            let setup = SimulationSetupBuilder::default()
                .steps(steps)
                .dt(dt)
                .policy(policy)
                .build()?;

            let result = pathway.run(&setup)?;
            print_final_concentrations(&result);

            if let Some(path) = output {
                save_result(&path, &result)?;
                log::info!("Trajectory written to {}", path.display());
            }

            if let Some(path) = plot {
                write_plot(&result, pathway.name(), &path)?;
            }
        }
        Commands::Info { pathway } => {
            println!("{}", pathway.build()?);
        }
        Commands::Graph { pathway } => {
            println!("{}", pathway.build()?.create_pathway_graph().to_dot());
        }
        Commands::Check { path } => {
            let report = check_consistency(&load_definition(&path)?);
            println!("{}", report);
            if !report.is_valid {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(feature = "plotting")]
fn write_plot(result: &SimulationResult, title: &str, path: &Path) -> Result<(), Box<dyn Error>> {
    let config = PlotConfig {
        title: title.to_string(),
        ..PlotConfig::default()
    };
    result.plot(config, false).write_html(path);
    log::info!("Plot written to {}", path.display());
    Ok(())
}

#[cfg(not(feature = "plotting"))]
fn write_plot(_: &SimulationResult, _: &str, _: &Path) -> Result<(), Box<dyn Error>> {
    Err("glycosim was built without the `plotting` feature".into())
}

/// Main entry point for the CLI application
pub fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {}", "Error:".bold().red(), err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_override() {
        assert_eq!(
            parse_override("PFK=0.004"),
            Ok(("PFK".to_string(), 0.004))
        );
        assert_eq!(
            parse_override(" Pyruvat-Kinase = 1e-3 "),
            Ok(("Pyruvat-Kinase".to_string(), 0.001))
        );
        assert!(parse_override("PFK").is_err());
        assert!(parse_override("PFK=fast").is_err());
    }

    #[test]
    fn test_cli_arguments() {
        let cli = Cli::try_parse_from([
            "glycosim", "simulate", "--steps", "10", "--enzyme", "PFK=0.004", "--lactate",
        ])
        .unwrap();

        match cli.command {
            Commands::Simulate { pathway, steps, .. } => {
                assert_eq!(steps, 10);
                let pathway = pathway.build().unwrap();
                assert_eq!(pathway.enzyme("PFK").unwrap().enzyme_concentration(), 0.004);
                assert_eq!(pathway.reactions().len(), 11);
            }
            _ => panic!("expected simulate"),
        }
    }
}
