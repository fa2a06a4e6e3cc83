//! Parallel parameter sweeps
//!
//! Every configuration is turned into its own [`Pathway`] and simulated on a rayon worker.
//! Nothing is shared between runs, so each result equals the sequential run of the
//! same configuration.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::glycolysis::GlycolysisConfig;

use super::error::SimulationError;
use super::pathway::Pathway;
use super::result::SimulationResult;
use super::setup::SimulationSetup;

/// Simulates many glycolysis configurations in parallel.
///
/// Results are returned in the order of `configs`. The setup is validated once up front,
/// so an invalid setup fails before any pathway is built.
pub fn bulk_simulate(
    configs: &[GlycolysisConfig],
    setup: &SimulationSetup,
) -> Result<Vec<SimulationResult>, SimulationError> {
    setup.validate()?;

    configs
        .par_iter()
        .map(|config| {
            let mut pathway = Pathway::try_from(config)?;
            pathway.run(setup)
        })
        .collect()
}

/// Simulates the same configuration for several concentrations of one enzyme.
///
/// Each value replaces any override already present for `enzyme`.
pub fn sweep_enzyme_concentration(
    base: &GlycolysisConfig,
    enzyme: &str,
    concentrations: &[f64],
    setup: &SimulationSetup,
) -> Result<Vec<SimulationResult>, SimulationError> {
    let configs: Vec<GlycolysisConfig> = concentrations
        .iter()
        .map(|concentration| {
            let mut overrides: BTreeMap<String, f64> = base.enzyme_overrides.clone();
            overrides.insert(enzyme.to_string(), *concentration);
            GlycolysisConfig {
                enzyme_overrides: overrides,
                ..base.clone()
            }
        })
        .collect();

    bulk_simulate(&configs, setup)
}
