//! Simulation Error Module
//!
//! This module provides the error type shared by pathway construction, parameter
//! mutation and simulation runs.
//!
//! # Key Error Types
//!
//! The [`SimulationError`] enum covers the invalid-argument failures of the engine:
//! - Non-positive or non-finite time steps and negative step counts
//! - Unknown enzyme or metabolite names
//! - Invalid kinetic parameters, concentrations and stoichiometric coefficients
//! - Pathway definitions that fail the consistency check
//!
//! Numerical edge cases (zero substrate, concentration underflow) are not errors; they
//! are handled locally by the rate law and the metabolite update.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Invalid time step: expected a finite dt > 0, got {0}")]
    InvalidTimeStep(f64),
    #[error("Invalid number of steps: expected a non-negative count, got {0}")]
    NegativeSteps(i64),
    #[error("Unknown enzyme: {0}")]
    UnknownEnzyme(String),
    #[error("Unknown metabolite: {0}")]
    UnknownMetabolite(String),
    #[error("Invalid value {value} for parameter '{parameter}' of enzyme '{enzyme}'")]
    InvalidParameter {
        enzyme: String,
        parameter: String,
        value: f64,
    },
    #[error("Invalid concentration {value} for metabolite '{metabolite}'")]
    InvalidConcentration { metabolite: String, value: f64 },
    #[error("Reaction '{reaction}' has invalid stoichiometric coefficient {coefficient}")]
    InvalidStoichiometry { reaction: String, coefficient: f64 },
    #[error("Reaction '{0}' has no substrates")]
    NoSubstrates(String),
    #[error("Invalid pathway definition: {}", .0.join("; "))]
    InvalidDefinition(Vec<String>),
}
