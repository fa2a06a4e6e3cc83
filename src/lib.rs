//! Glycolysis simulation library
//!
//! This library models metabolic pathways as chains of Michaelis-Menten reactions and
//! advances them with fixed time steps. It provides:
//! - Metabolites, enzymes and reactions with validated parameters
//! - The ten-step glycolytic pathway with optional cofactor and lactate bookkeeping
//! - Custom pathways from JSON definitions, checked for consistency
//! - Stoichiometry matrices and topology graphs
//! - Parallel parameter sweeps
//! - Plotting and tabular display of results

#![warn(unused_imports)]

/// Commonly used types and functionality re-exported for convenience
pub mod prelude {
    pub use crate::definition::*;
    pub use crate::enzyme::*;
    pub use crate::glycolysis::{GlycolysisConfig, GlycolysisConfigBuilder};
    pub use crate::graph::*;
    pub use crate::io::*;
    pub use crate::metabolite::*;
    pub use crate::reaction::*;
    pub use crate::simulation::error::*;
    pub use crate::simulation::pathway::*;
    pub use crate::simulation::result::*;
    pub use crate::simulation::setup::*;
    pub use crate::simulation::sweep::*;
    pub use crate::validation::consistency::{check_consistency, Report, Severity};
}

/// Metabolites and their concentration records
pub mod metabolite;

/// Michaelis-Menten enzymes
pub mod enzyme;

/// Enzyme-catalysed reactions
pub mod reaction;

/// Serialisable pathway definitions
pub mod definition;

/// The glycolytic pathway
pub mod glycolysis;

/// Simulation of pathways
pub mod simulation {
    pub use crate::simulation::pathway::Pathway;
    pub use crate::simulation::setup::SimulationSetup;

    /// Error types for simulation failures
    pub mod error;
    /// Pathway ownership and stepping
    pub mod pathway;
    /// Simulation result data structures
    pub mod result;
    /// Simulation setup and configuration
    pub mod setup;
    /// Stoichiometry matrix of a pathway
    pub mod stoich;
    /// Parallel simulation of many configurations
    pub mod sweep;
}

/// Consistency checks of pathway definitions
pub mod validation {
    /// Main consistency interface
    pub mod consistency;
    /// Validation of metabolite declarations
    mod metabolites;
    /// Validation of enzyme parameters
    mod parameters;
    /// Validation of reaction specifications
    mod reactions;
}

/// Pathway topology graph
pub mod graph;

/// Tabular display of pathways
pub mod info;

/// Plotting and visualization functionality
#[cfg(feature = "plotting")]
pub mod plotting;

/// IO functionality
pub mod io;
