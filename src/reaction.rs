//! Reaction Module
//!
//! A [`Reaction`] binds one enzyme to a stoichiometric set of substrates and products.
//! The single-substrate/single-product case and the split case (one substrate, two
//! products) are both expressed through the same participant lists.
//!
//! # Rate law
//!
//! The reaction rate is the enzyme's Michaelis-Menten rate evaluated at the concentration
//! of the *primary substrate*, the first entry of the substrate list. Further substrates
//! (e.g. ATP in the hexokinase step) are consumed according to their coefficients but
//! do not enter the rate law.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::enzyme::{Enzyme, EnzymeId};
use crate::metabolite::{Metabolite, MetaboliteId};
use crate::simulation::error::SimulationError;

/// How the extent of a reaction within one time step is limited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaPolicy {
    /// `extent = rate * dt`. Over-drawn substrates are clamped to zero by the
    /// metabolite update while products still receive the full extent.
    #[default]
    Unclamped,
    /// `extent = min(rate * dt, conc_i / coeff_i)` over all substrates, so no substrate
    /// is ever over-drawn and mass is conserved. A metabolite listed more than once
    /// counts with the sum of its coefficients.
    ClampToSubstrate,
}

/// A metabolite taking part in a reaction with its stoichiometric coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub metabolite: MetaboliteId,
    pub stoichiometry: f64,
}

impl Participant {
    pub fn new(metabolite: MetaboliteId, stoichiometry: f64) -> Self {
        Self {
            metabolite,
            stoichiometry,
        }
    }
}

/// An enzyme-catalysed, irreversible transformation of substrates into products.
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    name: String,
    enzyme: EnzymeId,
    substrates: Vec<Participant>,
    products: Vec<Participant>,
}

impl Reaction {
    /// Creates a reaction.
    ///
    /// # Errors
    ///
    /// * [`SimulationError::NoSubstrates`] if `substrates` is empty
    /// * [`SimulationError::InvalidStoichiometry`] if any coefficient is not a finite,
    ///   strictly positive number
    pub fn new(
        name: impl Into<String>,
        enzyme: EnzymeId,
        substrates: Vec<Participant>,
        products: Vec<Participant>,
    ) -> Result<Self, SimulationError> {
        let name = name.into();

        if substrates.is_empty() {
            return Err(SimulationError::NoSubstrates(name));
        }

        for participant in substrates.iter().chain(products.iter()) {
            let coefficient = participant.stoichiometry;
            if !(coefficient.is_finite() && coefficient > 0.0) {
                return Err(SimulationError::InvalidStoichiometry {
                    reaction: name,
                    coefficient,
                });
            }
        }

        Ok(Self {
            name,
            enzyme,
            substrates,
            products,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn enzyme(&self) -> EnzymeId {
        self.enzyme
    }

    pub fn substrates(&self) -> &[Participant] {
        &self.substrates
    }

    pub fn products(&self) -> &[Participant] {
        &self.products
    }

    /// The substrate whose concentration drives the rate law.
    pub fn primary_substrate(&self) -> MetaboliteId {
        self.substrates[0].metabolite
    }

    /// Current rate in mM/s.
    pub(crate) fn rate(&self, metabolites: &[Metabolite], enzymes: &[Enzyme]) -> f64 {
        let substrate = &metabolites[self.primary_substrate().0];
        enzymes[self.enzyme.0].rate(substrate.concentration())
    }

    /// Advances the reaction by `dt` seconds and returns the extent applied.
    ///
    /// Every substrate loses `extent * coefficient`, every product gains
    /// `extent * coefficient`. Each participant is touched once per call, in declaration
    /// order, substrates first.
    pub(crate) fn step(
        &self,
        metabolites: &mut [Metabolite],
        enzymes: &[Enzyme],
        dt: f64,
        policy: DeltaPolicy,
    ) -> f64 {
        let mut extent = self.rate(metabolites, enzymes) * dt;

        if policy == DeltaPolicy::ClampToSubstrate {
            extent = self
                .substrates
                .iter()
                .map(|s| {
                    let demand: f64 = self
                        .substrates
                        .iter()
                        .filter(|other| other.metabolite == s.metabolite)
                        .map(|other| other.stoichiometry)
                        .sum();
                    metabolites[s.metabolite.0].concentration() / demand
                })
                .fold(extent, f64::min);
        }

        for substrate in &self.substrates {
            metabolites[substrate.metabolite.0].apply(-extent * substrate.stoichiometry);
        }

        for product in &self.products {
            metabolites[product.metabolite.0].apply(extent * product.stoichiometry);
        }

        extent
    }

    /// Renders the reaction as `A + 2 B → C`.
    pub fn equation(&self, metabolites: &[Metabolite]) -> String {
        let side = |participants: &[Participant]| {
            participants
                .iter()
                .map(|p| {
                    let name = metabolites[p.metabolite.0].name();
                    if p.stoichiometry == 1.0 {
                        name.to_string()
                    } else {
                        format!("{} {}", p.stoichiometry, name)
                    }
                })
                .join(" + ")
        };

        format!("{} → {}", side(&self.substrates), side(&self.products))
    }
}
