//! Metabolite Module
//!
//! A [`Metabolite`] is a named concentration (mM) together with the record of the values
//! it took during a simulation. Metabolites are owned by a
//! [`Pathway`](crate::simulation::pathway::Pathway) and referenced by reactions through a
//! [`MetaboliteId`] handle, so a cofactor such as ATP can be consumed and regenerated by
//! several reactions without shared mutable references.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a metabolite inside the pool of the pathway that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MetaboliteId(pub(crate) usize);

impl MetaboliteId {
    /// Position of the metabolite in declaration order.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A chemical species tracked by concentration over time.
///
/// The concentration never drops below zero: any change that would make it negative
/// is clamped. `history[0]` is always the initial concentration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metabolite {
    name: String,
    initial_concentration: f64,
    concentration: f64,
    history: Vec<f64>,
}

impl Metabolite {
    /// Creates a metabolite with the given initial concentration in mM.
    ///
    /// Negative values are clamped to zero, in line with the update rule.
    pub fn new(name: impl Into<String>, initial_concentration: f64) -> Self {
        let initial = initial_concentration.max(0.0);
        Self {
            name: name.into(),
            initial_concentration: initial,
            concentration: initial,
            history: vec![initial],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current concentration in mM.
    pub fn concentration(&self) -> f64 {
        self.concentration
    }

    pub fn initial_concentration(&self) -> f64 {
        self.initial_concentration
    }

    /// Recorded concentrations, starting with the initial value.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Adds `delta` to the concentration, clamps the result at zero and records it.
    ///
    /// Every call grows the history by exactly one entry, even if `delta` is zero
    /// or the result was clamped.
    pub fn update(&mut self, delta: f64) {
        self.apply(delta);
        self.record();
    }

    /// Adds `delta` and clamps at zero without touching the history.
    ///
    /// The engine applies every reaction's contribution through this method and records
    /// the metabolite once per step, so metabolites shared by several reactions keep one
    /// history entry per step.
    pub(crate) fn apply(&mut self, delta: f64) {
        self.concentration = (self.concentration + delta).max(0.0);
    }

    /// Appends the current concentration to the history.
    pub(crate) fn record(&mut self) {
        self.history.push(self.concentration);
    }

    /// Restores the initial concentration and drops everything but the first history entry.
    pub(crate) fn reset(&mut self) {
        self.concentration = self.initial_concentration;
        self.history.clear();
        self.history.push(self.initial_concentration);
    }
}

impl fmt::Display for Metabolite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.3} mM", self.name, self.concentration)
    }
}
