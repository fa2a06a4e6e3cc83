//! Pathway definitions
//!
//! Serialisable, name-based descriptions of a pathway. A [`PathwayDefinition`] is what
//! gets written to and read from JSON, checked by
//! [`check_consistency`](crate::validation::consistency::check_consistency) and finally
//! turned into a runnable [`Pathway`](crate::simulation::pathway::Pathway), which
//! resolves every name to a handle.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::enzyme::EnzymeDefinition;

/// A metabolite and its concentration at construction time (mM).
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct MetaboliteDefinition {
    #[builder(setter(into))]
    pub name: String,
    #[builder(default)]
    #[serde(default)]
    pub initial_concentration: f64,
}

impl MetaboliteDefinition {
    pub fn new(name: impl Into<String>, initial_concentration: f64) -> Self {
        Self {
            name: name.into(),
            initial_concentration,
        }
    }
}

/// A reference to a metabolite within a reaction, with its stoichiometric coefficient.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct ReactionElement {
    #[builder(setter(into))]
    pub metabolite: String,
    #[builder(default = "1.0")]
    #[serde(default = "unit_stoichiometry")]
    pub stoichiometry: f64,
}

fn unit_stoichiometry() -> f64 {
    1.0
}

impl ReactionElement {
    pub fn new(metabolite: impl Into<String>, stoichiometry: f64) -> Self {
        Self {
            metabolite: metabolite.into(),
            stoichiometry,
        }
    }
}

/// A reaction catalysed by a named enzyme.
///
/// The first substrate is the primary substrate that drives the rate law.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct ReactionDefinition {
    #[builder(setter(into))]
    pub name: String,
    /// Name of the catalysing enzyme
    #[builder(setter(into))]
    pub enzyme: String,
    #[builder(default, setter(into, each(name = "to_substrates")))]
    #[serde(default)]
    pub substrates: Vec<ReactionElement>,
    #[builder(default, setter(into, each(name = "to_products")))]
    #[serde(default)]
    pub products: Vec<ReactionElement>,
}

/// Complete description of a pathway. Reaction order is the evaluation order.
///
/// # Examples
///
/// ```
/// use glycosim::prelude::*;
///
/// let definition = PathwayDefinitionBuilder::default()
///     .name("Hexokinase only")
///     .to_metabolites(MetaboliteDefinition::new("Glukose", 10.0))
///     .to_metabolites(MetaboliteDefinition::new("G6P", 0.0))
///     .to_enzymes(
///         EnzymeDefinitionBuilder::default()
///             .name("Hexokinase")
///             .kcat(0.5)
///             .enzyme_concentration(1.0)
///             .km(1.0)
///             .build()
///             .unwrap(),
///     )
///     .to_reactions(
///         ReactionDefinitionBuilder::default()
///             .name("Glukose → G6P")
///             .enzyme("Hexokinase")
///             .to_substrates(ReactionElement::new("Glukose", 1.0))
///             .to_products(ReactionElement::new("G6P", 1.0))
///             .build()
///             .unwrap(),
///     )
///     .build()
///     .unwrap();
///
/// let pathway = Pathway::try_from(definition).unwrap();
/// assert_eq!(pathway.reactions().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct PathwayDefinition {
    #[builder(setter(into))]
    pub name: String,
    #[builder(default, setter(into, each(name = "to_metabolites")))]
    pub metabolites: Vec<MetaboliteDefinition>,
    #[builder(default, setter(into, each(name = "to_enzymes")))]
    pub enzymes: Vec<EnzymeDefinition>,
    #[builder(default, setter(into, each(name = "to_reactions")))]
    pub reactions: Vec<ReactionDefinition>,
}
