//! Information display module for pathways
//!
//! This module implements the `Display` trait for [`Pathway`], printing its metabolites,
//! enzymes and reactions as tables.

use std::fmt::{self, Display};

use tabled::{builder::Builder, settings::Style};

use crate::enzyme::Enzyme;
use crate::metabolite::Metabolite;
use crate::simulation::pathway::Pathway;

/// Trait for converting pathway components to table records
///
/// Implementors provide column headers and one string per column.
trait TableRecord {
    fn columns() -> Vec<String>;

    fn to_record(&self) -> Vec<String>;
}

impl Display for Pathway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = Builder::default();
        builder.push_record(vec![self.name().to_string()]);

        if !self.metabolites().is_empty() {
            builder.push_record(vec!["Metabolites"]);
            builder.push_record(vec![to_table(self.metabolites())]);
        }

        if !self.enzymes().is_empty() {
            builder.push_record(vec!["Enzymes"]);
            builder.push_record(vec![to_table(self.enzymes())]);
        }

        if !self.reactions().is_empty() {
            builder.push_record(vec!["Reactions"]);
            builder.push_record(vec![reaction_table(self)]);
        }

        let mut table = builder.build();
        table.with(Style::sharp());
        write!(f, "{}", table)
    }
}

fn to_table<T: TableRecord>(records: &[T]) -> String {
    let mut builder = Builder::default();
    builder.push_record(T::columns());

    for record in records {
        builder.push_record(record.to_record());
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// Reactions need the pathway to resolve participant and enzyme names.
fn reaction_table(pathway: &Pathway) -> String {
    let mut builder = Builder::default();
    builder.push_record(vec!["#", "Name", "Enzyme", "Equation", "Rate (mM/s)"]);

    let rates = pathway.rates();
    for (i, (reaction, rate)) in pathway.reactions().iter().zip(rates).enumerate() {
        builder.push_record(vec![
            (i + 1).to_string(),
            reaction.name().to_string(),
            pathway.enzymes()[reaction.enzyme().index()].name().to_string(),
            reaction.equation(pathway.metabolites()),
            format!("{:.4}", rate),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

impl TableRecord for Metabolite {
    fn columns() -> Vec<String> {
        vec![
            "Name".to_string(),
            "Initial (mM)".to_string(),
            "Current (mM)".to_string(),
            "Samples".to_string(),
        ]
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.name().to_string(),
            format!("{:.4}", self.initial_concentration()),
            format!("{:.4}", self.concentration()),
            self.history().len().to_string(),
        ]
    }
}

impl TableRecord for Enzyme {
    fn columns() -> Vec<String> {
        vec![
            "Name".to_string(),
            "kcat (1/s)".to_string(),
            "[E] (mM)".to_string(),
            "Km (mM)".to_string(),
            "Vmax (mM/s)".to_string(),
        ]
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.name().to_string(),
            self.kcat().to_string(),
            self.enzyme_concentration().to_string(),
            self.km().to_string(),
            format!("{:.4}", self.max_rate()),
        ]
    }
}
