use std::collections::HashSet;

use crate::enzyme::EnzymeDefinition;
use crate::definition::PathwayDefinition;
use crate::validation::consistency::{check_duplicates, Report, Severity, ValidationResult};

/// Validates the enzymes of a pathway definition by checking their kinetic parameters
///
/// # Arguments
/// * `definition` - The pathway definition containing enzymes to validate
/// * `report` - Validation report to add any findings to
///
/// # Details
/// `kcat` and the enzyme concentration must be finite and non-negative, `km` finite and
/// strictly positive. An enzyme concentration of zero is allowed but reported as a
/// warning since the enzyme then never turns over. Enzymes no reaction refers to are
/// reported as warnings.
pub(super) fn check_enzymes(definition: &PathwayDefinition, report: &mut Report) {
    check_duplicates(
        definition.enzymes.iter().map(|e| e.name.as_str()),
        "Enzyme",
        "enzymes",
        report,
    );

    let used: HashSet<&str> = definition
        .reactions
        .iter()
        .map(|r| r.enzyme.as_str())
        .collect();

    for (idx, enzyme) in definition.enzymes.iter().enumerate() {
        check_enzyme_parameters(report, enzyme, idx);

        if !used.contains(enzyme.name.as_str()) {
            report.add_result(ValidationResult::new(
                format!("/enzymes/{idx}"),
                format!("Enzyme '{}' does not catalyse any reaction.", enzyme.name),
                Severity::Warning,
                Some(enzyme.name.clone()),
            ));
        }
    }
}

fn check_enzyme_parameters(report: &mut Report, enzyme: &EnzymeDefinition, idx: usize) {
    let checks = [
        ("kcat", enzyme.kcat, enzyme.kcat.is_finite() && enzyme.kcat >= 0.0),
        (
            "enzyme_concentration",
            enzyme.enzyme_concentration,
            enzyme.enzyme_concentration.is_finite() && enzyme.enzyme_concentration >= 0.0,
        ),
        ("km", enzyme.km, enzyme.km.is_finite() && enzyme.km > 0.0),
    ];

    for (parameter, value, valid) in checks {
        if !valid {
            report.add_result(ValidationResult::new(
                format!("/enzymes/{idx}/{parameter}"),
                format!(
                    "Enzyme '{}' has invalid {parameter} {value}.",
                    enzyme.name
                ),
                Severity::Error,
                Some(enzyme.name.clone()),
            ));
        }
    }

    if enzyme.enzyme_concentration == 0.0 {
        report.add_result(ValidationResult::new(
            format!("/enzymes/{idx}/enzyme_concentration"),
            format!(
                "Enzyme '{}' has a concentration of zero. Its reaction will not proceed.",
                enzyme.name
            ),
            Severity::Warning,
            Some(enzyme.name.clone()),
        ));
    }
}
