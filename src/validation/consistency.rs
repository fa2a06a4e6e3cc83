//! Consistency module for checking pathway definitions.
//!
//! This module validates a [`PathwayDefinition`] before it is turned into a runnable
//! pathway by checking:
//! - Metabolite names and initial concentrations
//! - Enzyme names and kinetic parameters
//! - Reaction references and stoichiometric coefficients
//!
//! The main entry point is the `check_consistency` function which runs all validation
//! checks and returns a `Report` with the results.

use std::collections::HashSet;
use std::fmt;

use colored::Colorize;

use crate::definition::PathwayDefinition;
use crate::validation::metabolites::check_metabolites;
use crate::validation::parameters::check_enzymes;
use crate::validation::reactions::check_reactions;

/// Checks the consistency of a `PathwayDefinition`.
///
/// # Arguments
///
/// * `definition` - A reference to the `PathwayDefinition` to be checked.
///
/// # Returns
///
/// Returns a `Report` containing the results of the consistency checks.
pub fn check_consistency(definition: &PathwayDefinition) -> Report {
    let mut report = Report::new();

    check_metabolites(definition, &mut report);
    check_enzymes(definition, &mut report);
    check_reactions(definition, &mut report);

    report
}

/// The `Report` struct is used to store the results of the validation checks.
///
/// The definition is considered invalid if any validation results have Error severity.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Default)]
pub struct Report {
    /// Whether the definition is valid overall. False if any errors were found.
    pub is_valid: bool,
    /// Vector of individual validation results found during checks.
    pub errors: Vec<ValidationResult>,
}

impl Report {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Adds a validation result to the report.
    ///
    /// If the result has Error severity, marks the overall report as invalid.
    pub fn add_result(&mut self, result: ValidationResult) {
        if result.severity == Severity::Error {
            self.is_valid = false;
        }
        self.errors.push(result);
    }

    /// Filters the results by the identifier.
    pub fn filter_results(&self, identifier: &str) -> Vec<ValidationResult> {
        self.errors
            .iter()
            .filter(|result| result.identifier.as_deref() == Some(identifier))
            .cloned()
            .collect()
    }

    /// Results of the given severity, in the order they were found.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &ValidationResult> {
        self.errors.iter().filter(move |r| r.severity == severity)
    }

    /// Messages of all error-severity results, prefixed with their location.
    pub fn error_messages(&self) -> Vec<String> {
        self.with_severity(Severity::Error)
            .map(|r| format!("{}: {}", r.location, r.message))
            .collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "{}", "Pathway definition is consistent".bold().green());
        }

        for result in &self.errors {
            writeln!(f, "{}", result)?;
        }

        Ok(())
    }
}

/// A single validation issue found during checking.
///
/// Contains the location where the issue was found, a descriptive message, and the severity level.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ValidationResult {
    /// JSON pointer path to the location of the validation issue
    location: String,
    /// Human readable description of the validation issue
    message: String,
    /// Severity level of the validation issue
    severity: Severity,
    /// Name of the metabolite, enzyme or reaction concerned, if any
    identifier: Option<String>,
}

impl ValidationResult {
    /// Creates a new `ValidationResult`.
    ///
    /// # Arguments
    ///
    /// * `location` - The location of the validation issue as a JSON pointer path.
    /// * `message` - A message describing the validation issue.
    /// * `severity` - The severity of the validation issue.
    /// * `identifier` - Name of the offending object, if any.
    pub fn new(
        location: String,
        message: String,
        severity: Severity,
        identifier: Option<String>,
    ) -> Self {
        Self {
            location,
            message,
            severity,
            identifier,
        }
    }

    /// JSON pointer path into the definition, e.g. `/reactions/3/substrates/0`.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> &Severity {
        &self.severity
    }

    pub fn identifier(&self) -> &Option<String> {
        &self.identifier
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self.severity {
            Severity::Error => self.message.bold().red(),
            Severity::Warning => self.message.bold().yellow(),
            Severity::Info => self.message.bold().green(),
        };

        let severity = match self.severity {
            Severity::Error => "Error".bold().red(),
            Severity::Warning => "Warning".bold().yellow(),
            Severity::Info => "Info".bold().green(),
        };

        write!(
            f,
            "[{}] {}:\n\t└── {}",
            self.location.bold(),
            severity,
            message
        )
    }
}

/// Severity levels for validation issues.
///
/// - Error: The definition cannot be simulated
/// - Warning: The definition may have issues but is still usable
/// - Info: Informational message
#[derive(Debug, Clone, PartialEq, Copy, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "Error"),
            Severity::Warning => write!(f, "Warning"),
            Severity::Info => write!(f, "Info"),
        }
    }
}

/// Names of all metabolites declared in the definition.
pub fn get_metabolite_names(definition: &PathwayDefinition) -> HashSet<&str> {
    definition
        .metabolites
        .iter()
        .map(|m| m.name.as_str())
        .collect()
}

/// Names of all enzymes declared in the definition.
pub fn get_enzyme_names(definition: &PathwayDefinition) -> HashSet<&str> {
    definition.enzymes.iter().map(|e| e.name.as_str()).collect()
}

/// Reports every name that occurs more than once, located at its second occurrence.
pub(super) fn check_duplicates<'a>(
    names: impl Iterator<Item = &'a str>,
    kind: &str,
    collection: &str,
    report: &mut Report,
) {
    let mut seen = HashSet::new();
    for (idx, name) in names.enumerate() {
        if !seen.insert(name) {
            report.add_result(ValidationResult::new(
                format!("/{collection}/{idx}"),
                format!("{kind} '{name}' is declared more than once."),
                Severity::Error,
                Some(name.to_string()),
            ));
        }
    }
}
