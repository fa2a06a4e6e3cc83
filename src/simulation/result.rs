//! Simulation Result Module
//!
//! This module provides data structures for representing and visualizing the trajectory
//! of a fixed-step pathway simulation.
//!
//! # Key Components
//!
//! - [`SimulationResult`]: Stores the time axis and one concentration series per metabolite
//! - [`TimeSeriesMapping`]: A name-sorted map of time-dependent values
//! - [`PlotConfig`]: Configuration options for plotting simulation results
//! - [`PlotTraces`]: A type alias for plotly line traces

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(feature = "plotting")]
use plotly::{common::Mode, layout::Axis, Plot, Scatter};

/// Plot traces are stored in a vector of Box<Scatter<f64, f64>>.
#[cfg(feature = "plotting")]
pub type PlotTraces = Vec<Box<Scatter<f64, f64>>>;

/// Concentration series keyed by metabolite name.
pub type TimeSeriesMapping = BTreeMap<String, Vec<f64>>;

/// Represents the result of a simulation.
///
/// # Fields
///
/// * `time` - Simulated time of every sample (`0, dt, 2dt, ...`)
/// * `species` - Concentration series per metabolite, aligned with `time`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationResult {
    pub time: Vec<f64>,
    pub species: TimeSeriesMapping,
}

impl SimulationResult {
    /// Creates a new SimulationResult with the given time points and no species.
    pub fn new(time: Vec<f64>) -> Self {
        Self {
            time,
            species: BTreeMap::new(),
        }
    }

    /// Adds the concentration series of a metabolite.
    pub fn add_species(&mut self, species: String, values: Vec<f64>) {
        self.species.insert(species, values);
    }

    /// Concentration series of a metabolite, if present.
    pub fn get(&self, species: &str) -> Option<&Vec<f64>> {
        self.species.get(species)
    }

    /// Number of recorded samples, i.e. `steps + 1`.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Last recorded concentration of every metabolite.
    pub fn final_concentrations(&self) -> BTreeMap<String, f64> {
        self.species
            .iter()
            .filter_map(|(name, values)| values.last().map(|v| (name.clone(), *v)))
            .collect()
    }
}

/// Configuration options for plotting simulation results.
///
/// # Fields
///
/// * `title` - Title of the plot
/// * `width` - Width of the plot in pixels
/// * `height` - Height of the plot in pixels
/// * `x_label` - Label for the x-axis
/// * `y_label` - Label for the y-axis
#[cfg(feature = "plotting")]
pub struct PlotConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub x_label: String,
    pub y_label: String,
}

#[cfg(feature = "plotting")]
impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "Glycolysis".to_string(),
            width: 800,
            height: 600,
            x_label: "Time (s)".to_string(),
            y_label: "Concentration (mM)".to_string(),
        }
    }
}

#[cfg(feature = "plotting")]
impl SimulationResult {
    /// Creates a line plot with one trace per metabolite.
    ///
    /// # Arguments
    ///
    /// * `plot_config` - Configuration options for the plot
    /// * `show` - Whether to display the plot immediately
    pub fn plot(&self, plot_config: PlotConfig, show: bool) -> Plot {
        let mut plot: Plot = self.into();

        plot.set_layout(
            plotly::Layout::new()
                .title(plot_config.title)
                .width(plot_config.width)
                .height(plot_config.height)
                .x_axis(Axis::new().title(plot_config.x_label))
                .y_axis(Axis::new().title(plot_config.y_label)),
        );

        if show {
            plot.show();
        }

        plot
    }
}

#[cfg(feature = "plotting")]
impl From<&SimulationResult> for Plot {
    fn from(result: &SimulationResult) -> Self {
        let mut plot = Plot::new();
        let traces: PlotTraces = result.into();

        for trace in traces {
            plot.add_trace(trace);
        }

        plot
    }
}

#[cfg(feature = "plotting")]
impl From<SimulationResult> for Plot {
    fn from(result: SimulationResult) -> Self {
        (&result).into()
    }
}

/// One line trace per metabolite, in name order.
#[cfg(feature = "plotting")]
impl From<&SimulationResult> for PlotTraces {
    fn from(result: &SimulationResult) -> Self {
        result
            .species
            .iter()
            .map(|(species, values)| {
                Scatter::new(result.time.clone(), values.clone())
                    .name(species)
                    .mode(Mode::Lines)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> SimulationResult {
        let mut result = SimulationResult::new(vec![0.0, 1.0, 2.0]);
        result.add_species("Glukose".to_string(), vec![10.0, 9.5, 9.1]);
        result.add_species("G6P".to_string(), vec![0.0, 0.5, 0.9]);
        result
    }

    #[test]
    fn test_accessors() {
        let result = result();

        assert_eq!(result.len(), 3);
        assert!(!result.is_empty());
        assert_eq!(result.get("G6P"), Some(&vec![0.0, 0.5, 0.9]));
        assert_eq!(result.get("PEP"), None);

        let last = result.final_concentrations();
        assert_eq!(last["Glukose"], 9.1);
        assert_eq!(last["G6P"], 0.9);
    }

    #[test]
    fn test_species_are_name_sorted() {
        let result = result();
        let names: Vec<&String> = result.species.keys().collect();
        assert_eq!(names, vec!["G6P", "Glukose"]);
    }

    #[test]
    fn test_serialisation() {
        let json = serde_json::to_value(result()).unwrap();
        assert_eq!(json["time"][2], 2.0);
        assert_eq!(json["species"]["Glukose"][0], 10.0);
    }

    #[cfg(feature = "plotting")]
    #[test]
    fn test_traces_per_metabolite() {
        let traces: PlotTraces = (&result()).into();
        assert_eq!(traces.len(), 2);
    }
}
