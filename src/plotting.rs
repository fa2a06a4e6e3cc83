use plotly::{
    common::{Anchor, Line, Mode},
    layout::{Annotation, Axis, GridPattern, LayoutGrid},
    Layout, Plot, Scatter,
};
use thiserror::Error;

use crate::simulation::result::SimulationResult;

const COLORS: &[&str] = &[
    "green", "blue", "red", "purple", "orange", "yellow", "brown", "pink", "gray", "cyan",
];

const COLUMNS: usize = 3;
const DEFAULT_HEIGHT: usize = 300;

#[bon::bon]
impl SimulationResult {
    /// Plots selected metabolites, either overlaid or one panel each.
    ///
    /// # Arguments
    ///
    /// * `species` - Metabolites to include. All metabolites are plotted if not given.
    /// * `title` - Plot title. Defaults to "Simulation".
    /// * `panels` - Draw every metabolite in its own subplot instead of one shared axis.
    /// * `show` - Whether to display the plot immediately.
    ///
    /// # Errors
    ///
    /// * [`PlotError::SpeciesNotFound`] if a requested metabolite is not in the result
    /// * [`PlotError::NoSpecies`] if nothing would be plotted
    #[builder]
    pub fn plot_species(
        &self,
        species: Option<Vec<String>>,
        title: Option<String>,
        #[builder(default)] panels: bool,
        #[builder(default)] show: bool,
    ) -> Result<Plot, PlotError> {
        let selected: Vec<(&str, &Vec<f64>)> = match species {
            Some(names) => names
                .iter()
                .map(|name| {
                    self.species
                        .get_key_value(name)
                        .map(|(k, v)| (k.as_str(), v))
                        .ok_or_else(|| PlotError::SpeciesNotFound(name.clone()))
                })
                .collect::<Result<_, _>>()?,
            None => self.species.iter().map(|(k, v)| (k.as_str(), v)).collect(),
        };

        if selected.is_empty() {
            return Err(PlotError::NoSpecies);
        }

        let title = title.unwrap_or_else(|| "Simulation".to_string());
        let mut plot = Plot::new();

        if !panels {
            for (i, (name, values)) in selected.into_iter().enumerate() {
                plot.add_trace(
                    Scatter::new(self.time.clone(), values.clone())
                        .name(name)
                        .mode(Mode::Lines)
                        .line(Line::new().color(COLORS[i % COLORS.len()])),
                );
            }

            plot.set_layout(
                Layout::new()
                    .title(title)
                    .x_axis(Axis::new().title("Time (s)"))
                    .y_axis(Axis::new().title("Concentration (mM)")),
            );
        } else {
            let n_panels = selected.len();
            let columns = if n_panels < COLUMNS { 1 } else { COLUMNS };
            let rows = n_panels.div_ceil(columns);
            let mut layout = Layout::new()
                .title(title)
                .show_legend(false)
                .height(DEFAULT_HEIGHT * rows)
                .grid(
                    LayoutGrid::new()
                        .rows(rows)
                        .columns(columns)
                        .pattern(GridPattern::Independent),
                );

            for (i, (name, values)) in selected.into_iter().enumerate() {
                plot.add_trace(
                    Scatter::new(self.time.clone(), values.clone())
                        .name(name)
                        .mode(Mode::Lines)
                        .x_axis(&format!("x{}", i + 1))
                        .y_axis(&format!("y{}", i + 1))
                        .line(Line::new().color(COLORS[i % COLORS.len()])),
                );

                layout.add_annotation(
                    Annotation::new()
                        .y_ref(format!("y{} domain", i + 1))
                        .y_anchor(Anchor::Bottom)
                        .y(1)
                        .text(format!("<b>{}</b>", name))
                        .x_ref(format!("x{} domain", i + 1))
                        .x_anchor(Anchor::Center)
                        .x(0.5)
                        .show_arrow(false),
                );
            }

            plot.set_layout(layout);
        }

        if show {
            plot.show();
        }

        Ok(plot)
    }
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("Metabolite {0} is not part of the simulation result")]
    SpeciesNotFound(String),
    #[error("No metabolites to plot")]
    NoSpecies,
}
