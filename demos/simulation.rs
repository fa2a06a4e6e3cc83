use std::collections::BTreeMap;

use glycosim::prelude::*;
use plotly::{Layout, Plot};

fn main() -> Result<(), SimulationError> {
    // First, we construct the glycolytic pathway from glucose to pyruvate. Every enzyme
    // starts with its literature concentration unless it is listed in the overrides.
    // Here we double the amount of phosphofructokinase, the classic bottleneck.
    let overrides = BTreeMap::from([("PFK".to_string(), 0.004)]);
    let mut pathway = Pathway::glycolysis(10.0, &overrides)?;

    // The Display implementation prints metabolites, enzymes and reactions as tables
    println!("{}", pathway);

    // Enzyme parameters stay mutable between runs. The setters validate their input
    // and re-derive vmax, so the next step always sees consistent kinetics.
    if let Some(hexokinase) = pathway.enzyme_mut("Hexokinase") {
        hexokinase.set_km(0.1)?;
    }

    // Next, we describe the run: 600 steps of 0.5 s. ClampToSubstrate limits every
    // reaction to the substrate that is actually available, which conserves mass
    // exactly. The default policy (Unclamped) lets over-drawn substrates clamp at zero.
    let setup = SimulationSetupBuilder::default()
        .steps(600)
        .dt(0.5)
        .policy(DeltaPolicy::ClampToSubstrate)
        .build()
        .expect("Failed to build simulation setup");

    // Finally, we can run the simulation! The result holds one series per metabolite,
    // starting with the initial concentration.
    let result = pathway.run(&setup)?;

    for (name, concentration) in result.final_concentrations() {
        println!("{name:>10}: {concentration:.4} mM");
    }

    // Rusts type inference converts the SimulationResult into a Plotly Plot
    let mut plot: Plot = result.into();
    plot.set_layout(
        Layout::default()
            .title("Glycolysis")
            .show_legend(true),
    );
    plot.show();

    Ok(())
}
