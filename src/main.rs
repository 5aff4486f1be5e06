//! Full omega drift analysis for a single "now".
//!
//! Usage: omega_drift [now_seconds]   (defaults to the present age, 13.8 Gyr)

use omega_core::{ModelParameters, PRESENT_AGE, SECONDS_PER_YEAR};
use omega_physics::CosmologyModel;
use omega_sim::full_analysis;

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("omega_sim=info".parse()?)
                .add_directive("omega_physics=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let now = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<f64>()?,
        None => PRESENT_AGE,
    };

    let model = CosmologyModel::new(ModelParameters::default())?;
    let analysis = full_analysis(&model, now)?;

    let s = &analysis.summary;
    println!("now                 {:.4e} s ({:.3} Gyr)", now, now / SECONDS_PER_YEAR / 1e9);
    println!("omega               {:.6e} Hz", s.omega);
    println!("d omega/dt          {:.6e} Hz/s", s.d_omega);
    println!("d2 omega/dt2        {:.6e} Hz/s^2", s.d2_omega);
    println!("normalized drift    {:.6e} 1/s", s.normalized_drift);
    println!("years to 1% change  {:.4e}", s.years_to_percent);
    println!();
    println!(
        "fate                {} (stability {:.1})",
        analysis.fate.scenario.name(),
        analysis.fate.stability_score
    );
    if let Some(halt) = analysis.fate.time_to_halt {
        println!("time to halt        {:.4e} years", halt / SECONDS_PER_YEAR);
    }
    println!("                    {}", analysis.fate.description);
    println!();
    if analysis.resonance.breakdown {
        println!(
            "resonance breakdown in {:.4e} years",
            analysis.resonance.time_to_breakdown / SECONDS_PER_YEAR
        );
    } else {
        println!("resonance breakdown never");
    }
    println!(
        "perception ratio over 1 Gyr  {:.9}",
        analysis.perception.perception_ratio
    );
    println!(
        "clock drift over 1 year      {:.6e} % ({})",
        analysis.clock_drift.percent_change,
        if analysis.clock_drift.detectable { "detectable" } else { "below clock precision" }
    );
    Ok(())
}
