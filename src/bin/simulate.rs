//! Headless run of one scene at a fixed frame rate.
//! Prints an energy table so runs can be compared without a window.
//!
//! Usage: simulate [crystal|evaporation] [frames] [seed]

use tiny_core::{Scene, SimConfig};
use tiny_sim::Simulation;

const FRAME_TIME: f64 = 1.0 / 60.0;
const REPORT_EVERY: usize = 60;

fn parse_scene(name: &str) -> Option<Scene> {
    match name.to_ascii_lowercase().as_str() {
        "crystal" => Some(Scene::Crystal),
        "evaporation" => Some(Scene::Evaporation),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let scene = match args.first() {
        Some(name) => parse_scene(name).ok_or_else(|| format!("unknown scene '{name}'"))?,
        None => Scene::Crystal,
    };
    let frames: usize = match args.get(1) {
        Some(n) => n.parse()?,
        None => 600,
    };
    let seed: u64 = match args.get(2) {
        Some(n) => n.parse()?,
        None => SimConfig::default().seed,
    };

    let config = SimConfig { seed, ..SimConfig::default() };
    let mut sim = Simulation::with_scene(config, scene)?;

    eprintln!(
        "Running {} for {} frames ({} particles, seed {})...",
        scene.name(),
        frames,
        sim.particle_count(),
        seed
    );

    println!(
        "{:>8} {:>10} {:>6} {:>12} {:>12} {:>12} {:>10}",
        "frame", "sim time", "count", "kinetic", "potential", "total", "temp"
    );
    println!("{}", "-".repeat(76));

    let mut steps = 0usize;
    for frame in 0..=frames {
        if frame > 0 {
            steps += sim.advance(FRAME_TIME)?;
        }
        if frame % REPORT_EVERY == 0 || frame == frames {
            let energy = sim.energy();
            println!(
                "{:>8} {:>10.3} {:>6} {:>12.3} {:>12.3} {:>12.3} {:>10.4}",
                frame,
                steps as f64 * sim.config().dt,
                sim.particle_count(),
                energy.kinetic,
                energy.potential,
                energy.total,
                energy.temperature,
            );
        }
    }

    eprintln!("Done: {} sub-steps", steps);
    Ok(())
}
