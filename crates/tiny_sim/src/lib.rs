pub mod commands;
pub mod pipeline;
pub mod presets;
pub mod simulation;
pub mod snapshot;

pub use commands::{ShellState, SimCommand};
pub use pipeline::{SimulationPlugin, SimulationSet};
pub use simulation::{DragState, Simulation};
pub use snapshot::{ParticleView, SimSnapshot};
