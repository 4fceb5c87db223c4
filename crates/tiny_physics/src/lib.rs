pub mod boundary;
pub mod forces;
pub mod grid;
pub mod lattice;
pub mod thermodynamics;

pub use boundary::periodize;
pub use grid::SpatialGrid;
pub use thermodynamics::{EnergyReport, LangevinKick, Thermostat};
