// Simulation units are reduced: particle radius, mass and the potential's
// equilibrium distance are all of order one.

/// Side length of a spatial grid cell. Fixed to the nominal particle radius,
/// independent of the radii actually in use.
pub const GRID_CELL_SIDE: f64 = 1.0;

/// Simulated time advanced per second of real time
pub const SIMULATED_TIME_PER_SECOND: f64 = 5.0;

/// Longest real frame time fed to the integrator; anything beyond is dropped
pub const MAX_FRAME_TIME: f64 = 1.0 / 60.0;

/// Number of lattice rings placed by the default particle preset
pub const DEFAULT_LATTICE_RINGS: u32 = 13;

/// Standard deviation of the Gaussian jitter added to lattice positions
pub const LATTICE_JITTER: f64 = 0.05;

/// Gravity applied by the evaporation preset
pub const EVAPORATION_GRAVITY: f64 = 1.0;

/// Heat bath temperature used by the evaporation preset
pub const EVAPORATION_TEMPERATURE: f64 = 20.0;

/// Velocity damping rate applied to the drag target (per unit mass)
pub const DRAG_DAMPING: f64 = 1.0;
