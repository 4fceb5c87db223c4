use std::collections::TryReserveError;

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, SimError>;

/// Failures of the simulation core. All of them are local invariant
/// violations; none come from external I/O.
#[derive(Debug, Error)]
pub enum SimError {
    /// A growth request would exceed the spatial grid's cell count.
    #[error("particle count {requested} exceeds grid capacity {capacity}")]
    GridCapacityExceeded { requested: usize, capacity: usize },

    /// Box size, step size or another scalar is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Growing the particle array failed; the previous array is untouched.
    #[error("particle allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// An index that no longer (or never) named a particle.
    #[error("particle index {index} out of range (count {len})")]
    ParticleIndexOutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_informative() {
        let e = SimError::GridCapacityExceeded {
            requested: 17,
            capacity: 16,
        };
        let msg = format!("{e}");
        assert!(msg.contains("17"));
        assert!(msg.contains("capacity 16"));
    }

    #[test]
    fn test_allocation_error_converts() {
        let mut v: Vec<u64> = Vec::new();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        let e: SimError = err.into();
        assert!(matches!(e, SimError::Allocation(_)));
    }
}
