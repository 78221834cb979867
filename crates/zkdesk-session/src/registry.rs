//! # Circuit Registry
//!
//! The ordered, fixed-size catalog of circuit variants the loaded engine
//! can prove statements about. The engine-reported count is cached at
//! construction and is fixed for the lifetime of the session.
//!
//! Navigation is cyclic: `next` and `previous` are total over any in-range
//! index, computed modulo the count, so stepping past either end wraps
//! around rather than failing.

use serde::Serialize;
use thiserror::Error;

use zkdesk_engine::{EngineError, ProvingEngine};

/// Error from the circuit registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The requested index is outside the catalog.
    #[error("circuit index {index} out of range (have {count})")]
    IndexOutOfRange {
        /// The requested index.
        index: u32,
        /// The number of circuits in the catalog.
        count: u32,
    },

    /// The engine reports zero circuits; navigation would be undefined.
    #[error("engine reports no circuits")]
    NoCircuits,

    /// The engine could not be asked for its circuit count.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// One entry in the circuit catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CircuitDescriptor {
    /// Position in the catalog, in `[0, count)`.
    pub index: u32,
    /// Display asset for the rendering layer (e.g. `circuit-0.svg`).
    pub display_asset: String,
}

/// The ordered catalog of available circuits.
#[derive(Debug, Clone)]
pub struct CircuitRegistry {
    descriptors: Vec<CircuitDescriptor>,
}

impl CircuitRegistry {
    /// Build the registry from the engine's reported circuit count.
    ///
    /// # Errors
    ///
    /// Propagates engine failures (e.g. not loaded); fails with
    /// [`RegistryError::NoCircuits`] when the engine reports a count of
    /// zero.
    pub fn from_engine(engine: &impl ProvingEngine) -> Result<Self, RegistryError> {
        let count = engine.circuit_count()?;
        Self::with_count(count)
    }

    /// Build a registry of `count` circuits with default display assets.
    pub fn with_count(count: u32) -> Result<Self, RegistryError> {
        if count == 0 {
            return Err(RegistryError::NoCircuits);
        }
        let descriptors = (0..count)
            .map(|index| CircuitDescriptor {
                index,
                display_asset: format!("circuit-{index}.svg"),
            })
            .collect();
        Ok(Self { descriptors })
    }

    /// Number of circuits in the catalog. Always positive.
    pub fn count(&self) -> u32 {
        self.descriptors.len() as u32
    }

    /// The descriptor at `index`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::IndexOutOfRange`] when `index >= count()`.
    pub fn descriptor(&self, index: u32) -> Result<&CircuitDescriptor, RegistryError> {
        self.descriptors
            .get(index as usize)
            .ok_or(RegistryError::IndexOutOfRange {
                index,
                count: self.count(),
            })
    }

    /// All descriptors in catalog order.
    pub fn descriptors(&self) -> &[CircuitDescriptor] {
        &self.descriptors
    }

    /// The index after `current`, wrapping past the end.
    pub fn next(&self, current: u32) -> u32 {
        (current + 1) % self.count()
    }

    /// The index before `current`, wrapping past zero.
    pub fn previous(&self, current: u32) -> u32 {
        (current + self.count() - 1) % self.count()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// next and previous are inverses and stay in range.
        #[test]
        fn navigation_inverse_and_in_range(
            count in 1u32..64,
            offset in 0u32..64,
        ) {
            let registry = CircuitRegistry::with_count(count).unwrap();
            let current = offset % count;
            let next = registry.next(current);
            let previous = registry.previous(current);
            prop_assert!(next < count);
            prop_assert!(previous < count);
            prop_assert_eq!(registry.next(previous), current);
            prop_assert_eq!(registry.previous(next), current);
        }
    }
}
