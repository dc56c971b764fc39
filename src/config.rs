//! Sequence configuration parameters.

use crate::error::SequenceError;

/// Configuration for a `GrowableSequence`.
///
/// Controls the initial allocation and how the buffer grows once it is full.
/// Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceConfig {
    /// Number of slots allocated by an empty sequence.
    ///
    /// Default: 16. Must be at least 1.
    pub baseline_capacity: usize,

    /// Multiplier applied to the current capacity when the buffer is full.
    ///
    /// Default: 2. Must be at least 2, otherwise appends stop being
    /// amortized O(1).
    pub growth_factor: usize,
}

impl SequenceConfig {
    /// Default baseline capacity.
    pub const DEFAULT_BASELINE_CAPACITY: usize = 16;

    /// Default growth factor.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Create a config with the default baseline and growth factor.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            baseline_capacity: Self::DEFAULT_BASELINE_CAPACITY,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Checks that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::InvalidConfiguration` if:
    /// - `baseline_capacity` is 0
    /// - `growth_factor` is less than 2
    pub fn validate(&self) -> Result<(), SequenceError> {
        if self.baseline_capacity == 0 {
            return Err(SequenceError::InvalidConfiguration {
                parameter: "baseline_capacity",
                value: self.baseline_capacity,
            });
        }
        if self.growth_factor < 2 {
            return Err(SequenceError::InvalidConfiguration {
                parameter: "growth_factor",
                value: self.growth_factor,
            });
        }
        Ok(())
    }

    /// Capacity to allocate so that `required` slots fit, starting from
    /// `current`.
    ///
    /// Returns `current` unchanged when it already fits. Otherwise the result
    /// is the largest of `required`, `current * growth_factor` and the
    /// baseline, so it never under-allocates and never grows by a fixed step.
    #[must_use]
    pub fn grown_capacity(&self, current: usize, required: usize) -> usize {
        if required <= current {
            return current;
        }
        current
            .saturating_mul(self.growth_factor)
            .max(self.baseline_capacity)
            .max(required)
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SequenceConfig::default();
        assert_eq!(config.baseline_capacity, 16);
        assert_eq!(config.growth_factor, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_baseline_rejected() {
        let config = SequenceConfig {
            baseline_capacity: 0,
            ..SequenceConfig::new()
        };
        assert_eq!(
            config.validate(),
            Err(SequenceError::InvalidConfiguration {
                parameter: "baseline_capacity",
                value: 0
            })
        );
    }

    #[test]
    fn unit_growth_factor_rejected() {
        let config = SequenceConfig {
            growth_factor: 1,
            ..SequenceConfig::new()
        };
        assert_eq!(
            config.validate(),
            Err(SequenceError::InvalidConfiguration {
                parameter: "growth_factor",
                value: 1
            })
        );
    }

    #[test]
    fn no_growth_when_it_fits() {
        let config = SequenceConfig::new();
        assert_eq!(config.grown_capacity(16, 16), 16);
        assert_eq!(config.grown_capacity(64, 3), 64);
    }

    #[test]
    fn doubles_when_one_more_is_needed() {
        let config = SequenceConfig::new();
        assert_eq!(config.grown_capacity(16, 17), 32);
        assert_eq!(config.grown_capacity(32, 33), 64);
    }

    #[test]
    fn jumps_straight_to_large_requirement() {
        let config = SequenceConfig::new();
        assert_eq!(config.grown_capacity(16, 2000), 2000);
    }

    #[test]
    fn never_below_baseline() {
        let config = SequenceConfig::new();
        assert_eq!(config.grown_capacity(0, 1), 16);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let config = SequenceConfig::new();
        assert_eq!(config.grown_capacity(usize::MAX / 2 + 1, usize::MAX), usize::MAX);
    }
}
