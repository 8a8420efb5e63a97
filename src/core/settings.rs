use crate::core::constants::DEFAULT_TOLERANCE;
use crate::core::errors::CreationError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalerSettings {
    pub tolerance: f64,
    /// Runs the per-factor and combined-area post-conditions. The target-area check of
    /// `scale_to_area` always runs.
    pub verify_invariants: bool,
}

impl Default for ScalerSettings {
    fn default() -> Self {
        ScalerSettings {
            tolerance: DEFAULT_TOLERANCE,
            verify_invariants: cfg!(debug_assertions),
        }
    }
}

impl ScalerSettings {
    pub fn new(tolerance: f64, verify_invariants: bool) -> Result<ScalerSettings, CreationError> {
        expect!(!tolerance.is_finite(), CreationError::NonFiniteTolerance);
        expect!(tolerance < 0.0, CreationError::NegativeTolerance);
        Ok(ScalerSettings { tolerance, verify_invariants })
    }

    pub fn with_tolerance(self, tolerance: f64) -> Result<ScalerSettings, CreationError> {
        ScalerSettings::new(tolerance, self.verify_invariants)
    }

    pub fn verify_invariants(mut self, verify: bool) -> ScalerSettings {
        self.verify_invariants = verify;
        self
    }

    pub fn diagnostic() -> ScalerSettings {
        ScalerSettings::default().verify_invariants(true)
    }
}
