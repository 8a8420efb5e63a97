use crate::core::util::{check_factor, check_target_area, within_tolerance};
use crate::core::*;

/// Scales single histograms in place, either to a target area or by an explicit factor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HistogramScaler {
    settings: ScalerSettings,
}

impl HistogramScaler {
    pub fn new(settings: ScalerSettings) -> HistogramScaler {
        HistogramScaler { settings }
    }

    pub fn settings(&self) -> &ScalerSettings {
        &self.settings
    }

    /// Brings the integral of `histogram` to `target_area`.
    ///
    /// Histograms without any area are left as they are: there is no shape to
    /// redistribute. After a scale the achieved integral must be within the configured
    /// relative tolerance of the target, which is checked regardless of
    /// `verify_invariants`.
    pub fn scale_to_area<H>(&self, histogram: &mut H, target_area: f64) -> Result<(), ScalingError>
    where
        H: ScalableHistogram + ?Sized,
    {
        check_target_area(target_area)?;

        let integral = histogram.integral();
        if !(integral > 0.0) {
            debug!("integral {} has no area to scale, leaving histogram untouched", integral);
            return Ok(());
        }

        let factor = target_area / integral;
        if !factor.is_finite() {
            warn!("target area {} is out of reach from integral {}", target_area, integral);
            return Err(ScalingError::ScalingInvariantViolation { expected: target_area, actual: integral });
        }
        self.scale_by_factor(histogram, factor)?;

        let actual = histogram.integral();
        if !within_tolerance(actual, target_area, self.settings.tolerance) {
            warn!("scaled integral {} missed target area {}", actual, target_area);
            return Err(ScalingError::ScalingInvariantViolation { expected: target_area, actual });
        }
        Ok(())
    }

    /// Multiplies every bin of `histogram` by `factor`.
    pub fn scale_by_factor<H>(&self, histogram: &mut H, factor: f64) -> Result<(), ScalingError>
    where
        H: ScalableHistogram + ?Sized,
    {
        check_factor(factor)?;
        if !histogram.accepts_factor(factor) {
            let integral = histogram.integral();
            warn!("factor {} exceeds the bin storage range, leaving histogram untouched", factor);
            return Err(ScalingError::ScalingInvariantViolation { expected: integral * factor, actual: integral });
        }
        trace!("scaling histogram by {}", factor);

        if !self.settings.verify_invariants {
            histogram.scale(factor);
            return Ok(());
        }

        let expected = histogram.integral() * factor;
        histogram.scale(factor);
        let actual = histogram.integral();
        if !within_tolerance(actual, expected, self.settings.tolerance) {
            warn!("scaling by {} produced integral {}, expected {}", factor, actual, expected);
            return Err(ScalingError::ScalingInvariantViolation { expected, actual });
        }
        Ok(())
    }
}
