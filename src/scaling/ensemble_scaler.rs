use crate::core::util::{check_target_area, check_weight, within_tolerance};
use crate::core::*;
use crate::scaling::histogram_scaler::HistogramScaler;
use crate::scaling::weighted_histogram::WeightedHistogram;

/// Distributes a combined target area across weighted histograms.
///
/// The combined-area check only holds when the weights sum to one; a failure is
/// attributed to the caller's weights.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WeightedEnsembleScaler {
    scaler: HistogramScaler,
}

impl WeightedEnsembleScaler {
    pub fn new(settings: ScalerSettings) -> WeightedEnsembleScaler {
        WeightedEnsembleScaler { scaler: HistogramScaler::new(settings) }
    }

    pub fn from_scaler(scaler: HistogramScaler) -> WeightedEnsembleScaler {
        WeightedEnsembleScaler { scaler }
    }

    pub fn scaler(&self) -> &HistogramScaler {
        &self.scaler
    }

    pub fn scale_member<H>(&self, member: &mut WeightedHistogram<H>, combined_target_area: f64) -> Result<(), ScalingError>
    where
        H: ScalableHistogram + ?Sized,
    {
        check_target_area(combined_target_area)?;
        check_weight(member.weight())?;
        let target = member.target_area(combined_target_area);
        self.scaler.scale_to_area(member.histogram_mut(), target)
    }

    /// Scales every member to `weight * combined_target_area` and returns the combined
    /// area reached. Arguments are validated before any histogram is touched.
    pub fn scale_ensemble<H>(&self, members: &mut [WeightedHistogram<H>], combined_target_area: f64) -> Result<f64, ScalingError>
    where
        H: ScalableHistogram + ?Sized,
    {
        self.validate(members, combined_target_area)?;

        let mut combined_area = 0.0;
        for member in members.iter_mut() {
            let target = member.target_area(combined_target_area);
            self.scaler.scale_to_area(member.histogram_mut(), target)?;
            combined_area += member.histogram().integral();
        }

        self.check_combined_area(combined_area, combined_target_area)?;
        Ok(combined_area)
    }

    pub(crate) fn validate<H>(&self, members: &[WeightedHistogram<H>], combined_target_area: f64) -> Result<(), ScalingError>
    where
        H: ScalableHistogram + ?Sized,
    {
        check_target_area(combined_target_area)?;
        for member in members {
            check_weight(member.weight())?;
        }
        Ok(())
    }

    pub(crate) fn check_combined_area(&self, combined_area: f64, combined_target_area: f64) -> Result<(), ScalingError> {
        debug!("ensemble scaled to combined area {} (target {})", combined_area, combined_target_area);
        let settings = self.scaler.settings();
        if settings.verify_invariants && !within_tolerance(combined_area, combined_target_area, settings.tolerance) {
            warn!("combined area {} misses target {}, check that weights sum to one", combined_area, combined_target_area);
            return Err(ScalingError::EnsembleAreaMismatch {
                expected: combined_target_area,
                actual: combined_area,
            });
        }
        Ok(())
    }
}
