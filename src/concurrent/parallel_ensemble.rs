use crate::core::*;
use crate::scaling::ensemble_scaler::WeightedEnsembleScaler;
use crate::scaling::weighted_histogram::WeightedHistogram;
use rayon::prelude::*;

impl WeightedEnsembleScaler {
    /// Same contract as `scale_ensemble`, with members scaled on the rayon pool.
    ///
    /// Members share no state, so they are scaled independently and joined before the
    /// combined area is summed and checked.
    pub fn scale_ensemble_parallel<H>(&self, members: &mut [WeightedHistogram<H>], combined_target_area: f64) -> Result<f64, ScalingError>
    where
        H: ScalableHistogram + Send,
    {
        self.validate(members, combined_target_area)?;

        let scaler = *self.scaler();
        let areas = members
            .par_iter_mut()
            .map(|member| -> Result<f64, ScalingError> {
                let target = member.target_area(combined_target_area);
                scaler.scale_to_area(member.histogram_mut(), target)?;
                Ok(member.histogram().integral())
            })
            .collect::<Result<Vec<f64>, ScalingError>>()?;

        let combined_area: f64 = areas.iter().sum();
        self.check_combined_area(combined_area, combined_target_area)?;
        Ok(combined_area)
    }
}
