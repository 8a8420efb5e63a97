use crate::core::ScalableHistogram;

/// A histogram borrowed for scaling, paired with its share of a combined area.
#[derive(Debug)]
pub struct WeightedHistogram<'a, H: ?Sized> {
    histogram: &'a mut H,
    weight: f64,
}

impl<'a, H: ScalableHistogram + ?Sized> WeightedHistogram<'a, H> {
    pub fn new(histogram: &'a mut H, weight: f64) -> WeightedHistogram<'a, H> {
        WeightedHistogram { histogram, weight }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn histogram(&self) -> &H {
        &*self.histogram
    }

    pub fn histogram_mut(&mut self) -> &mut H {
        &mut *self.histogram
    }

    pub fn target_area(&self, combined_target_area: f64) -> f64 {
        self.weight * combined_target_area
    }
}
