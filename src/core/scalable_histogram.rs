/// What the scalers need from a histogram: its area, and in-place multiplication of its contents.
pub trait ScalableHistogram {
    fn integral(&self) -> f64;
    fn scale(&mut self, factor: f64);

    /// Whether `factor` can be applied without the contents leaving their storage range.
    fn accepts_factor(&self, factor: f64) -> bool {
        factor.is_finite()
    }
}

impl<'a, H: ScalableHistogram + ?Sized> ScalableHistogram for &'a mut H {
    fn integral(&self) -> f64 {
        (**self).integral()
    }
    fn scale(&mut self, factor: f64) {
        (**self).scale(factor)
    }
    fn accepts_factor(&self, factor: f64) -> bool {
        (**self).accepts_factor(factor)
    }
}

impl<H: ScalableHistogram + ?Sized> ScalableHistogram for Box<H> {
    fn integral(&self) -> f64 {
        (**self).integral()
    }
    fn scale(&mut self, factor: f64) {
        (**self).scale(factor)
    }
    fn accepts_factor(&self, factor: f64) -> bool {
        (**self).accepts_factor(factor)
    }
}
