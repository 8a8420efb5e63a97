use num_traits as num;

/// Storage type of a single bin.
pub trait BinContent
    : num::Float + num::FromPrimitive + num::NumAssignOps + Copy + Send + Sync
    {
    /// Content as a f64.
    fn as_f64(&self) -> f64;
}

impl BinContent for f32 {
    #[inline(always)]
    fn as_f64(&self) -> f64 {
        f64::from(*self)
    }
}

impl BinContent for f64 {
    #[inline(always)]
    fn as_f64(&self) -> f64 {
        *self
    }
}
