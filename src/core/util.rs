use crate::core::errors::InvalidArgument;

/// `|actual - expected| <= expected * tolerance`
#[inline]
pub fn within_tolerance(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= expected.abs() * tolerance
}

#[inline]
pub fn check_target_area(target_area: f64) -> Result<(), InvalidArgument> {
    check_non_negative(target_area, InvalidArgument::NonFiniteTargetArea, InvalidArgument::NegativeTargetArea)
}

#[inline]
pub fn check_weight(weight: f64) -> Result<(), InvalidArgument> {
    check_non_negative(weight, InvalidArgument::NonFiniteWeight, InvalidArgument::NegativeWeight)
}

#[inline]
pub fn check_factor(factor: f64) -> Result<(), InvalidArgument> {
    check_non_negative(factor, InvalidArgument::NonFiniteFactor, InvalidArgument::NegativeFactor)
}

fn check_non_negative(value: f64, non_finite: InvalidArgument, negative: InvalidArgument) -> Result<(), InvalidArgument> {
    if !value.is_finite() {
        Err(non_finite)
    } else if value < 0.0 {
        Err(negative)
    } else {
        Ok(())
    }
}

macro_rules! expect {
    ($t:expr, $e:expr) => {
        if $t { return Err($e); }
    };
}
