use crate::core::ScalableHistogram;
use crate::st::BinnedHistogram;
use crate::tests::consts::*;
use rand::Rng;

macro_rules! succ {
    ($e:expr) => {
        let result = $e;
        assert!(result.is_ok(), "{:?}", result);
    }
}

macro_rules! assert_approx_eq {
    ($e:expr, $v:expr, $t:expr) => {
        assert!(($e as f64 - $v as f64).abs() <= $t as f64, "{} !~= {} within {}", $e, $v, $t)
    }
}

pub fn histo(contents: &[f64]) -> BinnedHistogram<f64> {
    BinnedHistogram::from_contents(AXIS_LOW, contents.len() as f64, contents).unwrap()
}

pub fn random_histo<R: Rng>(rng: &mut R, entries: usize) -> BinnedHistogram<f64> {
    let mut histogram = BinnedHistogram::<f64>::new(BIN_COUNT, AXIS_LOW, AXIS_HIGH).unwrap();
    for _ in 0..entries {
        let x = rng.gen_range(AXIS_LOW..AXIS_HIGH);
        let w = rng.gen_range(0.1..5.0);
        histogram.fill_weighted(x, w);
    }
    histogram
}

/// Records scale calls without touching any contents.
#[derive(Debug, Default)]
pub struct Stubborn {
    pub area: f64,
    pub scale_calls: usize,
}

impl ScalableHistogram for Stubborn {
    fn integral(&self) -> f64 {
        self.area
    }
    fn scale(&mut self, _factor: f64) {
        self.scale_calls += 1;
    }
}

/// Overshoots every scale by a fixed relative error.
#[derive(Debug)]
pub struct Drifting {
    pub area: f64,
    pub drift: f64,
}

impl ScalableHistogram for Drifting {
    fn integral(&self) -> f64 {
        self.area
    }
    fn scale(&mut self, factor: f64) {
        self.area *= factor * (1.0 + self.drift);
    }
}
