use crate::core::*;
use lazycell::AtomicLazyCell;
use std::fmt;

/// Fixed-width one dimensional histogram over `[low, high)`.
///
/// Contents are laid out with the underflow bin at index 0 and the overflow bin at
/// `bin_count + 1`, so in-range bins are addressed `1..=bin_count`. The integral only
/// covers in-range bins and is cached until the next mutation.
pub struct BinnedHistogram<T: BinContent> {
    low: f64,
    high: f64,
    bin_width: f64,
    entries: u64,
    contents: Vec<T>,
    sumw2: Option<Vec<T>>,
    integral: AtomicLazyCell<f64>,
}

impl<T: BinContent> BinnedHistogram<T> {
    pub fn new(bin_count: usize, low: f64, high: f64) -> Result<BinnedHistogram<T>, CreationError> {
        expect!(bin_count == 0, CreationError::ZeroBins);
        expect!(!low.is_finite() || !high.is_finite(), CreationError::NonFiniteBounds);
        expect!(low >= high, CreationError::LowNotBelowHigh);

        Ok(BinnedHistogram {
            low,
            high,
            bin_width: (high - low) / bin_count as f64,
            entries: 0,
            contents: vec![T::zero(); bin_count + 2],
            sumw2: None,
            integral: AtomicLazyCell::new(),
        })
    }

    /// Builds a histogram from in-range bin contents; under- and overflow start empty.
    pub fn from_contents(low: f64, high: f64, contents: &[T]) -> Result<BinnedHistogram<T>, CreationError> {
        let mut histogram = BinnedHistogram::new(contents.len(), low, high)?;
        histogram.contents[1..=contents.len()].copy_from_slice(contents);
        histogram.entries = contents.len() as u64;
        Ok(histogram)
    }

    /// Starts tracking the sum of squared weights per bin, seeded from the current
    /// contents as if every entry so far had unit weight.
    pub fn with_sumw2(mut self) -> BinnedHistogram<T> {
        if self.sumw2.is_none() {
            self.sumw2 = Some(self.contents.clone());
        }
        self
    }

    pub fn bin_count(&self) -> usize {
        self.contents.len() - 2
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    pub fn entries(&self) -> u64 {
        self.entries
    }

    pub fn has_sumw2(&self) -> bool {
        self.sumw2.is_some()
    }

    pub fn bin_index(&self, x: f64) -> usize {
        if !(x >= self.low) {
            0
        } else if x >= self.high {
            self.bin_count() + 1
        } else {
            let idx = ((x - self.low) / self.bin_width) as usize + 1;
            // rounding can push values just below `high` past the last bin
            idx.min(self.bin_count())
        }
    }

    pub fn bin_low_edge(&self, index: usize) -> Option<f64> {
        if index == 0 || index > self.bin_count() {
            return None;
        }
        Some(self.low + (index - 1) as f64 * self.bin_width)
    }

    pub fn fill(&mut self, x: f64) {
        self.fill_weighted(x, T::one());
    }

    pub fn fill_weighted(&mut self, x: f64, weight: T) {
        let idx = self.bin_index(x);
        self.contents[idx] += weight;
        if let Some(ref mut sumw2) = self.sumw2 {
            sumw2[idx] += weight * weight;
        }
        self.entries += 1;
        self.integral = AtomicLazyCell::new();
    }

    pub fn bin_content(&self, index: usize) -> Option<T> {
        self.contents.get(index).cloned()
    }

    /// In-range contents, without under- and overflow.
    pub fn contents(&self) -> &[T] {
        let n = self.bin_count();
        &self.contents[1..=n]
    }

    pub fn underflow(&self) -> T {
        self.contents[0]
    }

    pub fn overflow(&self) -> T {
        self.contents[self.bin_count() + 1]
    }

    pub fn bin_error(&self, index: usize) -> Option<f64> {
        match self.sumw2 {
            Some(ref sumw2) => sumw2.get(index).map(|w2| w2.as_f64().sqrt()),
            None => self.bin_content(index).map(|c| c.as_f64().abs().sqrt()),
        }
    }

    pub fn clear(&mut self) {
        for c in self.contents.iter_mut() {
            *c = T::zero();
        }
        if let Some(ref mut sumw2) = self.sumw2 {
            for w2 in sumw2.iter_mut() {
                *w2 = T::zero();
            }
        }
        self.entries = 0;
        self.integral = AtomicLazyCell::new();
    }

    fn compute_integral(&self) -> f64 {
        self.contents().iter().map(BinContent::as_f64).sum()
    }
}

impl<T: BinContent> ScalableHistogram for BinnedHistogram<T> {
    fn integral(&self) -> f64 {
        if let Some(integral) = self.integral.get() {
            return integral;
        }
        let integral = self.compute_integral();
        // a concurrent reader may have filled it first, with the same value
        let _ = self.integral.fill(integral);
        integral
    }

    fn accepts_factor(&self, factor: f64) -> bool {
        T::from_f64(factor).map_or(false, |f| f.is_finite())
    }

    fn scale(&mut self, factor: f64) {
        let f = match T::from_f64(factor) {
            Some(f) => f,
            None => T::infinity(),
        };
        for c in self.contents.iter_mut() {
            *c *= f;
        }
        if let Some(ref mut sumw2) = self.sumw2 {
            let f2 = f * f;
            for w2 in sumw2.iter_mut() {
                *w2 *= f2;
            }
        }
        self.integral = AtomicLazyCell::new();
    }
}

impl<T: BinContent> Clone for BinnedHistogram<T> {
    fn clone(&self) -> Self {
        BinnedHistogram {
            low: self.low,
            high: self.high,
            bin_width: self.bin_width,
            entries: self.entries,
            contents: self.contents.clone(),
            sumw2: self.sumw2.clone(),
            integral: AtomicLazyCell::new(),
        }
    }
}

impl<T: BinContent + fmt::Debug> fmt::Debug for BinnedHistogram<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BinnedHistogram")
            .field("low", &self.low)
            .field("high", &self.high)
            .field("entries", &self.entries)
            .field("contents", &self.contents)
            .finish()
    }
}

impl<T: BinContent> PartialEq for BinnedHistogram<T> {
    fn eq(&self, other: &Self) -> bool {
        self.low == other.low
            && self.high == other.high
            && self.bin_width == other.bin_width
            && self.entries == other.entries
            && self.contents == other.contents
            && self.sumw2 == other.sumw2
    }
}
