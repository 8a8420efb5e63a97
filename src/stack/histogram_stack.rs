use crate::core::ScalableHistogram;
use crate::stack::colour::ColourId;
use std::slice;
use std::vec;

/// Ordered container a finished stack is written into.
pub trait StackSink<H>: Default {
    fn append(&mut self, histogram: H, colour: ColourId);
}

#[derive(Clone, Debug, PartialEq)]
pub struct StackEntry<H> {
    pub histogram: H,
    pub colour: ColourId,
}

/// Histograms in stacking order, base layer first, each with its colour.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramStack<H> {
    entries: Vec<StackEntry<H>>,
}

impl<H> Default for HistogramStack<H> {
    fn default() -> Self {
        HistogramStack { entries: Vec::new() }
    }
}

impl<H> StackSink<H> for HistogramStack<H> {
    fn append(&mut self, histogram: H, colour: ColourId) {
        self.entries.push(StackEntry { histogram, colour });
    }
}

impl<H> HistogramStack<H> {
    pub fn entries(&self) -> &[StackEntry<H>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StackEntry<H>> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, StackEntry<H>> {
        self.entries.iter()
    }

    pub fn histograms(&self) -> impl Iterator<Item = &H> + '_ {
        self.entries.iter().map(|e| &e.histogram)
    }

    pub fn colours(&self) -> impl Iterator<Item = ColourId> + '_ {
        self.entries.iter().map(|e| e.colour)
    }

    pub fn into_entries(self) -> Vec<StackEntry<H>> {
        self.entries
    }
}

impl<H: ScalableHistogram> HistogramStack<H> {
    pub fn total_area(&self) -> f64 {
        self.histograms().map(ScalableHistogram::integral).sum()
    }

    /// Running sum of layer areas from the base upwards; the last value is the total.
    pub fn cumulative_areas(&self) -> Vec<f64> {
        self.histograms()
            .scan(0.0, |acc, h| {
                *acc += h.integral();
                Some(*acc)
            })
            .collect()
    }
}

impl<H> IntoIterator for HistogramStack<H> {
    type Item = StackEntry<H>;
    type IntoIter = vec::IntoIter<StackEntry<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, H> IntoIterator for &'a HistogramStack<H> {
    type Item = &'a StackEntry<H>;
    type IntoIter = slice::Iter<'a, StackEntry<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
