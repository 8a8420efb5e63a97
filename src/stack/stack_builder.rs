use crate::stack::builder::Builder;
use crate::stack::colour::{ColourId, ColourService};
use crate::stack::histogram_stack::{HistogramStack, StackEntry, StackSink};
use std::marker::PhantomData;

/// Collects histograms into a colour-differentiated stack.
///
/// The order of `add` calls is the stacking order, the first histogram being the base
/// layer. Inputs are taken as they are; any normalization happens before they get here.
/// `build` consumes the builder, so a stack is finalized exactly once.
pub struct StackBuilder<H, C, S = HistogramStack<H>> {
    colours: C,
    pending: Vec<StackEntry<H>>,
    phantom: PhantomData<S>,
}

impl<H, C: ColourService> StackBuilder<H, C> {
    pub fn new(colours: C) -> StackBuilder<H, C> {
        StackBuilder::with_sink(colours)
    }
}

impl<H, C: ColourService, S: StackSink<H>> StackBuilder<H, C, S> {
    pub fn with_sink(colours: C) -> StackBuilder<H, C, S> {
        StackBuilder {
            colours,
            pending: Vec::new(),
            phantom: PhantomData,
        }
    }

    /// Queues `histogram` on top of the stack with the next colour and hands it back
    /// for further decoration.
    pub fn add(&mut self, histogram: H) -> &mut H {
        let colour = self.colours.next_colour();
        trace!("stacking layer {} with {}", self.pending.len(), colour);
        self.pending.push(StackEntry { histogram, colour });
        let top = self.pending.len() - 1;
        &mut self.pending[top].histogram
    }

    pub fn add_all<I: IntoIterator<Item = H>>(&mut self, histograms: I) {
        for histogram in histograms {
            self.add(histogram);
        }
    }

    pub fn colour_of(&self, index: usize) -> Option<ColourId> {
        self.pending.get(index).map(|e| e.colour)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<H, C: ColourService, S: StackSink<H>> Builder<S> for StackBuilder<H, C, S> {
    fn build(self) -> S {
        debug!("building stack of {} histograms", self.pending.len());
        let mut sink = S::default();
        for entry in self.pending {
            sink.append(entry.histogram, entry.colour);
        }
        sink
    }
}
