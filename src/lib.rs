extern crate lazycell;
#[macro_use]
extern crate log;
extern crate num_traits;
extern crate parking_lot;
#[cfg(feature = "parallel")]
extern crate rayon;

#[macro_use]
mod core;
pub mod concurrent;
pub use crate::core::errors::*;
pub use crate::core::{constants, util::within_tolerance, BinContent, ScalableHistogram, ScalerSettings};
pub mod st;
pub mod scaling;
pub mod stack;

pub use crate::concurrent::SharedPalette;
pub use crate::scaling::{HistogramScaler, WeightedEnsembleScaler, WeightedHistogram};
pub use crate::st::BinnedHistogram;
pub use crate::stack::{Builder, ColourId, ColourService, HistogramStack, Palette, StackBuilder, StackEntry, StackSink};

#[cfg(test)]
pub mod tests;
