pub mod binned_histogram;

pub use self::binned_histogram::BinnedHistogram;
