pub mod histogram_scaler;
pub mod weighted_histogram;
pub mod ensemble_scaler;

pub use self::ensemble_scaler::WeightedEnsembleScaler;
pub use self::histogram_scaler::HistogramScaler;
pub use self::weighted_histogram::WeightedHistogram;
