#[macro_use]
pub mod util;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod content;
pub mod scalable_histogram;

pub use self::content::BinContent;
pub use self::errors::*;
pub use self::scalable_histogram::ScalableHistogram;
pub use self::settings::ScalerSettings;
