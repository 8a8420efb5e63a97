pub mod shared_palette;
#[cfg(feature = "parallel")]
pub mod parallel_ensemble;

pub use self::shared_palette::SharedPalette;
