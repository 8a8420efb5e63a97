pub mod builder;
pub mod colour;
pub mod histogram_stack;
pub mod stack_builder;

pub use self::builder::Builder;
pub use self::colour::{ColourId, ColourService, Palette};
pub use self::histogram_stack::{HistogramStack, StackEntry, StackSink};
pub use self::stack_builder::StackBuilder;
