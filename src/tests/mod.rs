#[macro_use]
pub mod util;
mod stack;
