//! External optimization pass via the `gifsicle` executable.

mod executor;
mod types;

pub use executor::Gifsicle;
pub use types::OptimizeOutcome;
