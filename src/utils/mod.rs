pub mod error;
pub mod math;
pub mod trace_init;

pub use error::{Result, SpikeNetError};
