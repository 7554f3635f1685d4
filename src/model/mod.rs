pub mod config;
pub mod network;
pub mod scratch;
pub mod stats;
pub mod weights;
