//! spikenet - single-shot spiking CNN inference on the CPU
//!
//! Classifies one (3, 32, 32) image through three Conv -> LIF -> MaxPool
//! blocks and two fully connected LIF stages, then takes the arg-max of the
//! final spike vector. Weights are borrowed, working memory is preallocated
//! per network, and no state survives between calls.

pub mod dataloader;

pub mod importers;

pub mod instruction;

pub mod layer;

pub mod model;

pub mod tensor;

pub mod timing;

pub mod utils;

pub use dataloader::image::{load_image, synthetic_image};
pub use importers::raw_f32::{load_weights, save_weights};
pub use instruction::lif::neuron::LifNeuron;
pub use layer::factory::Layers;
pub use model::{
    config::{NetworkConfig, NetworkPlan},
    network::Network,
    scratch::Scratch,
    stats::print_model_stats,
    weights::{NetworkWeights, WeightInit, WeightStore},
};
pub use tensor::{Tensor, TensorDesc};
pub use timing::tick::{MonotonicClock, TickSource, timed};
pub use utils::{Result, SpikeNetError, math::argmax, trace_init::init_tracing};
