pub mod f32_cpu;
pub mod lif;
pub mod neuron;
