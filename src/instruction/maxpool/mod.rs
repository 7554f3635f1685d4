pub mod f32_cpu;
pub mod maxpool;
