pub mod conv2d;
pub mod f32_cpu;
