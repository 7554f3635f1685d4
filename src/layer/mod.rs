pub mod activations;
pub mod conv2d;
pub mod factory;
pub mod layer;
pub mod linear;
pub mod maxpool;
pub mod reshape;
