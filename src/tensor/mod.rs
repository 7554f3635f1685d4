mod desc;
pub use desc::TensorDesc;
mod tensor;
pub use tensor::Tensor;
