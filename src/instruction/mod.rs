use crate::{
    instruction::{
        conv2d::conv2d::Conv2DInstruction, instruction::Instruction, lif::lif::LifInstruction,
        linear::linear::LinearInstruction, maxpool::maxpool::MaxPoolInstruction,
        reshape::reshape::ReshapeInstruction,
    },
    tensor::TensorDesc,
};

pub mod conv2d;
pub mod instruction;
pub mod lif;
pub mod linear;
pub mod maxpool;
pub mod reshape;

pub fn conv2d<'w>(
    src: TensorDesc,
    dst: TensorDesc,
    weights: &'w [f32],
    weight_dims: [usize; 4],
    stride: usize,
    padding: usize,
) -> Box<dyn Instruction + 'w> {
    Box::new(Conv2DInstruction {
        src,
        dst,
        weights,
        weight_dims,
        stride,
        padding,
    })
}

pub fn maxpool(src: TensorDesc, dst: TensorDesc, kernel: usize, stride: usize) -> Box<dyn Instruction> {
    Box::new(MaxPoolInstruction {
        src,
        dst,
        kernel,
        stride,
    })
}

pub fn lif(desc: TensorDesc, beta: f32, threshold: f32) -> Box<dyn Instruction> {
    Box::new(LifInstruction {
        desc,
        beta,
        threshold,
    })
}

pub fn linear<'w>(src: TensorDesc, dst: TensorDesc, weights: &'w [f32]) -> Box<dyn Instruction + 'w> {
    Box::new(LinearInstruction { src, dst, weights })
}

pub fn reshape(src: TensorDesc, dst: TensorDesc) -> Box<dyn Instruction> {
    Box::new(ReshapeInstruction { src, dst })
}
