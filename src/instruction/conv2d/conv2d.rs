use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{
    instruction::{conv2d::f32_cpu::f32_cpu, instruction::Instruction, lif::neuron::LifNeuron},
    tensor::TensorDesc,
};

pub struct Conv2DInstruction<'w> {
    pub src: TensorDesc,
    pub dst: TensorDesc,
    pub weights: &'w [f32],
    pub weight_dims: [usize; 4],
    pub stride: usize,
    pub padding: usize,
}

impl Debug for Conv2DInstruction<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Conv2D(src={}, dst={}, kernel={}x{}, stride={}, padding={})",
            self.src,
            self.dst,
            self.weight_dims[2],
            self.weight_dims[3],
            self.stride,
            self.padding
        )
    }
}

impl Instruction for Conv2DInstruction<'_> {
    fn name(&self) -> String {
        "Conv2D".to_string()
    }

    fn src_desc(&self) -> &TensorDesc {
        &self.src
    }

    fn dst_desc(&self) -> &TensorDesc {
        &self.dst
    }

    fn execute_cpu(&self, src: &[f32], dst: &mut [f32], _state: &mut [LifNeuron]) {
        f32_cpu(
            self.src.dims(),
            self.weight_dims,
            self.dst.dims(),
            src,
            self.weights,
            dst,
            self.stride,
            self.padding,
        );
    }
}
