use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{
    instruction::{instruction::Instruction, lif::neuron::LifNeuron, maxpool::f32_cpu::f32_cpu},
    tensor::TensorDesc,
};

#[derive(Clone)]
pub struct MaxPoolInstruction {
    pub src: TensorDesc,
    pub dst: TensorDesc,
    pub kernel: usize,
    pub stride: usize,
}

impl Debug for MaxPoolInstruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "MaxPool(src={}, dst={}, kernel={}, stride={})",
            self.src, self.dst, self.kernel, self.stride
        )
    }
}

impl Instruction for MaxPoolInstruction {
    fn name(&self) -> String {
        "MaxPool".to_string()
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
            self.dst.dims(),
            src,
            dst,
            self.kernel,
            self.stride,
        );
    }
}
