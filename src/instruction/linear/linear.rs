use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{
    instruction::{instruction::Instruction, lif::neuron::LifNeuron, linear::f32_cpu::f32_cpu},
    tensor::TensorDesc,
};

pub struct LinearInstruction<'w> {
    pub src: TensorDesc,
    pub dst: TensorDesc,
    pub weights: &'w [f32],
}

impl Debug for LinearInstruction<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Linear(src={}, dst={})", self.src, self.dst)
    }
}

impl Instruction for LinearInstruction<'_> {
    fn name(&self) -> String {
        "Linear".to_string()
    }

    fn src_desc(&self) -> &TensorDesc {
        &self.src
    }

    fn dst_desc(&self) -> &TensorDesc {
        &self.dst
    }

    fn execute_cpu(&self, src: &[f32], dst: &mut [f32], _state: &mut [LifNeuron]) {
        f32_cpu(
            self.src.num_elements(),
            self.dst.num_elements(),
            src,
            self.weights,
            dst,
        );
    }
}
