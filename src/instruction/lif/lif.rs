use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{
    instruction::{
        instruction::Instruction,
        lif::{f32_cpu::f32_cpu, neuron::LifNeuron},
    },
    tensor::TensorDesc,
};

#[derive(Clone)]
pub struct LifInstruction {
    pub desc: TensorDesc,
    pub beta: f32,
    pub threshold: f32,
}

impl Debug for LifInstruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "LIF(src={}, beta={}, threshold={})",
            self.desc, self.beta, self.threshold
        )
    }
}

impl Instruction for LifInstruction {
    fn name(&self) -> String {
        "LIF".to_string()
    }

    fn src_desc(&self) -> &TensorDesc {
        &self.desc
    }

    fn dst_desc(&self) -> &TensorDesc {
        &self.desc
    }

    fn state_len(&self) -> usize {
        self.desc.num_elements()
    }

    fn execute_cpu(&self, src: &[f32], dst: &mut [f32], state: &mut [LifNeuron]) {
        f32_cpu(src, dst, state, self.beta, self.threshold);
    }
}
