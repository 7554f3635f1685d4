use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{
    instruction::{instruction::Instruction, lif::neuron::LifNeuron},
    tensor::TensorDesc,
};

/// Flattens a (C, H, W) tensor into a vector. Row-major storage already is
/// channel-major, so this is a straight copy into the vector-shaped buffer.
#[derive(Clone)]
pub struct ReshapeInstruction {
    pub src: TensorDesc,
    pub dst: TensorDesc,
}

impl Debug for ReshapeInstruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Reshape(src={}, dst={})", self.src, self.dst)
    }
}

impl Instruction for ReshapeInstruction {
    fn name(&self) -> String {
        "Reshape".to_string()
    }

    fn src_desc(&self) -> &TensorDesc {
        &self.src
    }

    fn dst_desc(&self) -> &TensorDesc {
        &self.dst
    }

    fn execute_cpu(&self, src: &[f32], dst: &mut [f32], _state: &mut [LifNeuron]) {
        dst.copy_from_slice(src);
    }
}
