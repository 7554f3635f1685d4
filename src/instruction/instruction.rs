use std::fmt::Debug;

use crate::{instruction::lif::neuron::LifNeuron, tensor::TensorDesc};

/// One executable pipeline stage. Shapes are fixed when the instruction is
/// built, so execution performs no validation.
pub trait Instruction: Debug + Send + Sync {
    fn name(&self) -> String;

    fn src_desc(&self) -> &TensorDesc;

    fn dst_desc(&self) -> &TensorDesc;

    // Neuron-state slots this stage needs per call
    fn state_len(&self) -> usize {
        0
    }

    /// Overwrites every element of `dst` from `src`. `state` is empty unless
    /// `state_len` is non-zero.
    fn execute_cpu(&self, src: &[f32], dst: &mut [f32], state: &mut [LifNeuron]);
}
