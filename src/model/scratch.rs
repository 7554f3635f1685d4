use crate::{
    instruction::lif::neuron::LifNeuron,
    tensor::{Tensor, TensorDesc},
};

/// Per-call working memory: one output buffer and one neuron-state array per
/// stage, sized once from the network plan.
pub struct Scratch {
    pub(crate) buffers: Vec<Tensor>,
    pub(crate) states: Vec<Vec<LifNeuron>>,
}

impl Scratch {
    pub(crate) fn new(stages: impl IntoIterator<Item = (TensorDesc, usize)>) -> Self {
        let (buffers, states) = stages
            .into_iter()
            .map(|(desc, state_len)| {
                (
                    Tensor::zeros(desc),
                    vec![LifNeuron::default(); state_len],
                )
            })
            .unzip();
        Self { buffers, states }
    }

    /// Returns every neuron to `(0, false)`. Buffers need no clearing since
    /// each stage overwrites its whole output.
    pub fn reset(&mut self) {
        for state in &mut self.states {
            state.fill(LifNeuron::default());
        }
    }

    pub fn num_stages(&self) -> usize {
        self.buffers.len()
    }

    pub fn stage_output(&self, stage: usize) -> Option<&Tensor> {
        self.buffers.get(stage)
    }

    pub fn output(&self) -> Option<&Tensor> {
        self.buffers.last()
    }

    /// Neuron states left by the last call; empty for non-spiking stages.
    pub fn neuron_states(&self, stage: usize) -> &[LifNeuron] {
        self.states.get(stage).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn size_in_bytes(&self) -> usize {
        let buffers: usize = self.buffers.iter().map(|t| t.desc().size_in_bytes()).sum();
        let states: usize = self
            .states
            .iter()
            .map(|s| s.len() * std::mem::size_of::<LifNeuron>())
            .sum();
        buffers + states
    }

    pub(crate) fn matches(&self, stages: impl ExactSizeIterator<Item = (TensorDesc, usize)>) -> bool {
        stages.len() == self.buffers.len()
            && stages
                .zip(self.buffers.iter().zip(&self.states))
                .all(|((desc, state_len), (buf, state))| {
                    *buf.desc() == desc && state.len() == state_len
                })
    }
}
