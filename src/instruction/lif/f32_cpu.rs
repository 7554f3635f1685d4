use super::neuron::LifNeuron;

/// Applies one LIF update per element and writes the resulting spike (0 or 1).
pub fn f32_cpu(src: &[f32], dst: &mut [f32], state: &mut [LifNeuron], beta: f32, threshold: f32) {
    debug_assert_eq!(src.len(), dst.len());
    debug_assert_eq!(src.len(), state.len());

    for ((neuron, &current), out) in state.iter_mut().zip(src).zip(dst.iter_mut()) {
        neuron.update(current, beta, threshold);
        *out = neuron.spike();
    }
}
