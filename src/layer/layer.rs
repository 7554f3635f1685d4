use crate::{
    instruction::instruction::Instruction,
    tensor::TensorDesc,
    utils::error::{Result, SpikeNetError},
};

pub trait Layer: Send + Sync {
    // Calculate the output shape, rejecting inputs this layer cannot consume
    fn output_shape(&self, input_shape: &TensorDesc) -> Result<TensorDesc>;

    // For parameterised layers, the dimensions of the weight tensor
    fn parameter_dims(&self) -> Option<Vec<usize>> {
        None
    }

    // Return the total number of parameters in this layer
    fn parameter_count(&self) -> usize {
        self.parameter_dims()
            .map(|dims| dims.iter().product())
            .unwrap_or(0)
    }

    // Return a string representation of the layers name
    fn name(&self) -> String;

    // Return optional configuration details for the layer
    fn config_string(&self) -> Option<String> {
        None
    }

    /// Builds the executable stage for `input_shape`. `params` must hold
    /// exactly `parameter_count()` values; parameterless layers get an empty
    /// slice.
    fn build_instruction<'w>(
        &self,
        input_shape: &TensorDesc,
        params: &'w [f32],
    ) -> Result<Box<dyn Instruction + 'w>>;
}

/// Checks a weight slice against the layer's declared parameter count.
pub fn check_params(layer: &dyn Layer, params: &[f32]) -> Result<()> {
    let expected = layer.parameter_count();
    if params.len() != expected {
        return Err(SpikeNetError::WeightShape {
            layer: layer.name(),
            expected,
            actual: params.len(),
        });
    }
    Ok(())
}
