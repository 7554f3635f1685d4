use crate::{
    instruction::{self, instruction::Instruction},
    tensor::TensorDesc,
    utils::error::{Result, SpikeNetError},
};

use super::layer::{Layer, check_params};

/// Fully-connected layer without bias over a flattened input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearLayer {
    pub in_features: usize,
    pub out_features: usize,
}

impl LinearLayer {
    pub fn new(in_features: usize, out_features: usize) -> Self {
        Self {
            in_features,
            out_features,
        }
    }
}

impl Layer for LinearLayer {
    fn output_shape(&self, input_shape: &TensorDesc) -> Result<TensorDesc> {
        if !input_shape.is_vector() {
            return Err(SpikeNetError::InvalidConfig(format!(
                "Linear layer requires a flattened input, got {}",
                input_shape
            )));
        }
        if input_shape.num_elements() != self.in_features {
            return Err(SpikeNetError::ChannelMismatch {
                stage: self.name(),
                expected: self.in_features,
                actual: input_shape.num_elements(),
            });
        }
        if self.out_features == 0 {
            return Err(SpikeNetError::InvalidConfig(
                "Linear layer needs at least one output feature".to_string(),
            ));
        }

        Ok(TensorDesc::vector(self.out_features))
    }

    fn parameter_dims(&self) -> Option<Vec<usize>> {
        Some(vec![self.out_features, self.in_features])
    }

    fn name(&self) -> String {
        "Linear".to_string()
    }

    fn config_string(&self) -> Option<String> {
        Some("bias=false".to_string())
    }

    fn build_instruction<'w>(
        &self,
        input_shape: &TensorDesc,
        params: &'w [f32],
    ) -> Result<Box<dyn Instruction + 'w>> {
        let output_shape = self.output_shape(input_shape)?;
        check_params(self, params)?;

        Ok(instruction::linear(*input_shape, output_shape, params))
    }
}
