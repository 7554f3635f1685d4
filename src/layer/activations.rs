use crate::{
    instruction::{self, instruction::Instruction},
    tensor::TensorDesc,
    utils::error::{Result, SpikeNetError},
};

use super::layer::{Layer, check_params};

/// Leaky integrate-and-fire activation, evaluated once per element per call.
#[derive(Clone, Debug, PartialEq)]
pub struct LifLayer {
    pub beta: f32,
    pub threshold: f32,
}

impl LifLayer {
    pub fn new(beta: f32, threshold: f32) -> Self {
        Self { beta, threshold }
    }
}

impl Layer for LifLayer {
    fn output_shape(&self, input_shape: &TensorDesc) -> Result<TensorDesc> {
        if !self.beta.is_finite() || !self.threshold.is_finite() {
            return Err(SpikeNetError::InvalidConfig(format!(
                "LIF beta={} threshold={} must be finite",
                self.beta, self.threshold
            )));
        }
        // Activation functions preserve input shape
        Ok(*input_shape)
    }

    fn name(&self) -> String {
        "LIF".to_string()
    }

    fn config_string(&self) -> Option<String> {
        Some(format!("beta={}, threshold={}", self.beta, self.threshold))
    }

    fn build_instruction<'w>(
        &self,
        input_shape: &TensorDesc,
        params: &'w [f32],
    ) -> Result<Box<dyn Instruction + 'w>> {
        let output_shape = self.output_shape(input_shape)?;
        check_params(self, params)?;

        Ok(instruction::lif(output_shape, self.beta, self.threshold))
    }
}
