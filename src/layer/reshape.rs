use crate::{
    instruction::{self, instruction::Instruction},
    tensor::TensorDesc,
    utils::error::Result,
};

use super::layer::{Layer, check_params};

/// Flattens (C, H, W) into a channel-major vector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlattenLayer;

impl Layer for FlattenLayer {
    fn output_shape(&self, input_shape: &TensorDesc) -> Result<TensorDesc> {
        Ok(input_shape.flatten())
    }

    fn name(&self) -> String {
        "Flatten".to_string()
    }

    fn build_instruction<'w>(
        &self,
        input_shape: &TensorDesc,
        params: &'w [f32],
    ) -> Result<Box<dyn Instruction + 'w>> {
        check_params(self, params)?;
        Ok(instruction::reshape(*input_shape, input_shape.flatten()))
    }
}
