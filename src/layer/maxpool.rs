use crate::{
    instruction::{self, instruction::Instruction},
    tensor::TensorDesc,
    utils::{
        error::{Result, SpikeNetError},
        math::pool_output_size,
    },
};

use super::layer::{Layer, check_params};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaxPoolLayer {
    pub kernel: usize,
    pub stride: usize,
}

impl MaxPoolLayer {
    pub fn new(kernel: usize, stride: usize) -> Self {
        Self { kernel, stride }
    }
}

impl Layer for MaxPoolLayer {
    fn output_shape(&self, input_shape: &TensorDesc) -> Result<TensorDesc> {
        let out = |size: usize| {
            pool_output_size(size, self.kernel, self.stride).ok_or_else(|| {
                SpikeNetError::InvalidConfig(format!(
                    "MaxPool kernel={} stride={} does not fit input {}",
                    self.kernel, self.stride, input_shape
                ))
            })
        };

        Ok(TensorDesc::new(
            input_shape.channels(),
            out(input_shape.height())?,
            out(input_shape.width())?,
        ))
    }

    fn name(&self) -> String {
        "MaxPool".to_string()
    }

    fn config_string(&self) -> Option<String> {
        Some(format!(
            "kernel={}×{}, stride={}",
            self.kernel, self.kernel, self.stride
        ))
    }

    fn build_instruction<'w>(
        &self,
        input_shape: &TensorDesc,
        params: &'w [f32],
    ) -> Result<Box<dyn Instruction + 'w>> {
        let output_shape = self.output_shape(input_shape)?;
        check_params(self, params)?;

        Ok(instruction::maxpool(
            *input_shape,
            output_shape,
            self.kernel,
            self.stride,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_even_inputs() {
        let layer = MaxPoolLayer::new(2, 2);
        assert_eq!(
            layer.output_shape(&TensorDesc::new(16, 32, 32)).unwrap(),
            TensorDesc::new(16, 16, 16)
        );
        assert_eq!(
            layer.output_shape(&TensorDesc::new(4, 5, 5)).unwrap(),
            TensorDesc::new(4, 2, 2)
        );
        assert_eq!(layer.parameter_count(), 0);
    }

    #[test]
    fn rejects_window_larger_than_input() {
        let layer = MaxPoolLayer::new(2, 2);
        assert!(layer.output_shape(&TensorDesc::new(1, 1, 1)).is_err());
        assert!(MaxPoolLayer::new(2, 0).output_shape(&TensorDesc::new(1, 4, 4)).is_err());
    }
}
