use crate::{
    instruction::{self, instruction::Instruction},
    tensor::TensorDesc,
    utils::{
        error::{Result, SpikeNetError},
        math::conv_output_size,
    },
};

use super::layer::{Layer, check_params};

/// Square-kernel convolution without bias.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conv2DLayer {
    pub in_features: usize,  // Input channels
    pub out_features: usize, // Output channels
    pub kernel: usize,
    pub stride: usize,
    pub padding: usize,
}

impl Conv2DLayer {
    pub fn new(
        in_features: usize,
        out_features: usize,
        kernel: usize,
        stride: usize,
        padding: usize,
    ) -> Self {
        Self {
            in_features,
            out_features,
            kernel,
            stride,
            padding,
        }
    }

    pub fn weight_dims(&self) -> [usize; 4] {
        [self.out_features, self.in_features, self.kernel, self.kernel]
    }
}

impl Layer for Conv2DLayer {
    fn output_shape(&self, input_shape: &TensorDesc) -> Result<TensorDesc> {
        if input_shape.channels() != self.in_features {
            return Err(SpikeNetError::ChannelMismatch {
                stage: self.name(),
                expected: self.in_features,
                actual: input_shape.channels(),
            });
        }
        if self.out_features == 0 {
            return Err(SpikeNetError::InvalidConfig(
                "Conv2D needs at least one output channel".to_string(),
            ));
        }

        let out = |size: usize| {
            conv_output_size(size, self.kernel, self.stride, self.padding).ok_or_else(|| {
                SpikeNetError::InvalidConfig(format!(
                    "Conv2D kernel={} stride={} padding={} does not fit input {}",
                    self.kernel, self.stride, self.padding, input_shape
                ))
            })
        };

        Ok(TensorDesc::new(
            self.out_features,
            out(input_shape.height())?,
            out(input_shape.width())?,
        ))
    }

    fn parameter_dims(&self) -> Option<Vec<usize>> {
        Some(self.weight_dims().to_vec())
    }

    fn name(&self) -> String {
        "Conv2D".to_string()
    }

    fn config_string(&self) -> Option<String> {
        Some(format!(
            "kernel={}×{}, stride={}, padding={}, bias=false",
            self.kernel, self.kernel, self.stride, self.padding
        ))
    }

    fn build_instruction<'w>(
        &self,
        input_shape: &TensorDesc,
        params: &'w [f32],
    ) -> Result<Box<dyn Instruction + 'w>> {
        let output_shape = self.output_shape(input_shape)?;
        check_params(self, params)?;

        Ok(instruction::conv2d(
            *input_shape,
            output_shape,
            params,
            self.weight_dims(),
            self.stride,
            self.padding,
        ))
    }
}
